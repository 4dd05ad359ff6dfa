//! Run configuration.
//!
//! A run is described by a [`GenerateConfig`], built from the `glex.yaml`
//! manifest (if any) with command-line flags layered on top.

pub mod manifest;
pub mod scanner;

use std::borrow::Cow;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{GlexError, Result};
use crate::resource::ResourceReader;

pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use scanner::{detect_role, scan_directory, ScanResult, SpecRole};

/// Which APIs to generate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApiSelection {
    /// One merged set of artifacts covering every API.
    #[default]
    All,
    /// One set of artifacts per API, in this order.
    Only(Vec<String>),
}

impl ApiSelection {
    /// Build a selection from a list of names. An empty list selects all.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            ApiSelection::All
        } else {
            ApiSelection::Only(names)
        }
    }

    /// Parse an `--api` argument.
    ///
    /// `A,B` names the APIs directly; `@path` reads one API per line from a
    /// resource (blank lines and `#` comments are skipped).
    pub fn parse(arg: &str, reader: &dyn ResourceReader) -> Result<Self> {
        match arg.strip_prefix('@') {
            Some(name) => {
                let list = reader.read_to_string(name)?;
                let names = list
                    .lines()
                    .map(|line| line.split('#').next().unwrap_or("").trim())
                    .filter(|line| !line.is_empty());
                Ok(Self::from_names(names))
            }
            None => Ok(Self::from_names(arg.split(','))),
        }
    }
}

/// Line terminator used for written artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    /// Convert `\n`-terminated text to this line ending.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            LineEnding::Lf => Cow::Borrowed(text),
            LineEnding::Crlf => Cow::Owned(text.replace("\r\n", "\n").replace('\n', "\r\n")),
        }
    }
}

/// Everything a generate run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub enum_spec: String,
    pub func_spec: String,
    pub type_map: String,
    pub apis: ApiSelection,
    pub output: PathBuf,
    pub line_ending: LineEnding,
    pub max_line_width: Option<usize>,
    /// 0 = quiet, 1 = diagnostics, 2+ = table dumps.
    pub debug: u8,
}

impl GenerateConfig {
    /// Start from a manifest. Fails if any of the three inputs is missing.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        let required = |value: &Option<String>, key: &str| {
            value.clone().ok_or_else(|| GlexError::Config {
                message: format!("no {} given", key),
                help: Some(format!(
                    "Set `{}` in {} or pass --{}",
                    key,
                    MANIFEST_FILENAME,
                    key.replace('_', "-")
                )),
            })
        };

        Ok(Self {
            enum_spec: required(&manifest.enum_spec, "enum_spec")?,
            func_spec: required(&manifest.func_spec, "func_spec")?,
            type_map: required(&manifest.type_map, "type_map")?,
            apis: ApiSelection::from_names(&manifest.apis),
            output: manifest.output.clone(),
            line_ending: manifest.line_ending,
            max_line_width: manifest.max_line_width,
            debug: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::MemoryStore;

    #[test]
    fn test_api_list() {
        let store = MemoryStore::new();
        let selection = ApiSelection::parse("ARB_multitexture, EXT_texture3D,", &store).unwrap();
        assert_eq!(
            selection,
            ApiSelection::Only(vec!["ARB_multitexture".into(), "EXT_texture3D".into()])
        );
    }

    #[test]
    fn test_empty_api_list_is_all() {
        let store = MemoryStore::new();
        assert_eq!(ApiSelection::parse("", &store).unwrap(), ApiSelection::All);
        assert_eq!(ApiSelection::parse(" , ", &store).unwrap(), ApiSelection::All);
    }

    #[test]
    fn test_api_file() {
        let mut store = MemoryStore::new();
        store.add_resource("apis.txt", "# wanted\nVERSION_1_2\n\nARB_imaging  # trailing\n");

        let selection = ApiSelection::parse("@apis.txt", &store).unwrap();
        assert_eq!(
            selection,
            ApiSelection::Only(vec!["VERSION_1_2".into(), "ARB_imaging".into()])
        );
    }

    #[test]
    fn test_missing_api_file() {
        let store = MemoryStore::new();
        assert!(matches!(
            ApiSelection::parse("@missing.txt", &store),
            Err(GlexError::Resource { .. })
        ));
    }

    #[test]
    fn test_line_ending() {
        assert_eq!(LineEnding::Lf.apply("a\nb\n"), "a\nb\n");
        assert_eq!(LineEnding::Crlf.apply("a\nb\n"), "a\r\nb\r\n");
        assert_eq!(LineEnding::Crlf.apply("a\r\nb"), "a\r\nb");
    }

    #[test]
    fn test_from_manifest_requires_inputs() {
        let manifest = Manifest {
            enum_spec: Some("enumext.spec".into()),
            func_spec: Some("gl.spec".into()),
            ..Default::default()
        };
        match GenerateConfig::from_manifest(&manifest) {
            Err(GlexError::Config { message, help }) => {
                assert_eq!(message, "no type_map given");
                assert!(help.unwrap().contains("--type-map"));
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_manifest() {
        let manifest = Manifest {
            enum_spec: Some("enumext.spec".into()),
            func_spec: Some("gl.spec".into()),
            type_map: Some("gl.tm".into()),
            apis: vec!["VERSION_1_2".into()],
            line_ending: LineEnding::Crlf,
            ..Default::default()
        };
        let config = GenerateConfig::from_manifest(&manifest).unwrap();
        assert_eq!(config.apis, ApiSelection::Only(vec!["VERSION_1_2".into()]));
        assert_eq!(config.output, PathBuf::from("generated"));
        assert_eq!(config.line_ending, LineEnding::Crlf);
        assert_eq!(config.debug, 0);
    }
}

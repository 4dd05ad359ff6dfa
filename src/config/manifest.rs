//! Project manifest (glex.yaml) parsing.
//!
//! The manifest names the three input specs and the output settings so a
//! project can run `glex generate` without flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GlexError, Result};

use super::LineEnding;

pub const MANIFEST_FILENAME: &str = "glex.yaml";

/// Project manifest loaded from glex.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Enumerant spec (e.g. `enumext.spec`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_spec: Option<String>,

    /// Function spec (e.g. `gl.spec`, `wglext.spec`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub func_spec: Option<String>,

    /// Type map (e.g. `gl.tm`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_map: Option<String>,

    /// APIs to generate. Empty means one merged set for all APIs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub apis: Vec<String>,

    /// Output directory for generated sources.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    pub line_ending: LineEnding,

    /// Warn about input lines wider than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_line_width: Option<usize>,
}

fn default_output() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            enum_spec: None,
            func_spec: None,
            type_map: None,
            apis: vec![],
            output: default_output(),
            line_ending: LineEnding::default(),
            max_line_width: None,
        }
    }
}

impl Manifest {
    /// Load manifest from a glex.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GlexError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `dir/glex.yaml` if it exists, defaults otherwise.
    pub fn find(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str::<Option<Self>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| GlexError::Config {
                message: format!("Invalid manifest: {}", e),
                help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
            })
    }

    /// Rebase relative input and output paths onto `dir`.
    pub fn relative_to(mut self, dir: &Path) -> Self {
        let rebase = |value: &mut Option<String>| {
            if let Some(path) = value {
                if Path::new(path.as_str()).is_relative() {
                    *path = dir.join(path.as_str()).to_string_lossy().into_owned();
                }
            }
        };
        rebase(&mut self.enum_spec);
        rebase(&mut self.func_spec);
        rebase(&mut self.type_map);
        if self.output.is_relative() {
            self.output = dir.join(&self.output);
        }
        self
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| GlexError::Config {
            message: format!("Unable to serialize manifest: {}", e),
            help: None,
        })
    }
}

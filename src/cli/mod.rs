pub mod completions;
pub mod generate;
pub mod init;
pub mod list;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use crate::config::Manifest;
use crate::error::Result;

/// glex - OpenGL extension loader generator
#[derive(Parser, Debug)]
#[command(name = "glex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Debug level: 0 quiet, 1 diagnostics, 2 table dumps
    #[arg(long, short, global = true, default_value_t = 0)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log level for the `--debug` value. A `RUST_LOG` directive
    /// parsed after it takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.debug {
            0 => LevelFilter::Error,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate loader sources from spec files
    Generate(generate::GenerateArgs),

    /// Initialize a glex project (generates glex.yaml)
    Init(init::InitArgs),

    /// List the APIs found in the spec files
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Input selection shared by `generate` and `list`.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Manifest to read (default: ./glex.yaml if present)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Enumerant spec (e.g. enumext.spec)
    #[arg(long)]
    pub enum_spec: Option<String>,

    /// Function spec (e.g. gl.spec)
    #[arg(long)]
    pub func_spec: Option<String>,

    /// Type map (e.g. gl.tm)
    #[arg(long)]
    pub type_map: Option<String>,

    /// Warn about input lines wider than this
    #[arg(long)]
    pub max_line_width: Option<usize>,
}

impl InputArgs {
    /// Load the manifest and apply command-line overrides.
    ///
    /// Paths in a manifest are relative to the manifest's directory; paths
    /// given as flags are relative to the working directory.
    pub fn manifest(&self) -> Result<Manifest> {
        let mut manifest = match &self.manifest {
            Some(path) => {
                let dir = path.parent().unwrap_or_else(|| Path::new(""));
                Manifest::load(path)?.relative_to(dir)
            }
            None => Manifest::find(Path::new("."))?,
        };

        if let Some(path) = &self.enum_spec {
            manifest.enum_spec = Some(path.clone());
        }
        if let Some(path) = &self.func_spec {
            manifest.func_spec = Some(path.clone());
        }
        if let Some(path) = &self.type_map {
            manifest.type_map = Some(path.clone());
        }
        if self.max_line_width.is_some() {
            manifest.max_line_width = self.max_line_width;
        }

        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MANIFEST_FILENAME;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_debug_levels() {
        let cli = Cli::parse_from(["glex", "list"]);
        assert_eq!(cli.log_level(), LevelFilter::Error);

        let cli = Cli::parse_from(["glex", "generate", "--debug", "1"]);
        assert_eq!(cli.log_level(), LevelFilter::Debug);

        let cli = Cli::parse_from(["glex", "-d", "3", "list"]);
        assert_eq!(cli.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_default_level_leaves_warnings_to_diagnostics() {
        let cli = Cli::parse_from(["glex", "generate"]);
        assert!(cli.log_level() < LevelFilter::Warn);
    }

    #[test]
    fn test_flags_override_manifest() {
        let dir = tempdir().unwrap();
        let manifest_path = dir.path().join(MANIFEST_FILENAME);
        std::fs::write(
            &manifest_path,
            "enum_spec: enumext.spec\nfunc_spec: gl.spec\ntype_map: gl.tm\nmax_line_width: 80\n",
        )
        .unwrap();

        let args = InputArgs {
            manifest: Some(manifest_path),
            func_spec: Some("other/wglext.spec".into()),
            ..Default::default()
        };
        let manifest = args.manifest().unwrap();

        let expected_enum = dir.path().join("enumext.spec");
        assert_eq!(manifest.enum_spec.as_deref(), expected_enum.to_str());
        assert_eq!(manifest.func_spec.as_deref(), Some("other/wglext.spec"));
        assert_eq!(manifest.max_line_width, Some(80));
    }
}

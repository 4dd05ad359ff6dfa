//! Init command implementation.
//!
//! Generates a `glex.yaml` manifest from the spec files found in a
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{scan_directory, Manifest, ScanResult, SpecRole, MANIFEST_FILENAME};
use crate::error::{GlexError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a glex project by generating a glex.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing glex.yaml
    #[arg(long)]
    pub force: bool,
}

fn role_name(role: SpecRole) -> &'static str {
    match role {
        SpecRole::EnumSpec => "enum spec",
        SpecRole::FuncSpec => "func spec",
        SpecRole::TypeMap => "type map",
    }
}

/// First file for `role`, relative to `root`. Extra candidates are reported.
fn pick(scan: &ScanResult, role: SpecRole, root: &Path, printer: &Printer) -> Option<String> {
    let Some((first, rest)) = scan.files_of_role(role).split_first() else {
        printer.warning("Missing", &format!("no {} found", role_name(role)));
        return None;
    };

    let relative = |path: &Path| -> String {
        path.strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    };

    for ignored in rest {
        printer.warning(
            "Ignoring",
            &format!("{} (another {})", relative(ignored), role_name(role)),
        );
    }

    let chosen = relative(first);
    printer.info("Discovered", &format!("{} {}", role_name(role), chosen));
    Some(chosen)
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(GlexError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let scan = scan_directory(&args.path);

    let manifest = Manifest {
        enum_spec: pick(&scan, SpecRole::EnumSpec, &args.path, printer),
        func_spec: pick(&scan, SpecRole::FuncSpec, &args.path, printer),
        type_map: pick(&scan, SpecRole::TypeMap, &args.path, printer),
        ..Default::default()
    };

    let yaml = manifest.to_yaml()?;
    fs::write(&manifest_path, &yaml).map_err(|e| GlexError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(scan.total(), "spec file", "spec files")
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(dir: &Path, force: bool) -> InitArgs {
        InitArgs {
            path: dir.to_path_buf(),
            force,
        }
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("registry")).unwrap();
        fs::write(dir.path().join("registry/enumext.spec"), "").unwrap();
        fs::write(dir.path().join("registry/gl.spec"), "").unwrap();
        fs::write(dir.path().join("registry/gl.tm"), "").unwrap();

        run(args(dir.path(), false), &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.enum_spec.as_deref(), Some("registry/enumext.spec"));
        assert_eq!(manifest.func_spec.as_deref(), Some("registry/gl.spec"));
        assert_eq!(manifest.type_map.as_deref(), Some("registry/gl.tm"));
        assert_eq!(manifest.output, PathBuf::from("generated"));
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        assert!(run(args(dir.path(), false), &Printer::plain()).is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();
        fs::write(dir.path().join("gl.spec"), "").unwrap();

        run(args(dir.path(), true), &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.output, PathBuf::from("generated"));
        assert_eq!(manifest.func_spec.as_deref(), Some("gl.spec"));
        assert!(manifest.enum_spec.is_none());
    }

    #[test]
    fn test_init_picks_first_func_spec() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("wglext.spec"), "").unwrap();
        fs::write(dir.path().join("gl.spec"), "").unwrap();

        run(args(dir.path(), false), &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.func_spec.as_deref(), Some("gl.spec"));
    }

    #[test]
    fn test_init_empty_directory() {
        let dir = tempdir().unwrap();

        run(args(dir.path(), false), &Printer::plain()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("output: generated"));
        assert!(!content.contains("func_spec"));
    }
}

//! File system scanner for locating registry spec files.
//!
//! Used by `glex init` to guess which file plays which role.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// What a discovered file is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecRole {
    EnumSpec,
    FuncSpec,
    TypeMap,
}

/// Spec files found under a directory, sorted by path.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub enum_specs: Vec<PathBuf>,
    pub func_specs: Vec<PathBuf>,
    pub type_maps: Vec<PathBuf>,
}

impl ScanResult {
    pub fn total(&self) -> usize {
        self.enum_specs.len() + self.func_specs.len() + self.type_maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn files_of_role(&self, role: SpecRole) -> &[PathBuf] {
        match role {
            SpecRole::EnumSpec => &self.enum_specs,
            SpecRole::FuncSpec => &self.func_specs,
            SpecRole::TypeMap => &self.type_maps,
        }
    }
}

/// Guess a file's role from its name.
///
/// `.tm` files are type maps; `.spec` files are enum specs if their name
/// mentions `enum` and function specs otherwise.
pub fn detect_role(path: &Path) -> Option<SpecRole> {
    let filename = path.file_name()?.to_str()?.to_ascii_lowercase();

    if filename.ends_with(".tm") {
        Some(SpecRole::TypeMap)
    } else if filename.ends_with(".spec") {
        if filename.contains("enum") {
            Some(SpecRole::EnumSpec)
        } else {
            Some(SpecRole::FuncSpec)
        }
    } else {
        None
    }
}

/// Recursively scan `root` for spec files.
pub fn scan_directory(root: &Path) -> ScanResult {
    let mut result = ScanResult::default();

    if !root.exists() {
        return result;
    }

    let entries = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file());

    for entry in entries {
        let path = entry.into_path();
        match detect_role(&path) {
            Some(SpecRole::EnumSpec) => result.enum_specs.push(path),
            Some(SpecRole::FuncSpec) => result.func_specs.push(path),
            Some(SpecRole::TypeMap) => result.type_maps.push(path),
            None => {}
        }
    }

    result
}

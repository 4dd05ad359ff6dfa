//! Input and output capabilities used by the pipeline.
//!
//! The pipeline never touches the file system directly: it reads specs
//! through a [`ResourceReader`] and persists artifacts through an
//! [`ArtifactWriter`]. [`FsReader`] and [`DirWriter`] are the file system
//! implementations; [`MemoryStore`] keeps everything in memory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LineEnding;
use crate::error::{GlexError, Result};

/// Read a named text resource.
pub trait ResourceReader {
    fn read_to_string(&self, name: &str) -> Result<String>;
}

/// Persist named text content.
pub trait ArtifactWriter {
    fn exists(&self, name: &str) -> bool;
    fn write(&mut self, name: &str, contents: &str) -> Result<()>;
}

/// Reads resources as files, relative to a base directory.
#[derive(Debug, Clone)]
pub struct FsReader {
    base: PathBuf,
}

impl FsReader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base.join(path)
        }
    }
}

impl ResourceReader for FsReader {
    fn read_to_string(&self, name: &str) -> Result<String> {
        let path = self.resolve(name);
        let bytes = fs::read(&path).map_err(|e| GlexError::Resource {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        // Some registry files carry Latin-1 bytes in comments.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Writes artifacts into a directory, creating it on first write.
#[derive(Debug, Clone)]
pub struct DirWriter {
    dir: PathBuf,
    line_ending: LineEnding,
}

impl DirWriter {
    pub fn new(dir: impl Into<PathBuf>, line_ending: LineEnding) -> Self {
        Self {
            dir: dir.into(),
            line_ending,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactWriter for DirWriter {
    fn exists(&self, name: &str) -> bool {
        self.dir.join(name).exists()
    }

    fn write(&mut self, name: &str, contents: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| GlexError::Io {
                path: self.dir.clone(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }

        let path = self.dir.join(name);
        fs::write(&path, self.line_ending.apply(contents).as_bytes()).map_err(|e| GlexError::Io {
            path,
            message: format!("Failed to write: {}", e),
        })
    }
}

/// In-memory resources and artifacts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    resources: BTreeMap<String, String>,
    artifacts: BTreeMap<String, String>,
    /// Artifact names whose writes fail.
    read_only: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_resource(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.resources.insert(name.into(), contents.into());
    }

    /// Make writes to `name` fail.
    pub fn deny_writes(&mut self, name: impl Into<String>) {
        self.read_only.push(name.into());
    }

    pub fn artifact(&self, name: &str) -> Option<&str> {
        self.artifacts.get(name).map(String::as_str)
    }

    pub fn artifact_names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }

    pub fn artifacts(&self) -> &BTreeMap<String, String> {
        &self.artifacts
    }
}

impl ResourceReader for MemoryStore {
    fn read_to_string(&self, name: &str) -> Result<String> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| GlexError::Resource {
                name: name.to_string(),
                message: "no such resource".to_string(),
            })
    }
}

impl ArtifactWriter for MemoryStore {
    fn exists(&self, name: &str) -> bool {
        self.artifacts.contains_key(name)
    }

    fn write(&mut self, name: &str, contents: &str) -> Result<()> {
        if self.read_only.iter().any(|denied| denied == name) {
            return Err(GlexError::Io {
                path: PathBuf::from(name),
                message: "write denied".to_string(),
            });
        }
        self.artifacts.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

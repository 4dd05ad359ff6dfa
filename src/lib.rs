//! glex - OpenGL extension loader generator
//!
//! Turns the OpenGL registry's line-oriented spec files (`enumext.spec`,
//! `gl.spec`, `gl.tm`) into C headers, function-pointer tables and loader
//! functions, one set per API or one merged set for all of them.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod resolver;
pub mod resource;
pub mod types;

pub use config::{ApiSelection, GenerateConfig, LineEnding, Manifest};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use emit::{render_scope, Artifact, ArtifactKind, Namespace, Scope};
pub use error::{GlexError, Result};
pub use pipeline::{load_tables, run, RunReport, Sources, Tables};
pub use resolver::{lookup, resolve, Resolution, Tier, Unresolved};
pub use resource::{ArtifactWriter, DirWriter, FsReader, MemoryStore, ResourceReader};
pub use types::{
    EnumTable, EnumValue, FuncRecord, FuncTable, Param, ResolvedEnumTable, TypeMap,
};

//! C source generation from resolved tables.
//!
//! For every API (or once for all APIs merged) up to three artifacts are
//! produced:
//!
//! - `<ns>_funcs.inl` - one `GLEX_FUNC(type, name, (args))` line per function
//! - `<ns>.h` - include guard, platform gates, `#define` block, extern block
//! - `<ns>.c` - pointer definitions and the `<ns>_init()` loader
//!
//! where `<ns>` is `GLEX` for the merged artifacts and `GLEX_<api>` otherwise.
//! All output is a pure function of the tables, so identical input gives
//! byte-identical files.

mod funcs;
mod globals;
mod header;
mod init;

use std::fmt;

pub use funcs::render_function_table;
pub use globals::{render_globals_header, GLOBALS_HEADER};
pub use header::render_header;
pub use init::render_init_code;

use crate::types::{FuncTable, ResolvedEnumTable};

/// Upper-cased application name; the root of every generated identifier.
pub const NAMESPACE_ROOT: &str = "GLEX";

/// Prefix of generated macros and pointer variables.
pub const MACRO_PREFIX: &str = "GLEX_";

/// Which part of the tables an emission covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// Every API, grouped in table order.
    All,
    /// A single API.
    Api(&'a str),
}

impl fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => write!(f, "all APIs"),
            Scope::Api(api) => write!(f, "{}", api),
        }
    }
}

/// Naming conventions for one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    name: String,
}

impl Namespace {
    pub fn for_scope(scope: Scope<'_>) -> Self {
        let name = match scope {
            Scope::All => NAMESPACE_ROOT.to_string(),
            Scope::Api(api) => format!("{}{}", MACRO_PREFIX, api),
        };
        Self { name }
    }

    /// `GLEX` or `GLEX_<api>`; also the name of the "loaded" flag.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn funcs_file(&self) -> String {
        format!("{}_funcs.inl", self.name)
    }

    pub fn header_file(&self) -> String {
        format!("{}.h", self.name)
    }

    pub fn source_file(&self) -> String {
        format!("{}.c", self.name)
    }

    /// Upper-cased header file name with `.` replaced by `_`.
    pub fn include_guard(&self) -> String {
        self.header_file().replace('.', "_").to_uppercase()
    }

    /// Macro that disables the whole API on platforms it does not apply to.
    pub fn ignore_macro(&self) -> String {
        format!("{}_IGNORE", self.name.to_uppercase())
    }

    pub fn init_function(&self) -> String {
        format!("{}_init", self.name)
    }
}

/// What an artifact contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    FunctionTable,
    Header,
    InitCode,
    Globals,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::FunctionTable => write!(f, "function table"),
            ArtifactKind::Header => write!(f, "header"),
            ArtifactKind::InitCode => write!(f, "init code"),
            ArtifactKind::Globals => write!(f, "globals header"),
        }
    }
}

/// A generated file, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub contents: String,
}

/// Render every artifact for `scope`.
///
/// The function table decides the rest: the header only gets its extern
/// block, and the init code is only produced, when there are functions.
/// An empty result means there is nothing to generate for the scope.
pub fn render_scope(
    enums: &ResolvedEnumTable,
    funcs: &FuncTable,
    scope: Scope<'_>,
) -> Vec<Artifact> {
    let namespace = Namespace::for_scope(scope);
    let mut artifacts = Vec::new();

    let table = render_function_table(funcs, scope);
    let has_funcs = table.is_some();
    if let Some(contents) = table {
        artifacts.push(Artifact {
            kind: ArtifactKind::FunctionTable,
            file_name: namespace.funcs_file(),
            contents,
        });
    }

    if let Some(contents) = render_header(enums, scope, has_funcs) {
        artifacts.push(Artifact {
            kind: ArtifactKind::Header,
            file_name: namespace.header_file(),
            contents,
        });
    }

    if has_funcs {
        artifacts.push(Artifact {
            kind: ArtifactKind::InitCode,
            file_name: namespace.source_file(),
            contents: render_init_code(scope),
        });
    }

    artifacts
}

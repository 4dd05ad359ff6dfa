//! Parse → resolve → emit driver.
//!
//! All three inputs are read and parsed, and every reference is resolved,
//! before anything is written. Emission then runs once per selected API
//! (or once for the merged scope). A failed write is recorded against its
//! API and the remaining APIs are still generated.

use log::{debug, info, log_enabled, trace, Level};
use serde::Serialize;

use crate::config::{ApiSelection, GenerateConfig};
use crate::diagnostics::Diagnostics;
use crate::emit::{self, render_globals_header, ArtifactKind, Scope, GLOBALS_HEADER};
use crate::error::{GlexError, Result};
use crate::parser::{check_line_widths, parse_enum_spec, parse_func_spec, parse_type_map};
use crate::resolver;
use crate::resource::{ArtifactWriter, ResourceReader};
use crate::types::{FuncTable, ResolvedEnumTable, TypeMap};

/// Parsed and resolved inputs of one run. Read-only once built.
#[derive(Debug, Clone)]
pub struct Tables {
    pub enums: ResolvedEnumTable,
    pub funcs: FuncTable,
    pub types: TypeMap,
}

/// Names of the three input resources.
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    pub enum_spec: &'a str,
    pub func_spec: &'a str,
    pub type_map: &'a str,
}

impl<'a> From<&'a GenerateConfig> for Sources<'a> {
    fn from(config: &'a GenerateConfig) -> Self {
        Self {
            enum_spec: &config.enum_spec,
            func_spec: &config.func_spec,
            type_map: &config.type_map,
        }
    }
}

/// Pretty-printed JSON of an intermediate table, for `--debug 2` dumps.
pub fn table_json<T: Serialize>(table: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}

fn trace_json<T: Serialize>(label: &str, table: &T) {
    if !log_enabled!(Level::Trace) {
        return;
    }
    match table_json(table) {
        Ok(json) => trace!("{}:\n{}", label, json),
        Err(err) => debug!("Unable to dump {}: {}", label, err),
    }
}

fn read(
    reader: &dyn ResourceReader,
    name: &str,
    max_line_width: Option<usize>,
    diagnostics: &mut Diagnostics,
) -> Result<String> {
    let source = reader.read_to_string(name)?;
    if let Some(width) = max_line_width {
        check_line_widths(name, &source, width, diagnostics);
    }
    Ok(source)
}

/// Read, parse and resolve the three inputs.
///
/// Any unreadable resource aborts the run. Parsing never fails; unresolved
/// references and long lines end up in `diagnostics`.
pub fn load_tables(
    reader: &dyn ResourceReader,
    sources: Sources<'_>,
    max_line_width: Option<usize>,
    diagnostics: &mut Diagnostics,
) -> Result<Tables> {
    let type_source = read(reader, sources.type_map, max_line_width, diagnostics)?;
    let func_source = read(reader, sources.func_spec, max_line_width, diagnostics)?;
    let enum_source = read(reader, sources.enum_spec, max_line_width, diagnostics)?;

    let types = parse_type_map(&type_source);
    debug!("Parsed {} type mappings from {}", types.len(), sources.type_map);

    let funcs = parse_func_spec(&func_source, &types);
    debug!(
        "Parsed {} functions in {} APIs from {}",
        funcs.function_count(),
        funcs.len(),
        sources.func_spec
    );
    trace_json("Function table", &funcs);

    let unresolved = parse_enum_spec(&enum_source);
    debug!(
        "Parsed {} enum APIs ({} use directives) from {}",
        unresolved.len(),
        unresolved.reference_count(),
        sources.enum_spec
    );
    trace_json("Unresolved enum table", &unresolved);

    let enums = resolver::resolve(&unresolved, diagnostics);
    trace_json("Resolved enum table", &enums);

    Ok(Tables {
        enums,
        funcs,
        types,
    })
}

/// A file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// API name, or `None` for merged and shared files.
    pub api: Option<String>,
    pub file_name: String,
    pub kind: ArtifactKind,
}

/// An API whose artifacts could not all be written.
#[derive(Debug)]
pub struct ApiFailure {
    pub api: String,
    pub error: GlexError,
}

/// Outcome of a generate run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub generated: Vec<GeneratedFile>,
    /// APIs that had nothing to emit.
    pub empty: Vec<String>,
    pub failures: Vec<ApiFailure>,
    pub diagnostics: Diagnostics,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn recorded failures into an error once the whole batch has run.
    pub fn into_result(self) -> Result<Self> {
        if self.failures.is_empty() {
            return Ok(self);
        }
        let apis: Vec<&str> = self.failures.iter().map(|f| f.api.as_str()).collect();
        Err(GlexError::Build {
            message: format!("unable to write output for {}", apis.join(", ")),
            help: self.failures.first().map(|f| f.error.to_string()),
        })
    }
}

/// Write the artifacts for one scope. Stops at the first failed write.
pub fn generate_scope(
    tables: &Tables,
    scope: Scope<'_>,
    writer: &mut dyn ArtifactWriter,
) -> Result<Vec<GeneratedFile>> {
    let api = match scope {
        Scope::All => None,
        Scope::Api(api) => Some(api.to_string()),
    };

    let mut written = Vec::new();
    for artifact in emit::render_scope(&tables.enums, &tables.funcs, scope) {
        writer.write(&artifact.file_name, &artifact.contents)?;
        debug!("Wrote {} for {}", artifact.file_name, scope);
        written.push(GeneratedFile {
            api: api.clone(),
            file_name: artifact.file_name,
            kind: artifact.kind,
        });
    }
    Ok(written)
}

fn ensure_globals(writer: &mut dyn ArtifactWriter) -> Result<Option<GeneratedFile>> {
    if writer.exists(GLOBALS_HEADER) {
        debug!("{} already present, leaving it alone", GLOBALS_HEADER);
        return Ok(None);
    }
    writer.write(GLOBALS_HEADER, &render_globals_header())?;
    Ok(Some(GeneratedFile {
        api: None,
        file_name: GLOBALS_HEADER.to_string(),
        kind: ArtifactKind::Globals,
    }))
}

/// Emit every selected scope from already loaded tables.
pub fn emit_all(
    tables: &Tables,
    apis: &ApiSelection,
    writer: &mut dyn ArtifactWriter,
    report: &mut RunReport,
) -> Result<()> {
    let scopes: Vec<Scope<'_>> = match apis {
        ApiSelection::All => vec![Scope::All],
        ApiSelection::Only(names) => names.iter().map(|name| Scope::Api(name)).collect(),
    };

    report.generated.extend(ensure_globals(writer)?);

    for scope in scopes {
        match generate_scope(tables, scope, writer) {
            Ok(files) if files.is_empty() => {
                info!("Nothing to generate for {}", scope);
                report.empty.push(scope.to_string());
            }
            Ok(files) => report.generated.extend(files),
            Err(error) => {
                debug!("Generating {} failed: {}", scope, error);
                report.failures.push(ApiFailure {
                    api: scope.to_string(),
                    error,
                });
            }
        }
    }
    Ok(())
}

/// Run the whole pipeline.
///
/// Returns `Err` only for failures that stop the run (unreadable inputs, an
/// unwritable globals header). Per-API write failures are in the report.
pub fn run(
    config: &GenerateConfig,
    reader: &dyn ResourceReader,
    writer: &mut dyn ArtifactWriter,
) -> Result<RunReport> {
    let mut report = RunReport::default();
    let tables = load_tables(
        reader,
        Sources::from(config),
        config.max_line_width,
        &mut report.diagnostics,
    )?;

    emit_all(&tables, &config.apis, writer, &mut report)?;
    Ok(report)
}

//! List command implementation.
//!
//! Parses and resolves the specs and prints every API with its enumerant
//! and function counts.

use clap::Args;
use indexmap::IndexMap;
use serde::Serialize;

use crate::config::GenerateConfig;
use crate::diagnostics::{print_diagnostics, Diagnostics};
use crate::error::{GlexError, Result};
use crate::output::{plural, Printer};
use crate::pipeline::{load_tables, Sources, Tables};
use crate::resource::FsReader;

use super::InputArgs;

/// List the APIs found in the spec files
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print JSON to stdout instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Counts for one API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiSummary {
    pub api: String,
    pub enums: usize,
    pub functions: usize,
}

/// One entry per API, enum spec order first, then APIs that only have
/// functions.
pub fn summarize(tables: &Tables) -> Vec<ApiSummary> {
    let mut summaries: IndexMap<&str, ApiSummary> = IndexMap::new();

    for (api, defines) in tables.enums.iter() {
        summaries.insert(
            api.as_str(),
            ApiSummary {
                api: api.clone(),
                enums: defines.len(),
                functions: 0,
            },
        );
    }
    for (api, records) in tables.funcs.iter() {
        summaries
            .entry(api.as_str())
            .or_insert_with(|| ApiSummary {
                api: api.clone(),
                enums: 0,
                functions: 0,
            })
            .functions = records.len();
    }

    summaries.into_values().collect()
}

pub fn run(args: ListArgs, debug: u8, printer: &Printer) -> Result<()> {
    let manifest = args.input.manifest()?;
    let config = GenerateConfig::from_manifest(&manifest)?;

    let reader = FsReader::new(".");
    let mut diagnostics = Diagnostics::new();
    let tables = load_tables(
        &reader,
        Sources::from(&config),
        config.max_line_width,
        &mut diagnostics,
    )?;
    let summaries = summarize(&tables);

    if args.json {
        let json = serde_json::to_string_pretty(&summaries).map_err(|e| GlexError::Build {
            message: format!("Unable to serialize API list: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for summary in &summaries {
            printer.info(
                &summary.api,
                &format!(
                    "{}, {}",
                    plural(summary.enums, "enum", "enums"),
                    plural(summary.functions, "function", "functions")
                ),
            );
        }
        printer.status("Found", &plural(summaries.len(), "API", "APIs"));
    }

    if debug >= 1 {
        print_diagnostics(&diagnostics, printer);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FuncRecord, FuncTable, ResolvedEnumTable, TypeMap};

    #[test]
    fn test_summarize_order_and_counts() {
        let mut enums = ResolvedEnumTable::new();
        enums.insert("VERSION_1_2", "GL_TEXTURE_3D", "0x806F");
        enums.insert("VERSION_1_2", "GL_BGRA", "0x80E1");
        enums.insert("EXT_texture3D", "GL_TEXTURE_3D_EXT", "0x806F");

        let mut funcs = FuncTable::new();
        funcs.push("EXT_texture3D", FuncRecord::new("GLvoid", "glTexImage3DEXT", vec![]));
        funcs.push("ARB_imaging", FuncRecord::new("GLvoid", "glBlendColor", vec![]));

        let tables = Tables {
            enums,
            funcs,
            types: TypeMap::new(),
        };

        let summaries = summarize(&tables);
        let apis: Vec<&str> = summaries.iter().map(|s| s.api.as_str()).collect();
        assert_eq!(apis, ["VERSION_1_2", "EXT_texture3D", "ARB_imaging"]);
        assert_eq!(
            summaries[1],
            ApiSummary {
                api: "EXT_texture3D".into(),
                enums: 1,
                functions: 1
            }
        );
        assert_eq!(summaries[2].enums, 0);
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = ApiSummary {
            api: "ARB_imaging".into(),
            enums: 0,
            functions: 2,
        };
        insta::assert_json_snapshot!(summary, @r###"
        {
          "api": "ARB_imaging",
          "enums": 0,
          "functions": 2
        }
        "###);
    }
}

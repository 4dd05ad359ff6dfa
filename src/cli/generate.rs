//! Generate command implementation.
//!
//! Reads the three spec files, resolves `use` directives and writes the
//! loader sources for the selected APIs.

use std::path::PathBuf;

use clap::Args;

use crate::config::{ApiSelection, GenerateConfig, LineEnding};
use crate::diagnostics::print_diagnostics;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{self, RunReport};
use crate::resource::{DirWriter, FsReader};

use super::InputArgs;

/// Generate loader sources from spec files
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// APIs to generate, comma separated, or @file with one API per line
    /// (default: all APIs merged into one set of files)
    #[arg(long)]
    pub api: Option<String>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write files with CRLF line endings
    #[arg(long)]
    pub crlf: bool,
}

impl GenerateArgs {
    /// Combine manifest and flags into a run configuration.
    pub fn config(&self, reader: &FsReader, debug: u8) -> Result<GenerateConfig> {
        let manifest = self.input.manifest()?;
        let mut config = GenerateConfig::from_manifest(&manifest)?;

        if let Some(api) = &self.api {
            config.apis = ApiSelection::parse(api, reader)?;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if self.crlf {
            config.line_ending = LineEnding::Crlf;
        }
        config.debug = debug;

        Ok(config)
    }
}

pub fn run(args: GenerateArgs, debug: u8, printer: &Printer) -> Result<()> {
    let reader = FsReader::new(".");
    let config = args.config(&reader, debug)?;

    printer.status(
        "Reading",
        &format!("{}, {}, {}", config.enum_spec, config.func_spec, config.type_map),
    );

    let mut writer = DirWriter::new(&config.output, config.line_ending);
    let report = pipeline::run(&config, &reader, &mut writer)?;

    print_report(&report, &config, printer);
    let report = report.into_result()?;

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(report.generated.len(), "file", "files"),
            display_path(writer.dir())
        ),
    );
    Ok(())
}

fn print_report(report: &RunReport, config: &GenerateConfig, printer: &Printer) {
    for file in &report.generated {
        printer.status("Generated", &printer.cyan(&file.file_name));
    }
    for api in &report.empty {
        printer.warning("Skipped", &format!("{} (nothing to generate)", api));
    }
    for failure in &report.failures {
        printer.error("Failed", &format!("{}: {}", failure.api, failure.error));
    }

    let Some(summary) = report.diagnostics.summary() else {
        return;
    };
    if config.debug >= 1 {
        print_diagnostics(&report.diagnostics, printer);
    } else {
        printer.warning(
            "Warning",
            &format!("{} {}", summary, printer.dim("(use --debug 1 to show)")),
        );
    }
}

//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the extraction pipeline
//! - prints the comparison or scan report
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, CompareArgs};
use crate::domain::{ReportYears, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `salescmp` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Compare(args) => handle_run(args, OutputMode::Comparison),
        Command::Scan(args) => handle_run(args, OutputMode::ScanOnly),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Comparison,
    ScanOnly,
}

fn handle_run(args: CompareArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_extract(&config)?;

    // The document was readable but contained no recognizable product
    // records. Distinct exit code from a decode failure so callers can
    // present different messages.
    if run.products.is_empty() {
        return Err(AppError::new(
            3,
            format!(
                "No product records found in '{}'. Check that the report follows the expected layout.",
                config.report_path.display()
            ),
        ));
    }

    match mode {
        OutputMode::Comparison => {
            println!("{}", crate::report::format::format_run_summary(&run, &config));
            println!(
                "{}",
                crate::report::format::format_comparison(&run.comparison, &config.years)
            );
        }
        OutputMode::ScanOnly => {
            println!(
                "{}",
                crate::report::format::format_scan_report(&run.products, &config.years)
            );
        }
    }

    if let Some(path) = &config.export_csv {
        crate::io::export::write_grouped_csv(path, &run.comparison, &config.years)?;
    }
    if let Some(path) = &config.export_observations {
        crate::io::export::write_observations_json(path, &run.observations)?;
    }

    Ok(())
}

pub fn run_config_from_args(args: &CompareArgs) -> RunConfig {
    RunConfig {
        report_path: args.report.clone(),
        years: ReportYears {
            year_a: args.year_a,
            year_b: args.year_b,
        },
        month: args.month,
        export_csv: args.export.clone(),
        export_observations: args.export_observations.clone(),
    }
}

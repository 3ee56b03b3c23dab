//! Command-line parsing for the sales comparison tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the extraction/aggregation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Month;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "salescmp",
    version,
    about = "Two-year product sales comparison from converted report text"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the report, print the grouped comparison table, and
    /// optionally export CSV/JSON.
    Compare(CompareArgs),
    /// Print raw scanned products and data-quality notes (no aggregation).
    ///
    /// Useful for judging how much of a malformed or truncated report was
    /// actually recovered before trusting the comparison.
    Scan(CompareArgs),
}

/// Common options for comparing and scanning.
#[derive(Debug, Parser, Clone)]
pub struct CompareArgs {
    /// Converted report text file (form-feed page separators).
    pub report: PathBuf,

    /// Baseline report year.
    #[arg(long, default_value_t = 2024)]
    pub year_a: u16,

    /// Comparison report year.
    #[arg(long, default_value_t = 2025)]
    pub year_b: u16,

    /// Restrict the comparison to one month (e.g. `--month july`).
    #[arg(short = 'm', long, value_enum)]
    pub month: Option<Month>,

    /// Export the grouped comparison CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the flat observation table as JSON.
    #[arg(long = "export-observations")]
    pub export_observations: Option<PathBuf>,
}

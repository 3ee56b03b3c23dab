//! Shared extraction pipeline used by every front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! ingest -> normalize -> scan -> classify -> expand -> compare
//!
//! Past ingest the pipeline is a pure function of the page text: same
//! pages in, byte-identical observations out.

use crate::domain::{Observation, RunConfig, ScannedProduct};
use crate::error::AppError;
use crate::extract::{classify, expand, normalize_pages, scan_products};
use crate::report::ComparisonRow;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub pages: usize,
    pub lines: usize,
    pub products: Vec<ScannedProduct>,
    pub observations: Vec<Observation>,
    pub comparison: Vec<ComparisonRow>,
}

/// Execute the full pipeline against the configured report file.
pub fn run_extract(config: &RunConfig) -> Result<RunOutput, AppError> {
    let pages = crate::io::ingest::read_report_text(&config.report_path)?;
    Ok(run_extract_from_pages(&pages, config))
}

/// Execute the pipeline over in-memory page blocks.
///
/// This is the whole engine with no IO: useful for tests and for callers
/// that obtain the converted text some other way. An empty result is a
/// valid outcome here, not an error — presentation layers decide how to
/// surface it.
pub fn run_extract_from_pages(pages: &[String], config: &RunConfig) -> RunOutput {
    let lines = normalize_pages(pages);
    let products = scan_products(&lines, &config.years);

    let mut observations = Vec::new();
    for scanned in &products {
        let batch = classify(scanned.product.clone());
        observations.extend(expand(&batch, &config.years));
    }

    let comparison = crate::report::build_comparison(&observations, &config.years, config.month);

    RunOutput {
        pages: pages.len(),
        lines: lines.len(),
        products,
        observations,
        comparison,
    }
}

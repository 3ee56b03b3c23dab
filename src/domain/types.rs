//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during scanning and aggregation
//! - exported to JSON/CSV
//! - reloaded later by downstream tooling

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Number of monthly slots per report year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Calendar month of a report column.
///
/// Declaration order is calendar order, so the derived `Ord` sorts
/// January before December.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order (index 0 = January).
    pub const ALL: [Month; MONTHS_PER_YEAR] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// English month name for report output.
    pub fn display_name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Month number in `1..=12`.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Month at a zero-based slot index, if in range.
    pub fn from_index(index: usize) -> Option<Month> {
        Month::ALL.get(index).copied()
    }
}

/// The two report years being compared.
///
/// `year_a` is the baseline (earlier) year; `year_b` the comparison year.
/// Differences downstream are always `b - a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportYears {
    pub year_a: u16,
    pub year_b: u16,
}

/// A product record as recovered from the line stream.
///
/// Each sequence holds at most [`MONTHS_PER_YEAR`] entries in month order.
/// Short sequences stay short here; the expander zero-pads at flatten time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    /// Raw product label exactly as it appears in the source text (trimmed).
    pub name: String,
    pub quantities_year_a: Vec<i64>,
    pub values_year_a: Vec<f64>,
    pub quantities_year_b: Vec<i64>,
    pub values_year_b: Vec<f64>,
}

/// Which data block of a product scan a [`ScanNote`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    QuantityYearA,
    ValueYearA,
    QuantityYearB,
    ValueYearB,
}

/// Audit entry recording best-effort truncation during a product scan.
///
/// The scanner never fails on a malformed section; these notes are how
/// callers see what was actually recovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanNote {
    /// The section's anchor line never appeared before end of stream.
    AnchorNotFound { section: Section },
    /// Fewer than twelve entries were captured before the stream ended.
    ShortSection { section: Section, captured: usize },
}

/// A scanned product together with its data-quality notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedProduct {
    pub product: RawProduct,
    pub notes: Vec<ScanNote>,
}

/// A product with its derived batch label and weight-group key.
///
/// Both strings are deterministic functions of `product.name` and serve as
/// stable group-by keys downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedBatch {
    pub product: RawProduct,
    /// The product name augmented with its normalized `{size}{UNIT}` suffix.
    pub batch_label: String,
    /// The bare `{size}{UNIT}` key used to compare like-for-like pack sizes.
    pub weight_group: String,
}

/// One (product, month, year) data point — the atomic downstream row.
///
/// Created once by the expander and never mutated; every product yields
/// exactly 24 of these regardless of how much raw data was captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub product_name: String,
    pub batch_label: String,
    pub weight_group: String,
    pub month: Month,
    pub month_number: u8,
    pub year: u16,
    pub quantity: i64,
    pub value: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Converted report text (form-feed page separators).
    pub report_path: PathBuf,
    pub years: ReportYears,
    /// Restrict the comparison to one month; `None` reports all twelve.
    pub month: Option<Month>,

    pub export_csv: Option<PathBuf>,
    pub export_observations: Option<PathBuf>,
}

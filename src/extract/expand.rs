//! Flattening classified products into observations.
//!
//! This is the single point where partial scanner output is made total:
//! every product yields exactly 24 observations (12 months × 2 years), and
//! any month slot the scanner did not capture reads as 0 / 0.0 via an
//! index-bounds check. Nothing upstream pads, nothing downstream checks.

use crate::domain::{ClassifiedBatch, Month, Observation, ReportYears};

/// Flatten one classified product into its 24 observations.
///
/// Emission order is month-major, year A before year B within each month.
pub fn expand(batch: &ClassifiedBatch, years: &ReportYears) -> Vec<Observation> {
    let mut out = Vec::with_capacity(Month::ALL.len() * 2);
    for (index, month) in Month::ALL.into_iter().enumerate() {
        out.push(observation(
            batch,
            month,
            years.year_a,
            batch.product.quantities_year_a.get(index).copied().unwrap_or(0),
            batch.product.values_year_a.get(index).copied().unwrap_or(0.0),
        ));
        out.push(observation(
            batch,
            month,
            years.year_b,
            batch.product.quantities_year_b.get(index).copied().unwrap_or(0),
            batch.product.values_year_b.get(index).copied().unwrap_or(0.0),
        ));
    }
    out
}

fn observation(
    batch: &ClassifiedBatch,
    month: Month,
    year: u16,
    quantity: i64,
    value: f64,
) -> Observation {
    Observation {
        product_name: batch.product.name.clone(),
        batch_label: batch.batch_label.clone(),
        weight_group: batch.weight_group.clone(),
        month,
        month_number: month.number(),
        year,
        quantity,
        value,
    }
}

//! Comparison building: aggregation, pivot, flags, and ordering.
//!
//! Everything here is mechanical reshaping of the clean observation table
//! the extraction engine produced. Formatting lives in `format` so output
//! changes stay localized.

pub mod format;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Month, Observation, ReportYears};

/// A `1xN` pack is a loose item; such rows sort ahead of cartons within a
/// weight group.
static LOOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\s)1[Xx]\d+(?:\.\d+)?(KG|G|GR)").expect("valid loose-item regex")
});

static BASMATI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bBASMATI\b").expect("valid basmati regex"));

/// One (batch, month) row with both report years side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub batch_label: String,
    pub weight_group: String,
    pub month: Month,
    pub quantity_a: i64,
    pub quantity_b: i64,
    pub quantity_diff: i64,
    pub value_a: f64,
    pub value_b: f64,
    pub value_diff: f64,
}

impl ComparisonRow {
    /// Loose single-pack item (`1xN` batch label).
    pub fn is_loose(&self) -> bool {
        LOOSE_RE.is_match(&self.batch_label)
    }

    /// No movement in either year.
    pub fn is_zero_quantity(&self) -> bool {
        self.quantity_a == 0 && self.quantity_b == 0
    }

    /// Basmati lines are reported as their own export section.
    pub fn is_basmati(&self) -> bool {
        BASMATI_RE.is_match(&self.batch_label)
    }
}

#[derive(Default)]
struct Cell {
    quantity_a: i64,
    quantity_b: i64,
    value_a: f64,
    value_b: f64,
}

/// Aggregate observations by batch and pivot the two years side by side.
///
/// `month_filter` restricts the table to one month (the report's month
/// selector); `None` keeps all twelve. Rows come back ordered for
/// presentation (see [`sort_rows`]).
pub fn build_comparison(
    observations: &[Observation],
    years: &ReportYears,
    month_filter: Option<Month>,
) -> Vec<ComparisonRow> {
    let mut cells: BTreeMap<(String, String, Month), Cell> = BTreeMap::new();

    for obs in observations {
        if month_filter.is_some_and(|month| month != obs.month) {
            continue;
        }
        let key = (
            obs.weight_group.clone(),
            obs.batch_label.clone(),
            obs.month,
        );
        let cell = cells.entry(key).or_default();
        if obs.year == years.year_a {
            cell.quantity_a += obs.quantity;
            cell.value_a += obs.value;
        } else if obs.year == years.year_b {
            cell.quantity_b += obs.quantity;
            cell.value_b += obs.value;
        }
    }

    let mut rows: Vec<ComparisonRow> = cells
        .into_iter()
        .map(|((weight_group, batch_label, month), cell)| ComparisonRow {
            batch_label,
            weight_group,
            month,
            quantity_a: cell.quantity_a,
            quantity_b: cell.quantity_b,
            quantity_diff: cell.quantity_b - cell.quantity_a,
            value_a: cell.value_a,
            value_b: cell.value_b,
            value_diff: cell.value_b - cell.value_a,
        })
        .collect();

    sort_rows(&mut rows);
    rows
}

/// Presentation order: weight group, then month, then zero-quantity rows
/// last, loose items first, batch label as the tiebreak.
pub fn sort_rows(rows: &mut [ComparisonRow]) {
    rows.sort_by(|a, b| {
        a.weight_group
            .cmp(&b.weight_group)
            .then(a.month.cmp(&b.month))
            .then(a.is_zero_quantity().cmp(&b.is_zero_quantity()))
            .then(b.is_loose().cmp(&a.is_loose()))
            .then(a.batch_label.cmp(&b.batch_label))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years() -> ReportYears {
        ReportYears {
            year_a: 2024,
            year_b: 2025,
        }
    }

    fn obs(batch: &str, group: &str, month: Month, year: u16, quantity: i64, value: f64) -> Observation {
        Observation {
            product_name: batch.to_string(),
            batch_label: batch.to_string(),
            weight_group: group.to_string(),
            month,
            month_number: month.number(),
            year,
            quantity,
            value,
        }
    }

    #[test]
    fn pivot_computes_differences() {
        let observations = vec![
            obs("WIDGET 2X5KG 5KG", "5KG", Month::January, 2024, 10, 100.0),
            obs("WIDGET 2X5KG 5KG", "5KG", Month::January, 2025, 15, 90.0),
        ];
        let rows = build_comparison(&observations, &years(), None);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity_a, 10);
        assert_eq!(rows[0].quantity_b, 15);
        assert_eq!(rows[0].quantity_diff, 5);
        assert!((rows[0].value_diff - -10.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_batches_are_summed() {
        // Two scanned products mapping to the same batch label aggregate
        // into one row per month.
        let observations = vec![
            obs("WIDGET 2X5KG 5KG", "5KG", Month::March, 2024, 3, 30.0),
            obs("WIDGET 2X5KG 5KG", "5KG", Month::March, 2024, 4, 40.0),
        ];
        let rows = build_comparison(&observations, &years(), None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity_a, 7);
        assert!((rows[0].value_a - 70.0).abs() < 1e-9);
    }

    #[test]
    fn month_filter_restricts_rows() {
        let observations = vec![
            obs("A 2X5KG 5KG", "5KG", Month::January, 2024, 1, 1.0),
            obs("A 2X5KG 5KG", "5KG", Month::February, 2024, 2, 2.0),
        ];
        let rows = build_comparison(&observations, &years(), Some(Month::February));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].month, Month::February);
    }

    #[test]
    fn unconfigured_years_are_ignored() {
        let observations = vec![obs("A 2X5KG 5KG", "5KG", Month::January, 2019, 9, 9.0)];
        let rows = build_comparison(&observations, &years(), None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity_a, 0);
        assert_eq!(rows[0].quantity_b, 0);
    }

    #[test]
    fn ordering_puts_zero_rows_last_and_loose_first() {
        let observations = vec![
            obs("CARTON 6X5KG 5KG", "5KG", Month::January, 2024, 5, 5.0),
            obs("DEAD STOCK 2X5KG 5KG", "5KG", Month::January, 2024, 0, 0.0),
            obs("LOOSE 1X5KG 5KG", "5KG", Month::January, 2024, 2, 2.0),
        ];
        let rows = build_comparison(&observations, &years(), None);

        let labels: Vec<&str> = rows.iter().map(|r| r.batch_label.as_str()).collect();
        assert_eq!(labels, vec![
            "LOOSE 1X5KG 5KG",
            "CARTON 6X5KG 5KG",
            "DEAD STOCK 2X5KG 5KG",
        ]);
    }

    #[test]
    fn flags_match_their_patterns() {
        let row = ComparisonRow {
            batch_label: "BASMATI GOLD 1x20KG 20KG".to_string(),
            weight_group: "20KG".to_string(),
            month: Month::January,
            quantity_a: 0,
            quantity_b: 0,
            quantity_diff: 0,
            value_a: 0.0,
            value_b: 0.0,
            value_diff: 0.0,
        };
        assert!(row.is_loose());
        assert!(row.is_zero_quantity());
        assert!(row.is_basmati());

        let carton = ComparisonRow {
            batch_label: "GOLDEN RICE 6x5KG 5KG".to_string(),
            ..row.clone()
        };
        assert!(!carton.is_loose());
        assert!(!carton.is_basmati());

        // "1x" must start a word: a 11x pack is not loose.
        let eleven = ComparisonRow {
            batch_label: "BULK 11x5KG 5KG".to_string(),
            ..row
        };
        assert!(!eleven.is_loose());
    }
}

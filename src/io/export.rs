//! Result exports.
//!
//! Two shapes:
//!
//! - the grouped comparison CSV: one section per weight group with a TOTAL
//!   row, basmati lines gathered into their own final section. Meant to be
//!   opened directly in a spreadsheet.
//! - the flat observation table as JSON, for downstream tooling.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{Observation, ReportYears};
use crate::error::AppError;
use crate::report::ComparisonRow;

/// Write the grouped comparison CSV.
pub fn write_grouped_csv(
    path: &Path,
    rows: &[ComparisonRow],
    years: &ReportYears,
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(4, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;
    file.write_all(render_grouped_csv(rows, years).as_bytes())
        .map_err(|e| AppError::new(4, format!("Failed to write export CSV: {e}")))?;
    Ok(())
}

/// Write the flat observation table as pretty JSON.
pub fn write_observations_json(path: &Path, observations: &[Observation]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            4,
            format!("Failed to create observation JSON '{}': {e}", path.display()),
        )
    })?;
    serde_json::to_writer_pretty(file, observations)
        .map_err(|e| AppError::new(4, format!("Failed to write observation JSON: {e}")))?;
    Ok(())
}

/// Render the grouped CSV: non-basmati weight groups in order, then one
/// BASMATI GROUP section regardless of weight group.
///
/// Rows are assumed to be in presentation order already; sections preserve
/// that order.
pub fn render_grouped_csv(rows: &[ComparisonRow], years: &ReportYears) -> String {
    let mut out = String::new();

    let (basmati, regular): (Vec<&ComparisonRow>, Vec<&ComparisonRow>) =
        rows.iter().partition(|row| row.is_basmati());

    let mut remaining = regular.as_slice();
    while let Some(first) = remaining.first() {
        let group_len = remaining
            .iter()
            .take_while(|row| row.weight_group == first.weight_group)
            .count();
        let (section, rest) = remaining.split_at(group_len);

        out.push_str(&format!("Weight Group: {}\n\n", first.weight_group));
        render_section(&mut out, section, years);

        remaining = rest;
    }

    if !basmati.is_empty() {
        out.push_str("BASMATI GROUP\n\n");
        render_section(&mut out, &basmati, years);
    }

    out
}

fn render_section(out: &mut String, rows: &[&ComparisonRow], years: &ReportYears) {
    out.push_str(&format!(
        "Weight Group,Batch,Month,Quantity {a},Quantity {b},Quantity Difference,Value {a},Value {b},Value Difference\n",
        a = years.year_a,
        b = years.year_b,
    ));

    let mut quantity_totals = [0i64; 3];
    let mut value_totals = [0f64; 3];

    for row in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{},{:.2},{:.2},{:.2}\n",
            csv_field(&row.weight_group),
            csv_field(&row.batch_label),
            row.month.display_name(),
            row.quantity_a,
            row.quantity_b,
            row.quantity_diff,
            row.value_a,
            row.value_b,
            row.value_diff,
        ));
        quantity_totals[0] += row.quantity_a;
        quantity_totals[1] += row.quantity_b;
        quantity_totals[2] += row.quantity_diff;
        value_totals[0] += row.value_a;
        value_totals[1] += row.value_b;
        value_totals[2] += row.value_diff;
    }

    out.push_str(&format!(
        ",TOTAL,,{},{},{},{:.2},{:.2},{:.2}\n\n\n",
        quantity_totals[0],
        quantity_totals[1],
        quantity_totals[2],
        value_totals[0],
        value_totals[1],
        value_totals[2],
    ));
}

/// Quote a field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the extraction/aggregation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::RunOutput;
use crate::domain::{ReportYears, RunConfig, ScanNote, ScannedProduct, Section};
use crate::report::ComparisonRow;

/// Format the full run summary (input stats + extraction diagnostics).
pub fn format_run_summary(run: &RunOutput, config: &RunConfig) -> String {
    let mut out = String::new();

    out.push_str("=== salescmp - Two-Year Sales Comparison ===\n");
    out.push_str(&format!("Report: {}\n", config.report_path.display()));
    out.push_str(&format!(
        "Years: {} vs {}\n",
        config.years.year_a, config.years.year_b
    ));
    if let Some(month) = config.month {
        out.push_str(&format!("Month: {}\n", month.display_name()));
    }
    out.push_str(&format!(
        "Input: pages={} | lines={}\n",
        run.pages, run.lines
    ));

    let note_count: usize = run.products.iter().map(|p| p.notes.len()).sum();
    out.push_str(&format!(
        "Extracted: products={} | observations={} | data-quality notes={}\n",
        run.products.len(),
        run.observations.len(),
        note_count
    ));

    out
}

/// Format the comparison table.
pub fn format_comparison(rows: &[ComparisonRow], years: &ReportYears) -> String {
    let mut out = String::new();

    let qty_a = format!("Qty {}", years.year_a);
    let qty_b = format!("Qty {}", years.year_b);
    let val_a = format!("Value {}", years.year_a);
    let val_b = format!("Value {}", years.year_b);

    out.push_str(&format!(
        "{:<10} {:<34} {:<10} {:>9} {:>9} {:>9} {:>12} {:>12} {:>12}\n",
        "Group", "Batch", "Month", qty_a, qty_b, "Qty Diff", val_a, val_b, "Value Diff"
    ));
    out.push_str(&format!(
        "{:-<10} {:-<34} {:-<10} {:-<9} {:-<9} {:-<9} {:-<12} {:-<12} {:-<12}\n",
        "", "", "", "", "", "", "", "", ""
    ));

    for row in rows {
        out.push_str(&format!(
            "{:<10} {:<34} {:<10} {:>9} {:>9} {:>9} {:>12.2} {:>12.2} {:>12.2}\n",
            truncate(&row.weight_group, 10),
            truncate(&row.batch_label, 34),
            row.month.display_name(),
            row.quantity_a,
            row.quantity_b,
            row.quantity_diff,
            row.value_a,
            row.value_b,
            row.value_diff,
        ));
    }

    out
}

/// Format the raw scan view: per-product capture counts plus every
/// data-quality note. This is the diagnostics surface for judging how much
/// of a malformed report was actually recovered.
pub fn format_scan_report(products: &[ScannedProduct], years: &ReportYears) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<34} {:>8} {:>8} {:>8} {:>8}\n",
        "Product",
        format!("{} Q", years.year_a),
        format!("{} V", years.year_a),
        format!("{} Q", years.year_b),
        format!("{} V", years.year_b),
    ));
    out.push_str(&format!(
        "{:-<34} {:-<8} {:-<8} {:-<8} {:-<8}\n",
        "", "", "", "", ""
    ));

    for scanned in products {
        let p = &scanned.product;
        out.push_str(&format!(
            "{:<34} {:>8} {:>8} {:>8} {:>8}\n",
            truncate(&p.name, 34),
            p.quantities_year_a.len(),
            p.values_year_a.len(),
            p.quantities_year_b.len(),
            p.values_year_b.len(),
        ));
    }

    let mut notes = String::new();
    for scanned in products {
        for note in &scanned.notes {
            notes.push_str(&format!(
                "- {}: {}\n",
                scanned.product.name,
                describe_note(note, years)
            ));
        }
    }
    if !notes.is_empty() {
        out.push_str("\nData-quality notes:\n");
        out.push_str(&notes);
    }

    out
}

fn describe_note(note: &ScanNote, years: &ReportYears) -> String {
    match note {
        ScanNote::AnchorNotFound { section } => format!(
            "{} marker never found; section is empty",
            section_label(*section, years)
        ),
        ScanNote::ShortSection { section, captured } => format!(
            "{} section ended after {captured} of 12 entries",
            section_label(*section, years)
        ),
    }
}

fn section_label(section: Section, years: &ReportYears) -> String {
    match section {
        Section::QuantityYearA => format!("{} quantity", years.year_a),
        Section::ValueYearA => format!("{} value", years.year_a),
        Section::QuantityYearB => format!("{} quantity", years.year_b),
        Section::ValueYearB => format!("{} value", years.year_b),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

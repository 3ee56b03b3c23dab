//! The record scanner: a stateful anchor-walk over the line stream.
//!
//! Sales reports come through text conversion with no reliable structure —
//! no fixed columns, no tags — so records are recovered positionally:
//!
//! 1. seek a **name anchor**: a line starting with an uppercase letter and
//!    containing a `<n>x<m>` pack-count token
//! 2. seek the year-A quantity marker (`"<year> Q"` prefix), step past it,
//!    and collect digit runs until twelve integers are captured
//! 3. seek the value marker (`"V"` prefix), step past it, and collect
//!    decimals until twelve are captured
//! 4. repeat 2–3 for year B, then emit the product and resume at 1
//!
//! Collection loops stop only at twelve captures or end of stream — they do
//! **not** stop at anchor lines. On a malformed document this bleeds data
//! across sections; the [`ScanNote`] audit trail makes that visible without
//! turning it into a failure. The cursor never rewinds.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    MONTHS_PER_YEAR, RawProduct, ReportYears, ScanNote, ScannedProduct, Section,
};
use crate::extract::numbers::{decimal_runs, digit_runs};

/// A line that opens a product record: uppercase start plus a pack-count
/// token somewhere after it.
static NAME_ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z].*\d+[Xx]\d+").expect("valid name anchor regex"));

/// Prefix of the value-section marker line.
const VALUE_MARKER: &str = "V";

/// Forward-only cursor over the normalized line stream.
pub struct Cursor<'a> {
    lines: &'a [String],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, pos: 0 }
    }

    /// The current line, if any, without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).map(String::as_str)
    }

    /// Consume and return the current line.
    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Advance until the current line satisfies `pred`.
    ///
    /// Leaves the cursor *on* the matching line and returns `true`, or
    /// exhausts the stream and returns `false`.
    pub fn skip_until(&mut self, pred: impl Fn(&str) -> bool) -> bool {
        while let Some(line) = self.peek() {
            if pred(line) {
                return true;
            }
            self.pos += 1;
        }
        false
    }
}

/// Outcome of one product-scan cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanStep {
    Product(ScannedProduct),
    EndOfStream,
}

/// Scan the whole line stream, emitting products in document order.
pub fn scan_products(lines: &[String], years: &ReportYears) -> Vec<ScannedProduct> {
    let mut cursor = Cursor::new(lines);
    let mut products = Vec::new();
    loop {
        match scan_next(&mut cursor, years) {
            ScanStep::Product(product) => products.push(product),
            ScanStep::EndOfStream => break,
        }
    }
    products
}

/// Run one product-scan cycle from the cursor's current position.
///
/// Best-effort by design: a missing section marker means that section's
/// collection captures nothing further, and the product is still emitted
/// with whatever was recovered. Only a missing *name* anchor ends the scan.
pub fn scan_next(cursor: &mut Cursor<'_>, years: &ReportYears) -> ScanStep {
    if !cursor.skip_until(|line| NAME_ANCHOR_RE.is_match(line)) {
        return ScanStep::EndOfStream;
    }
    let Some(name) = cursor.advance() else {
        return ScanStep::EndOfStream;
    };

    let marker_a = quantity_marker(years.year_a);
    let marker_b = quantity_marker(years.year_b);

    let mut notes = Vec::new();
    let quantities_year_a =
        collect_section(cursor, &marker_a, Section::QuantityYearA, digit_runs, &mut notes);
    let values_year_a =
        collect_section(cursor, VALUE_MARKER, Section::ValueYearA, decimal_runs, &mut notes);
    let quantities_year_b =
        collect_section(cursor, &marker_b, Section::QuantityYearB, digit_runs, &mut notes);
    let values_year_b =
        collect_section(cursor, VALUE_MARKER, Section::ValueYearB, decimal_runs, &mut notes);

    ScanStep::Product(ScannedProduct {
        product: RawProduct {
            name: name.to_string(),
            quantities_year_a,
            values_year_a,
            quantities_year_b,
            values_year_b,
        },
        notes,
    })
}

/// The `"<year> Q"` quantity-section marker prefix.
fn quantity_marker(year: u16) -> String {
    format!("{year} Q")
}

/// Seek `marker`, step past it, then accumulate numbers line by line until
/// twelve are captured or the stream ends. Entries beyond the twelfth on
/// the final line are discarded.
fn collect_section<T>(
    cursor: &mut Cursor<'_>,
    marker: &str,
    section: Section,
    extract: fn(&str) -> Vec<T>,
    notes: &mut Vec<ScanNote>,
) -> Vec<T> {
    if !cursor.skip_until(|line| line.starts_with(marker)) {
        notes.push(ScanNote::AnchorNotFound { section });
        return Vec::new();
    }
    // The marker line itself carries no data.
    cursor.advance();

    let mut out = Vec::new();
    while out.len() < MONTHS_PER_YEAR {
        let Some(line) = cursor.advance() else { break };
        out.extend(extract(line));
    }
    out.truncate(MONTHS_PER_YEAR);

    if out.len() < MONTHS_PER_YEAR {
        notes.push(ScanNote::ShortSection {
            section,
            captured: out.len(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn years() -> ReportYears {
        ReportYears {
            year_a: 2024,
            year_b: 2025,
        }
    }

    const WELL_FORMED: [&str; 9] = [
        "WIDGET 2X5KG",
        "2024 Q",
        "1 2 3 4 5 6 7 8 9 10 11 12",
        "V",
        "1.0 2.0 3.0 4.0 5.0 6.0 7.0 8.0 9.0 10.0 11.0 12.0",
        "2025 Q",
        "12 11 10 9 8 7 6 5 4 3 2 1",
        "V",
        "12.0 11.0 10.0 9.0 8.0 7.0 6.0 5.0 4.0 3.0 2.0 1.0",
    ];

    #[test]
    fn well_formed_product_scans_cleanly() {
        let lines = stream(&WELL_FORMED);
        let products = scan_products(&lines, &years());

        assert_eq!(products.len(), 1);
        let scanned = &products[0];
        assert_eq!(scanned.product.name, "WIDGET 2X5KG");
        assert_eq!(scanned.product.quantities_year_a, (1..=12).collect::<Vec<i64>>());
        assert_eq!(scanned.product.quantities_year_b, (1..=12).rev().collect::<Vec<i64>>());
        assert_eq!(scanned.product.values_year_a[0], 1.0);
        assert_eq!(scanned.product.values_year_b[11], 1.0);
        assert!(scanned.notes.is_empty());
    }

    #[test]
    fn one_product_per_name_anchor_in_document_order() {
        let mut lines: Vec<&str> = vec!["SALES REPORT", "page header"];
        lines.extend(WELL_FORMED);
        lines.push("interstitial noise");
        let second: Vec<String> = WELL_FORMED
            .iter()
            .map(|l| l.replace("WIDGET 2X5KG", "GADGET 4X1KG"))
            .collect();
        let mut all = stream(&lines);
        all.extend(second);

        let products = scan_products(&all, &years());
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].product.name, "WIDGET 2X5KG");
        assert_eq!(products[1].product.name, "GADGET 4X1KG");
    }

    #[test]
    fn quantities_spread_across_lines() {
        let lines = stream(&[
            "WIDGET 2X5KG",
            "2024 Q",
            "1 2 3",
            "4 5 6 7",
            "8 9 10 11 12",
        ]);
        let products = scan_products(&lines, &years());
        assert_eq!(products[0].product.quantities_year_a, (1..=12).collect::<Vec<i64>>());
    }

    #[test]
    fn entries_beyond_the_twelfth_are_discarded() {
        let lines = stream(&[
            "WIDGET 2X5KG",
            "2024 Q",
            "1 2 3 4 5 6 7 8 9 10 11 12 13 14",
        ]);
        let products = scan_products(&lines, &years());
        assert_eq!(products[0].product.quantities_year_a, (1..=12).collect::<Vec<i64>>());
    }

    #[test]
    fn missing_value_marker_yields_partial_product_with_notes() {
        let lines = stream(&[
            "WIDGET 2X5KG",
            "2024 Q",
            "1 2 3 4 5 6 7 8 9 10 11 12",
        ]);
        let products = scan_products(&lines, &years());

        assert_eq!(products.len(), 1);
        let scanned = &products[0];
        assert_eq!(scanned.product.quantities_year_a.len(), 12);
        assert!(scanned.product.values_year_a.is_empty());
        assert!(scanned.notes.contains(&ScanNote::AnchorNotFound {
            section: Section::ValueYearA,
        }));
        assert!(scanned.notes.contains(&ScanNote::AnchorNotFound {
            section: Section::QuantityYearB,
        }));
    }

    #[test]
    fn short_quantity_section_bleeds_into_value_lines() {
        // Fewer than twelve quantities: the collection loop runs straight
        // through the "V" marker and reads the decimals as digit runs.
        // This greedy behavior is the contract, not a bug.
        let lines = stream(&["WIDGET 2X5KG", "2024 Q", "1 2 3", "V", "1.5 2.5"]);
        let products = scan_products(&lines, &years());

        let scanned = &products[0];
        assert_eq!(scanned.product.quantities_year_a, vec![1, 2, 3, 1, 5, 2, 5]);
        assert!(scanned.product.values_year_a.is_empty());
        assert!(scanned.notes.contains(&ScanNote::ShortSection {
            section: Section::QuantityYearA,
            captured: 7,
        }));
    }

    #[test]
    fn lowercase_or_anchorless_lines_never_open_a_record() {
        let lines = stream(&[
            "widget 2x5kg",
            "TOTALS FOR 2024",
            "NOTES",
            "no product here",
        ]);
        assert!(scan_products(&lines, &years()).is_empty());
    }

    #[test]
    fn empty_stream_terminates_immediately() {
        let lines: Vec<String> = Vec::new();
        let mut cursor = Cursor::new(&lines);
        assert_eq!(scan_next(&mut cursor, &years()), ScanStep::EndOfStream);
    }

    #[test]
    fn cursor_skip_until_lands_on_match() {
        let lines = stream(&["a", "b", "c"]);
        let mut cursor = Cursor::new(&lines);
        assert!(cursor.skip_until(|l| l == "b"));
        assert_eq!(cursor.peek(), Some("b"));
        assert!(!cursor.skip_until(|l| l == "zzz"));
        assert_eq!(cursor.peek(), None);
    }
}

//! Line normalization.
//!
//! Converted report text arrives as one raw block per source page. Before
//! any anchor matching we:
//!
//! - apply NFKD normalization per page, so decorated and fullwidth
//!   characters (ligatures, `２０２４`, …) compare equal to plain ASCII
//! - split into lines, preserving document order across pages
//! - trim each line, since anchor checks are prefix checks on trimmed text
//!
//! No line is dropped or reordered, and there is no error path: absent
//! input yields an empty stream.

use unicode_normalization::UnicodeNormalization;

/// Flatten page blocks into the normalized line stream read by the scanner.
pub fn normalize_pages(pages: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    for page in pages {
        let text: String = page.nfkd().collect();
        lines.extend(text.lines().map(|line| line.trim().to_string()));
    }
    lines
}

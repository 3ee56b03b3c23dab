//! Report text ingest.
//!
//! The core consumes page blocks of already-converted text; the PDF (or
//! other container) conversion happens outside this tool. `pdftotext` and
//! friends separate pages with a form feed, so that is the page delimiter
//! here; a file without form feeds is a single page.
//!
//! This is the one place a hard failure is meaningful: with no decodable
//! text at all there is nothing to recover (exit code 2). Everything past
//! ingest degrades instead of failing.

use std::path::Path;

use crate::error::AppError;

/// Page separator emitted by `pdftotext`-style converters.
const PAGE_SEPARATOR: char = '\u{0c}';

/// Read the converted report text and split it into page blocks.
pub fn read_report_text(path: &Path) -> Result<Vec<String>, AppError> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::new(2, format!("Failed to open report '{}': {e}", path.display())))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        AppError::new(
            2,
            format!("Report '{}' is not valid UTF-8: {e}", path.display()),
        )
    })?;
    Ok(split_pages(&text))
}

/// Split converted text into page blocks on form feeds.
pub fn split_pages(text: &str) -> Vec<String> {
    text.split(PAGE_SEPARATOR).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_form_feed_is_one_page() {
        assert_eq!(split_pages("line one\nline two"), vec!["line one\nline two"]);
    }

    #[test]
    fn form_feeds_delimit_pages() {
        let pages = split_pages("page one\u{0c}page two\u{0c}page three");
        assert_eq!(pages, vec!["page one", "page two", "page three"]);
    }

    #[test]
    fn missing_file_is_a_decode_failure() {
        let err = read_report_text(Path::new("/nonexistent/report.txt")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}

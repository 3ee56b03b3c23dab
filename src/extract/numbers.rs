//! Number extraction from free-form lines.
//!
//! Two pure functions with deliberately distinct patterns:
//!
//! - quantities are **digit runs** (`\d+`) — any run of digits counts,
//!   including the integer and fraction parts of a decimal
//! - values are **decimals only** (`\d+\.\d+`) — a bare integer is never
//!   a value
//!
//! Downstream grouping keys depend on these exact shapes; do not widen or
//! "fix" them.

use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid digit-run regex"));

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("valid decimal regex"));

/// All digit runs on `line`, in order.
///
/// Runs too long for an `i64` are dropped rather than aborting the scan.
pub fn digit_runs(line: &str) -> Vec<i64> {
    DIGIT_RUN_RE
        .find_iter(line)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// All `digits.digits` decimals on `line`, in order.
pub fn decimal_runs(line: &str) -> Vec<f64> {
    DECIMAL_RE
        .find_iter(line)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_in_order() {
        assert_eq!(digit_runs("1 2 3 4 5 6 7 8 9 10 11 12"), vec![
            1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12
        ]);
    }

    #[test]
    fn digit_runs_split_decimals() {
        // A decimal seen through the digit-run lens is two runs.
        assert_eq!(digit_runs("1.5"), vec![1, 5]);
    }

    #[test]
    fn digit_runs_ignore_surrounding_text() {
        assert_eq!(digit_runs("Jan: 10 units, Feb: 20"), vec![10, 20]);
        assert!(digit_runs("no numbers here").is_empty());
    }

    #[test]
    fn digit_runs_drop_overlong_runs() {
        assert_eq!(digit_runs("99999999999999999999 7"), vec![7]);
    }

    #[test]
    fn decimal_runs_require_a_point() {
        assert_eq!(decimal_runs("1.0 2.5 3"), vec![1.0, 2.5]);
        assert!(decimal_runs("1 2 3").is_empty());
    }

    #[test]
    fn decimal_runs_in_order() {
        assert_eq!(decimal_runs("12.0 11.5 10.25"), vec![12.0, 11.5, 10.25]);
    }
}

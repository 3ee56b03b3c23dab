//! Batch label and weight-group derivation.
//!
//! Product names describe their packaging in one of two shapes:
//!
//! - a multi-unit carton, e.g. `GOLDEN RICE 6x5KG` (six packs of 5kg)
//! - a single loose weight, e.g. `LOOSE RICE 25KG` (no multiplier)
//!
//! Both must map onto a comparable `{size}{UNIT}` weight-group key so that
//! downstream grouping compares like-for-like pack sizes across years. The
//! two tiers are tried in order; a name matching neither falls back to
//! `UNSPEC` / `KG`.
//!
//! The `KG|G|GR` alternation order is part of the contract: with
//! leftmost-first matching a literal `GR` suffix resolves as `G`. Grouping
//! keys depend on this exact shape; do not reorder the alternation.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{ClassifiedBatch, RawProduct};

/// `<units>x<size>[<unit>]`, unit optional, case-insensitive.
static MULTI_PACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)[Xx](\d+(?:\.\d+)?)((?i:KG|G|GR))?").expect("valid multi-pack regex")
});

/// Bare `<size><unit>`, unit required, case-insensitive.
static SINGLE_PACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)((?i:KG|G|GR))").expect("valid single-pack regex")
});

/// Size/unit used when no pack pattern is recognized at all.
const UNSPEC_SIZE: &str = "UNSPEC";
const DEFAULT_UNIT: &str = "KG";

/// Attach the derived batch label and weight-group key to a product.
pub fn classify(product: RawProduct) -> ClassifiedBatch {
    let (size, unit) = pack_size(&product.name);
    let batch_label = format!("{} {size}{unit}", product.name);
    let weight_group = format!("{size}{unit}");
    ClassifiedBatch {
        product,
        batch_label,
        weight_group,
    }
}

/// Recover `(size, UNIT)` from a product name, trying the multi-pack tier
/// first, then the single-pack tier, then the UNSPEC fallback.
///
/// Unit letters are uppercased regardless of input case.
fn pack_size(name: &str) -> (String, String) {
    if let Some(caps) = MULTI_PACK_RE.captures(name) {
        let size = caps[2].to_string();
        let unit = caps
            .get(3)
            .map(|m| m.as_str().to_ascii_uppercase())
            .unwrap_or_else(|| DEFAULT_UNIT.to_string());
        return (size, unit);
    }

    if let Some(caps) = SINGLE_PACK_RE.captures(name) {
        return (caps[1].to_string(), caps[2].to_ascii_uppercase());
    }

    (UNSPEC_SIZE.to_string(), DEFAULT_UNIT.to_string())
}

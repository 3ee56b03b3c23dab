//! The text-to-record extraction engine.
//!
//! Pipeline order, leaves first:
//!
//! - `normalize` — raw page text to a flat, trimmed, NFKD-normalized line stream
//! - `numbers` — pure digit-run / decimal extraction helpers
//! - `scanner` — the stateful anchor-walk that recovers product records
//! - `classify` — batch label + weight-group derivation from the product name
//! - `expand` — flattening into exactly 24 observations per product
//!
//! The whole engine is a pure function from page text to observations: no
//! ambient state, no IO, and no failure paths past ingest (malformed input
//! degrades to partial records, never to errors).

pub mod classify;
pub mod expand;
pub mod normalize;
pub mod numbers;
pub mod scanner;

pub use classify::*;
pub use expand::*;
pub use normalize::*;
pub use scanner::*;

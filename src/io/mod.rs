//! Input/output helpers.
//!
//! - report text ingest + page splitting (`ingest`)
//! - grouped CSV / observation JSON exports (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;

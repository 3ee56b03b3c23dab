//! Domain types shared across the extraction engine, reporting, and IO.

pub mod types;

pub use types::*;

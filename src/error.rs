//! Process-level error type.
//!
//! Exit codes are part of the CLI contract:
//!
//! - `2` — the report file could not be read or decoded (no text at all,
//!   so no partial recovery is meaningful)
//! - `3` — the document was readable but yielded no product records
//! - `4` — an export file could not be written
//!
//! Malformed or truncated report sections are deliberately *not* errors:
//! the scanner recovers best-effort and records what it skipped.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

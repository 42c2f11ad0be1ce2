//! Cross-cutting error types for vft.
//!
//! Domain-specific errors (`ParserError`, `ConfigError`) are defined in their
//! respective crates. They converge into `anyhow` in `vft-cli`.

use thiserror::Error;

/// Errors that can be raised by any vft crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (overlapping edits, out-of-bounds spans, ...).
    #[error("Validation error: {0}")]
    Validation(String),
}

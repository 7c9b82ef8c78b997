//! Error handling for registrar-store
//!
//! Store-specific errors layered over the core taxonomy. Import tolerance
//! means `Malformed` is logged per line rather than propagated; only export
//! and backup surfaces return errors to the caller.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the flat-file store and backup utilities
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure during export or backup
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data-file line that could not be parsed or applied
    #[error("{file}:{line_no}: {reason}")]
    Malformed {
        file: String,
        line_no: usize,
        reason: String,
    },
}

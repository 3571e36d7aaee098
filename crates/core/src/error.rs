//! Error types for the layoutscan library.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for layout scanning operations.
///
/// Only fatal conditions live here. A failed image extraction is not an
/// error: the walker logs it and keeps going.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("unable to open {}: {reason}", path.display())]
    CannotOpen { path: PathBuf, reason: String },

    #[error("incorrect password")]
    PasswordIncorrect,

    #[error("invalid layout strategy {0:?}: expected one_column or two_columns")]
    InvalidStrategy(String),

    #[error("invalid layout parameters: {0}")]
    InvalidParams(String),

    #[error("page index {index} out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for ScanError.
pub type Result<T> = std::result::Result<T, ScanError>;

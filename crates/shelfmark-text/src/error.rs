//! Error types for shelfmark-text

use thiserror::Error;

/// Result type alias for shelfmark-text operations
pub type Result<T> = std::result::Result<T, TextError>;

/// Errors raised by the similarity engine.
///
/// Comparisons themselves are total functions; errors only come from
/// building reference data or loading configuration.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum TextError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Config parse error: {0}")]
    Parse(String),
}

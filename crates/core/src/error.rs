//! Error types for the blackout OCR layout library.

use thiserror::Error;

/// Primary error type for OCR token ingestion and layout operations.
///
/// The layout algorithms themselves never fail: degenerate inputs resolve to
/// fallback defaults and empty documents produce empty outputs. Errors only
/// arise when the token stream handed over by the OCR collaborator violates
/// its contract, and then carry enough context (token index, field name) to
/// fix the upstream producer.
#[derive(Error, Debug)]
pub enum OcrError {
    #[error("token {index}: missing field {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("token {index}: invalid {field} value {value:?}")]
    InvalidField {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("token table syntax error: {0}")]
    SyntaxError(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for OcrError.
pub type Result<T> = std::result::Result<T, OcrError>;

//! Error types for conversion and format operations

use thiserror::Error;

/// Internal defects detected while converting a document.
///
/// Malformed markup never produces an error: it is passed through as text.
/// These variants mean a code block would have been dropped or duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The number of placeholders left in the text differs from the number of extracted blocks
    #[error("expected {expected} code block placeholder(s), found {found}")]
    PlaceholderMismatch { expected: usize, found: usize },
    /// A placeholder surfaced out of discovery order
    #[error("code block placeholder #{found} appeared where #{expected} was expected")]
    PlaceholderOrder { expected: usize, found: usize },
}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// The conversion itself failed
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConvertError),
}

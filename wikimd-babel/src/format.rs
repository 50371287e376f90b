//! Format trait definition
//!
//! This module defines the Format trait that every source markup implements.
//! A format knows its name and file extensions and how to turn its source text into Markdown.

use crate::error::FormatError;
use crate::formats::jira::conversion_rules::ConversionRules;

/// Trait for source markup formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn to_markdown(&self, source: &str, rules: &ConversionRules) -> Result<String, FormatError> {
///         // Convert source to Markdown
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "jira")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["jira", "wiki"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Convert source text into Markdown
    ///
    /// Default implementation returns NotSupported error.
    fn to_markdown(&self, _source: &str, _rules: &ConversionRules) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support conversion to markdown",
            self.name()
        )))
    }
}

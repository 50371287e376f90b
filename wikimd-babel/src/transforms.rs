//! Functional entry points
//!
//! Thin wrappers around [`Converter`] for callers that only need a string in and a string out.

use crate::error::ConvertError;
use crate::formats::jira::conversion_rules::ConversionRules;
use crate::formats::jira::Converter;

/// Convert wiki markup to Markdown with the default rules
///
/// # Example
///
/// ```
/// use wikimd_babel::transforms::convert;
///
/// assert_eq!(convert("*bold*").unwrap(), "**bold**");
/// ```
pub fn convert(input: &str) -> Result<String, ConvertError> {
    Converter::default().convert(input)
}

/// Convert wiki markup to Markdown with custom rules
///
/// # Example
///
/// ```
/// use wikimd_babel::transforms::convert_with_rules;
/// use wikimd_babel::ConversionRules;
///
/// let mut rules = ConversionRules::default();
/// rules.unordered_marker = '-';
///
/// assert_eq!(convert_with_rules("* item", &rules).unwrap(), "- item");
/// ```
pub fn convert_with_rules(input: &str, rules: &ConversionRules) -> Result<String, ConvertError> {
    Converter::new(rules.clone()).convert(input)
}

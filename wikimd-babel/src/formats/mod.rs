//! Format implementations
//!
//! This module contains the source markup formats that can be converted to Markdown.

pub mod jira;

pub use jira::conversion_rules::ConversionRules;
pub use jira::{Converter, JiraWikiFormat};

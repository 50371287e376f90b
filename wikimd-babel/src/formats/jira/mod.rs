//! Jira/Confluence wiki markup
//!
//! This module converts the wiki dialect used by Jira and Confluence into CommonMark.
//!
//! # Pipeline
//!
//! The conversion is four passes over the whole document, always in this order:
//!
//! | Pass              | Module          | Cross-line state            |
//! |-------------------|-----------------|-----------------------------|
//! | Block extraction  | `blocks`        | whole document (regions)    |
//! | Line state        | `line_state`    | open color span             |
//! | Inline rules      | `inline`        | none                        |
//! | Block reinsertion | `blocks`        | ordered placeholder list    |
//!
//! Code and preformatted regions leave the document first, so no later rule can rewrite
//! their content. They come back as fenced blocks only after every other rule has run.
//!
//! # Element Mapping Table
//!
//! | Wiki markup                     | Markdown                    |
//! |---------------------------------|-----------------------------|
//! | `h1.` .. `h6.`                  | `#` .. `######`             |
//! | `bq.`                           | `>`                         |
//! | `*bold*`                        | `**bold**`                  |
//! | `_italic_`                      | `*italic*`                  |
//! | `_*both*_`                      | `***both***`                |
//! | `{{mono}}`                      | `` `mono` ``                |
//! | ` -strike- `                    | `~~strike~~`                |
//! | `+ins+` `^sup^` `~sub~`         | `<ins>` `<sup>` `<sub>`     |
//! | `* item`, `** item`             | `* item`, `  * item`        |
//! | `# item`, `## item`             | `1. item`, `   1. item`     |
//! | `[url]` `[name\|url]`           | `<url>` `[name](url)`       |
//! | `!url!` `[!url!\|link]`         | `![](url)` `[![](url)](link)` |
//! | `{code:lang}..{code}`           | fenced block with language  |
//! | `{noformat}..{noformat}`        | fenced block                |
//! | `{color:x}..{color}`            | tags removed                |
//!
//! # Lossy Conversions
//!
//! - Color values are dropped; only the enclosed text survives.
//! - Code panel parameters (`title=`, `borderStyle=`, ...) are dropped.
//! - Ordered items are all written as `1.` and rely on renderer numbering.
//! - Image parameters (`!img.png|thumbnail!`) are dropped.

pub mod blocks;
pub mod conversion_rules;
pub mod inline;
pub mod line_state;

use crate::error::{ConvertError, FormatError};
use crate::format::Format;
use conversion_rules::ConversionRules;

/// Runs the conversion pipeline with a fixed set of output rules
#[derive(Debug, Clone, Default)]
pub struct Converter {
    rules: ConversionRules,
}

impl Converter {
    pub fn new(rules: ConversionRules) -> Self {
        Self { rules }
    }

    /// Convert a complete wiki document to Markdown.
    pub fn convert(&self, input: &str) -> Result<String, ConvertError> {
        let (text, protected) = blocks::extract(input);
        let text = line_state::transform(&text, &self.rules);
        let text = inline::transform(&text);
        protected.reinsert(&text, &self.rules)
    }
}

/// Format implementation for Jira/Confluence wiki markup
#[derive(Debug, Default)]
pub struct JiraWikiFormat;

impl Format for JiraWikiFormat {
    fn name(&self) -> &str {
        "jira"
    }

    fn description(&self) -> &str {
        "Jira/Confluence wiki markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["jira", "wiki", "confluence"]
    }

    fn to_markdown(&self, source: &str, rules: &ConversionRules) -> Result<String, FormatError> {
        Ok(Converter::new(rules.clone()).convert(source)?)
    }
}

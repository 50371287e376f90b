//! Code block protection
//!
//!     `{code}` and `{noformat}` regions are cut out of the document before any other pass
//!     runs. Each region is replaced by a placeholder and remembered as a [`CodeBlock`]; once
//!     every line rule has run, the placeholders are swapped back for Markdown fences.
//!
//!     Blocks are kept in an ordered list and addressed by their index, never by content,
//!     since the same body may legitimately appear several times in one document.
//!
//!     Placeholders are built from a private-use character that does not occur anywhere in
//!     the input, so they cannot collide with document text. None of the line rules touch
//!     private-use characters or digits, which keeps the placeholders intact until reinsertion.

use crate::error::ConvertError;
use crate::formats::jira::conversion_rules::ConversionRules;
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

static BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)\{code(?::([^}]*))?\}(.*?)\{code\}|\{noformat(?::[^}]*)?\}(.*?)\{noformat\}",
    )
    .expect("invalid code block regex")
});

static STRAY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(?:code|noformat)(?::[^}]*)?\}").expect("invalid stray marker regex")
});

/// Parameters of `{code:...}` that configure the panel, not the language.
const PANEL_KEYS: &[&str] = &[
    "title",
    "borderstyle",
    "bordercolor",
    "borderwidth",
    "bgcolor",
    "titlebgcolor",
    "titlecolor",
    "linenumbers",
    "firstline",
    "collapse",
    "theme",
];

const SENTINEL_RANGES: [RangeInclusive<u32>; 2] = [0xE000..=0xF8FF, 0xF0000..=0xFFFFD];

/// A code or preformatted region removed from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag, when the opening marker carried one
    pub language: Option<String>,
    /// Verbatim content without the line breaks adjacent to the markers
    pub body: String,
}

impl CodeBlock {
    /// Render the block as a fenced Markdown code block.
    pub fn to_fence(&self, rules: &ConversionRules) -> String {
        format!(
            "{fence}{language}\n{body}\n{fence}",
            fence = rules.fence,
            language = self.language.as_deref().unwrap_or(""),
            body = self.body,
        )
    }
}

/// Placeholder scheme for one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholders {
    sentinel: char,
}

impl Placeholders {
    fn for_document(document: &str) -> Self {
        let sentinel = SENTINEL_RANGES
            .iter()
            .flat_map(|range| range.clone())
            .filter_map(char::from_u32)
            .find(|candidate| !document.contains(*candidate))
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Self { sentinel }
    }

    fn mark(&self, index: usize) -> String {
        format!("{s}{index}{s}", s = self.sentinel)
    }

    fn pattern(&self) -> Regex {
        let sentinel = regex::escape(self.sentinel.encode_utf8(&mut [0; 4]));
        Regex::new(&format!("{sentinel}([0-9]+){sentinel}")).expect("invalid placeholder regex")
    }
}

/// Blocks extracted from a document, in discovery order
#[derive(Debug, Clone)]
pub struct ProtectedBlocks {
    placeholders: Placeholders,
    blocks: Vec<CodeBlock>,
}

impl ProtectedBlocks {
    /// The extracted blocks, in the order they appeared
    pub fn blocks(&self) -> &[CodeBlock] {
        &self.blocks
    }

    /// Replace every placeholder in `text` with its fenced block.
    ///
    /// Each block must be found exactly once and in its original order; anything else means
    /// a pass damaged or duplicated a placeholder, which is reported instead of silently
    /// dropping content.
    pub fn reinsert(&self, text: &str, rules: &ConversionRules) -> Result<String, ConvertError> {
        if self.blocks.is_empty() {
            return Ok(text.to_string());
        }

        let pattern = self.placeholders.pattern();
        let found = pattern.find_iter(text).count();
        if found != self.blocks.len() {
            return Err(ConvertError::PlaceholderMismatch {
                expected: self.blocks.len(),
                found,
            });
        }

        let mut output = String::with_capacity(text.len());
        let mut last = 0;
        for (expected, caps) in pattern.captures_iter(text).enumerate() {
            let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let index = digits.as_str().parse::<usize>().unwrap_or(usize::MAX);
            let block = match self.blocks.get(index) {
                Some(block) if index == expected => block,
                _ => {
                    return Err(ConvertError::PlaceholderOrder {
                        expected,
                        found: index,
                    })
                }
            };
            push_segment(&mut output, &text[last..whole.start()], last > 0);
            start_own_line(&mut output);
            output.push_str(&block.to_fence(rules));
            last = whole.end();
        }
        push_segment(&mut output, &text[last..], true);

        tracing::debug!(blocks = self.blocks.len(), "reinserted code blocks");
        Ok(output)
    }
}

/// Append document text that sits between fences.
///
/// Text following a fence on the same line moves to the next line, since a closing fence
/// must end its line.
fn push_segment(output: &mut String, segment: &str, follows_fence: bool) {
    if !follows_fence {
        output.push_str(segment);
        return;
    }
    let rest = segment.trim_start_matches([' ', '\t']);
    if rest.is_empty() || rest.starts_with(['\n', '\r']) {
        output.push_str(segment);
    } else {
        output.push('\n');
        output.push_str(rest);
    }
}

/// Break the current line so an opening fence starts at column zero.
fn start_own_line(output: &mut String) {
    if output.is_empty() || output.ends_with('\n') {
        return;
    }
    let kept = output.trim_end_matches([' ', '\t']).len();
    output.truncate(kept);
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
}

/// Cut every code and preformatted region out of `input`.
///
/// Returns the remaining text, with a placeholder where each region was, and the regions
/// themselves. Matching is left to right and non-overlapping.
pub fn extract(input: &str) -> (String, ProtectedBlocks) {
    let placeholders = Placeholders::for_document(input);
    let mut blocks = Vec::new();

    let text = BLOCK_PATTERN.replace_all(input, |caps: &regex::Captures| {
        let block = match caps.get(2) {
            Some(body) => CodeBlock {
                language: caps.get(1).and_then(|attrs| detect_language(attrs.as_str())),
                body: trim_marker_breaks(body.as_str()).to_string(),
            },
            None => CodeBlock {
                language: None,
                body: caps
                    .get(3)
                    .map(|body| trim_marker_breaks(body.as_str()))
                    .unwrap_or_default()
                    .to_string(),
            },
        };
        let placeholder = placeholders.mark(blocks.len());
        blocks.push(block);
        placeholder
    });

    if STRAY_MARKER.is_match(&text) {
        tracing::warn!("unterminated code block marker left as text");
    }
    tracing::debug!(blocks = blocks.len(), "extracted code blocks");

    (
        text.into_owned(),
        ProtectedBlocks {
            placeholders,
            blocks,
        },
    )
}

/// Pick the language out of the `{code:...}` parameter list.
///
/// The first bare parameter that is not a panel setting names the language.
fn detect_language(attrs: &str) -> Option<String> {
    attrs
        .split('|')
        .map(str::trim)
        .filter(|attr| !attr.is_empty() && !attr.contains('='))
        .find(|attr| !PANEL_KEYS.contains(&attr.to_ascii_lowercase().as_str()))
        .map(str::to_string)
}

/// Drop the line break that directly follows the opening marker and the one directly
/// preceding the closing marker, if present.
fn trim_marker_breaks(body: &str) -> &str {
    let body = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body);
    body.strip_suffix("\r\n")
        .or_else(|| body.strip_suffix('\n'))
        .unwrap_or(body)
}

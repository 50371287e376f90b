//! Line rewrites that depend on more than the current line
//!
//!     Color spans may open on one line and close several lines later, so the scan keeps a
//!     [`LineState`] for the whole document. List items are recognized from the marker run at
//!     the start of each line; the run length is the nesting depth and drives indentation.

use crate::formats::jira::conversion_rules::ConversionRules;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static COLOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{color(?::[^}]*)?\}").expect("invalid color tag regex"));

const CLOSING_COLOR_TAG: &str = "{color}";

/// Kind of list a marker character introduces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '*' => Some(ListKind::Unordered),
            '#' => Some(ListKind::Ordered),
            _ => None,
        }
    }
}

/// A list item recognized at the start of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListContext {
    pub kind: ListKind,
    /// Number of consecutive marker characters, at least 1
    pub depth: usize,
}

impl ListContext {
    /// Recognize a list item, returning its context and the item text.
    ///
    /// The marker run must be made of a single marker character and be followed by a space
    /// or tab. A change of marker character ends the run, so `*# item` is not a list item.
    pub fn parse(line: &str) -> Option<(Self, &str)> {
        let marker = line.chars().next()?;
        let kind = ListKind::from_marker(marker)?;
        // Markers are ASCII, so the run length is also its byte length.
        let depth = line.chars().take_while(|c| *c == marker).count();
        let rest = &line[depth..];
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some((Self { kind, depth }, rest.trim_start_matches([' ', '\t'])))
    }

    /// Render the item as a Markdown list line.
    pub fn render(&self, content: &str, rules: &ConversionRules) -> String {
        let nesting = self.depth - 1;
        match self.kind {
            ListKind::Unordered => format!(
                "{}{} {}",
                rules.unordered_indent.repeat(nesting),
                rules.unordered_marker,
                content
            ),
            ListKind::Ordered => {
                format!("{}1. {}", rules.ordered_indent.repeat(nesting), content)
            }
        }
    }
}

/// State carried from one line to the next
#[derive(Debug, Default)]
pub struct LineState {
    in_color_span: bool,
}

impl LineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a color span opened on an earlier line is still open
    pub fn in_color_span(&self) -> bool {
        self.in_color_span
    }

    /// Rewrite one line, updating the carried state.
    pub fn transform_line(&mut self, line: &str, rules: &ConversionRules) -> String {
        let line = self.strip_color(line);
        match ListContext::parse(&line) {
            Some((context, content)) => context.render(content, rules),
            None => line.into_owned(),
        }
    }

    /// Delete every color tag; the enclosed text stays as it is.
    fn strip_color<'a>(&mut self, line: &'a str) -> Cow<'a, str> {
        for tag in COLOR_TAG.find_iter(line) {
            self.in_color_span = tag.as_str() != CLOSING_COLOR_TAG;
        }
        COLOR_TAG.replace_all(line, "")
    }
}

/// Run the line-state pass over a whole document.
pub fn transform(text: &str, rules: &ConversionRules) -> String {
    let mut state = LineState::new();
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| state.transform_line(line, rules))
        .collect();

    if state.in_color_span() {
        tracing::warn!("color span still open at end of document");
    }
    tracing::debug!(lines = lines.len(), "applied line-state rewrites");

    lines.join("\n")
}

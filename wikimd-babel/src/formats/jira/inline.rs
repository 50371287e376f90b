//! Per-line inline rules
//!
//!     Every rule is a pure function from one line to its rewritten form. The rules run in the
//!     fixed order of [`INLINE_RULES`]; several patterns overlap (a linked image contains both an
//!     image and a link, `***` contains `*`), so the order is part of the contract.
//!
//!     Emphasis-like rules (bold, italic, strikethrough, insert, superscript, subscript) share a
//!     delimiter scanner, see [`Delimited`]. The `regex` crate has no look-around, and these
//!     rules need to inspect the character on each side of a delimiter to avoid list markers,
//!     identifiers such as `snake_case`, and delimiters produced by earlier rules.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static BOLD_ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_\*([^*_\s](?:[^*_]*[^*_\s])?)\*_|\*_([^*_\s](?:[^*_]*[^*_\s])?)_\*")
        .expect("invalid bold-italic regex")
});

static MONOSPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.+?)\}\}").expect("invalid monospace regex"));

static LINKED_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[!([^!\[\]|\s]+)(?:\|[^!\]]*)?!\|([^\[\]|\s]+)\]")
        .expect("invalid linked image regex")
});

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!([^!\[\]()|\s]+)(?:\|[^!]*)?!").expect("invalid image regex")
});

static NAMED_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]|]+)\|([^\[\]|\s]+)\]").expect("invalid named link regex")
});

static UNNAMED_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]|\s]+)\]").expect("invalid unnamed link regex"));

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^h([1-6])\. ").expect("invalid header regex"));

static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^bq\. ").expect("invalid blockquote regex"));

/// What may sit directly outside a delimiter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Anything except a letter, a digit or the delimiter itself
    Word,
    /// Whitespace only; the edge of the line does not count
    Space,
    /// Anything except the delimiter itself
    Any,
}

/// A span marked by the same character on both sides, such as `*bold*`
///
/// The opening delimiter must be followed by a non-space character and the closing one
/// preceded by a non-space character; neither may touch another copy of the delimiter.
/// Spans never cross lines because the scanner only ever sees one line.
///
/// Whether a position can close a span does not depend on the opener, so the nearest
/// closer for every position is found up front and each line is scanned in linear time.
#[derive(Debug, Clone, Copy)]
pub struct Delimited {
    pub delimiter: char,
    pub boundary: Boundary,
    pub open: &'static str,
    pub close: &'static str,
}

impl Delimited {
    pub fn apply(&self, line: &str) -> String {
        let chars: Vec<char> = line.chars().collect();
        let next_close = self.next_closers(&chars);
        let mut output = String::with_capacity(line.len());
        let mut i = 0;
        while i < chars.len() {
            if self.opens(&chars, i) {
                if let Some(end) = next_close.get(i + 2).copied().flatten() {
                    output.push_str(self.open);
                    output.extend(&chars[i + 1..end]);
                    output.push_str(self.close);
                    i = end + 1;
                    continue;
                }
            }
            output.push(chars[i]);
            i += 1;
        }
        output
    }

    /// For each position, the first position at or after it that can close a span.
    fn next_closers(&self, chars: &[char]) -> Vec<Option<usize>> {
        let mut next = vec![None; chars.len() + 1];
        for at in (1..chars.len()).rev() {
            next[at] = if self.closes(chars, at) {
                Some(at)
            } else {
                next[at + 1]
            };
        }
        next
    }

    fn opens(&self, chars: &[char], at: usize) -> bool {
        chars[at] == self.delimiter
            && self.outside(at.checked_sub(1).map(|p| chars[p]))
            && chars.get(at + 1).is_some_and(|&c| self.inside(c))
    }

    fn closes(&self, chars: &[char], at: usize) -> bool {
        chars[at] == self.delimiter
            && self.inside(chars[at - 1])
            && self.outside(chars.get(at + 1).copied())
    }

    fn inside(&self, c: char) -> bool {
        !c.is_whitespace() && c != self.delimiter
    }

    fn outside(&self, c: Option<char>) -> bool {
        let Some(c) = c else {
            return self.boundary != Boundary::Space;
        };
        match self.boundary {
            Boundary::Word => !c.is_alphanumeric() && c != self.delimiter,
            Boundary::Space => c.is_whitespace(),
            Boundary::Any => c != self.delimiter,
        }
    }
}

const BOLD: Delimited = Delimited {
    delimiter: '*',
    boundary: Boundary::Word,
    open: "**",
    close: "**",
};

const ITALIC: Delimited = Delimited {
    delimiter: '_',
    boundary: Boundary::Word,
    open: "*",
    close: "*",
};

const STRIKETHROUGH: Delimited = Delimited {
    delimiter: '-',
    boundary: Boundary::Space,
    open: "~~",
    close: "~~",
};

const INSERT: Delimited = Delimited {
    delimiter: '+',
    boundary: Boundary::Word,
    open: "<ins>",
    close: "</ins>",
};

const SUPERSCRIPT: Delimited = Delimited {
    delimiter: '^',
    boundary: Boundary::Any,
    open: "<sup>",
    close: "</sup>",
};

const SUBSCRIPT: Delimited = Delimited {
    delimiter: '~',
    boundary: Boundary::Any,
    open: "<sub>",
    close: "</sub>",
};

/// A named inline rewrite
#[derive(Debug, Clone, Copy)]
pub struct InlineRule {
    pub name: &'static str,
    rewrite: fn(&str) -> String,
}

impl InlineRule {
    pub fn apply(&self, line: &str) -> String {
        (self.rewrite)(line)
    }
}

/// The inline rules, in the order they are applied
pub static INLINE_RULES: [InlineRule; 14] = [
    InlineRule {
        name: "bold-italic",
        rewrite: bold_italic,
    },
    InlineRule {
        name: "bold",
        rewrite: bold,
    },
    InlineRule {
        name: "italic",
        rewrite: italic,
    },
    InlineRule {
        name: "monospace",
        rewrite: monospace,
    },
    InlineRule {
        name: "strikethrough",
        rewrite: strikethrough,
    },
    InlineRule {
        name: "insert",
        rewrite: insert,
    },
    InlineRule {
        name: "superscript",
        rewrite: superscript,
    },
    InlineRule {
        name: "subscript",
        rewrite: subscript,
    },
    InlineRule {
        name: "linked-image",
        rewrite: linked_image,
    },
    InlineRule {
        name: "image",
        rewrite: image,
    },
    InlineRule {
        name: "named-link",
        rewrite: named_link,
    },
    InlineRule {
        name: "unnamed-link",
        rewrite: unnamed_link,
    },
    InlineRule {
        name: "header",
        rewrite: header,
    },
    InlineRule {
        name: "blockquote",
        rewrite: blockquote,
    },
];

/// Apply every inline rule, in order, to one line.
pub fn apply_inline(line: &str) -> String {
    INLINE_RULES
        .iter()
        .fold(line.to_string(), |current, rule| rule.apply(&current))
}

/// Run the inline rules over every line of `text`.
pub fn transform(text: &str) -> String {
    text.split('\n')
        .map(apply_inline)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn bold_italic(line: &str) -> String {
    BOLD_ITALIC
        .replace_all(line, |caps: &Captures| {
            let text = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            format!("***{text}***")
        })
        .into_owned()
}

pub fn bold(line: &str) -> String {
    BOLD.apply(line)
}

pub fn italic(line: &str) -> String {
    ITALIC.apply(line)
}

pub fn monospace(line: &str) -> String {
    MONOSPACE.replace_all(line, "`${1}`").into_owned()
}

pub fn strikethrough(line: &str) -> String {
    STRIKETHROUGH.apply(line)
}

pub fn insert(line: &str) -> String {
    INSERT.apply(line)
}

pub fn superscript(line: &str) -> String {
    SUPERSCRIPT.apply(line)
}

pub fn subscript(line: &str) -> String {
    SUBSCRIPT.apply(line)
}

pub fn linked_image(line: &str) -> String {
    LINKED_IMAGE.replace_all(line, "[![](${1})](${2})").into_owned()
}

pub fn image(line: &str) -> String {
    IMAGE.replace_all(line, "![](${1})").into_owned()
}

pub fn named_link(line: &str) -> String {
    NAMED_LINK.replace_all(line, "[${1}](${2})").into_owned()
}

/// `[url]` becomes `<url>`, except the `[name]` half of an already converted `[name](url)`.
pub fn unnamed_link(line: &str) -> String {
    UNNAMED_LINK
        .replace_all(line, |caps: &Captures| {
            let end = caps.get(0).map_or(line.len(), |m| m.end());
            if line[end..].starts_with('(') {
                caps[0].to_string()
            } else {
                format!("<{}>", &caps[1])
            }
        })
        .into_owned()
}

pub fn header(line: &str) -> String {
    HEADER
        .replace(line, |caps: &Captures| {
            let level = caps[1].parse::<usize>().unwrap_or(1);
            format!("{} ", "#".repeat(level))
        })
        .into_owned()
}

pub fn blockquote(line: &str) -> String {
    BLOCKQUOTE.replace(line, "> ").into_owned()
}

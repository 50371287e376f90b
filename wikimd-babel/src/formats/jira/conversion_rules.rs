/// Output knobs for the wiki to Markdown conversion
///
/// The defaults produce CommonMark that renders nested lists correctly in
/// the common renderers; changing them never changes which markup is recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRules {
    /// Bullet emitted for unordered list items
    pub unordered_marker: char,

    /// One nesting level of an unordered list
    pub unordered_indent: String,

    /// One nesting level of an ordered list (the width of "1. ")
    pub ordered_indent: String,

    /// Delimiter written above and below code blocks
    pub fence: String,
}

impl Default for ConversionRules {
    fn default() -> Self {
        Self {
            unordered_marker: '*',
            unordered_indent: "  ".to_string(),
            ordered_indent: "   ".to_string(),
            fence: "```".to_string(),
        }
    }
}

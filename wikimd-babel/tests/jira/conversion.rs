//! Element-by-element conversion tests
//!
//! One case per markup construct, checked against the exact expected Markdown.

use wikimd_babel::{convert, Converter};

fn assert_converts(name: &str, input: &str, want: &str) {
    let got = convert(input).unwrap_or_else(|e| panic!("{name}: conversion failed: {e}"));
    assert_eq!(got, want, "{name}");
}

#[test]
fn test_emphasis() {
    assert_converts("bold", "*bold*", "**bold**");
    assert_converts("italic", "_italic_", "*italic*");
    assert_converts("monospace", "{{monospaced}}", "`monospaced`");
    assert_converts("strikethrough", " -deleted- ", " ~~deleted~~ ");
    assert_converts("insert", "+inserted+", "<ins>inserted</ins>");
    assert_converts("superscript", "^superscript^", "<sup>superscript</sup>");
    assert_converts("subscript", "~subscript~", "<sub>subscript</sub>");
}

#[test]
fn test_bold_and_italic_combined() {
    assert_converts(
        "bold italic",
        "This is _*emphatically bold*_!",
        "This is ***emphatically bold***!",
    );
}

#[test]
fn test_preformatted_block_is_protected() {
    assert_converts(
        "noformat",
        "{noformat}\nso *no* further _formatting_ is done here\n{noformat}",
        "```\nso *no* further _formatting_ is done here\n```",
    );
}

#[test]
fn test_code_blocks() {
    assert_converts(
        "language",
        "{code:javascript}\nconst hello = 'world';\n{code}",
        "```javascript\nconst hello = 'world';\n```",
    );
    assert_converts(
        "title only",
        "{code:title=Foo.java}\nclass Foo {\n  public static void main() {\n  }\n}\n{code}",
        "```\nclass Foo {\n  public static void main() {\n  }\n}\n```",
    );
    assert_converts(
        "no line feed before end",
        "{code:java}\njava code{code}",
        "```java\njava code\n```",
    );
    assert_converts(
        "no line feeds",
        "{code:java}java code{code}",
        "```java\njava code\n```",
    );
}

#[test]
fn test_fully_configured_code_block() {
    let input = "{code:xml|title=My Title|borderStyle=dashed|borderColor=#ccc|titleBGColor=#F7D6C1|bgColor=#FFFFCE}\
                 \n    <test>\
                 \n        <another tag=\"attribute\"/>\
                 \n    </test>\
                 \n{code}";
    assert_converts(
        "fully configured",
        input,
        "```xml\n    <test>\n        <another tag=\"attribute\"/>\n    </test>\n```",
    );
}

#[test]
fn test_images_and_links() {
    assert_converts(
        "image",
        "!http://google.com/image!",
        "![](http://google.com/image)",
    );
    assert_converts(
        "linked image",
        "[!http://google.com/image!|http://google.com/link]",
        "[![](http://google.com/image)](http://google.com/link)",
    );
    assert_converts("unnamed link", "[http://google.com]", "<http://google.com>");
    assert_converts(
        "named link",
        "[Google|http://google.com]",
        "[Google](http://google.com)",
    );
}

#[test]
fn test_headers() {
    let cases = [
        ("h1. Biggest heading", "# Biggest heading"),
        ("h2. Bigger heading", "## Bigger heading"),
        ("h3. Big heading", "### Big heading"),
        ("h4. Normal heading", "#### Normal heading"),
        ("h5. Small heading", "##### Small heading"),
        ("h6. Smallest heading", "###### Smallest heading"),
    ];
    for (input, want) in cases {
        assert_converts(input, input, want);
    }
}

#[test]
fn test_blockquote() {
    assert_converts(
        "blockquote",
        "bq. This is a long blockquote type thingy that needs to be converted.",
        "> This is a long blockquote type thingy that needs to be converted.",
    );
}

#[test]
fn test_unordered_list() {
    assert_converts(
        "unordered",
        "* Foo\n* Bar\n* Baz\n** FooBar\n** BarBaz\n*** FooBarBaz\n* Starting Over",
        "* Foo\n* Bar\n* Baz\n  * FooBar\n  * BarBaz\n    * FooBarBaz\n* Starting Over",
    );
}

#[test]
fn test_ordered_list() {
    assert_converts(
        "ordered",
        "# Foo\n# Bar\n# Baz\n## FooBar\n## BarBaz\n### FooBarBaz\n# Starting Over",
        "1. Foo\n1. Bar\n1. Baz\n   1. FooBar\n   1. BarBaz\n      1. FooBarBaz\n1. Starting Over",
    );
}

#[test]
fn test_bold_inside_list_item() {
    assert_converts(
        "bold in list",
        "* This is not bold!\n** This is *bold*.",
        "* This is not bold!\n  * This is **bold**.",
    );
}

#[test]
fn test_strikethrough_does_not_span_lines() {
    let input = "* Here's an un-ordered list line\n* Multi-line strikethroughs shouldn't work.";
    assert_converts("multi-line strike", input, input);
}

#[test]
fn test_strikethrough_requires_surrounding_spaces() {
    assert_converts("subtraction", "-5 and 3-", "-5 and 3-");
    assert_converts("line edges", "-deleted-", "-deleted-");
    assert_converts("line end", "x -a-", "x -a-");
    assert_converts("between words", "keep x -a- y", "keep x ~~a~~ y");
}

#[test]
fn test_long_line_of_unclosed_openers() {
    let line = "*a _b +c ^d ~e ".repeat(40_000);
    assert_converts("unclosed openers", &line, &line);
}

#[test]
fn test_color_tags_removed() {
    assert_converts(
        "color",
        "A text with{color:blue} blue \n lines {color} is not necessary.",
        "A text with blue \n lines  is not necessary.",
    );
    assert_converts(
        "color across lines",
        "A {color:blue}text\nmore{color} B",
        "A text\nmore B",
    );
}

#[test]
fn test_code_block_between_paragraphs() {
    assert_converts(
        "surrounded",
        "h2. Example\n{code:rust}\nlet *x* = _y_;\n{code}\nAfter *that*.",
        "## Example\n```rust\nlet *x* = _y_;\n```\nAfter **that**.",
    );
}

#[test]
fn test_mid_line_code_block_gets_its_own_lines() {
    assert_converts(
        "mid-line code",
        "Run {code:sh}ls *.md{code} first",
        "Run\n```sh\nls *.md\n```\nfirst",
    );
}

#[test]
fn test_repeated_code_bodies_keep_their_languages() {
    assert_converts(
        "repeated bodies",
        "{code:a}\nsame\n{code}\n{code:b}\nsame\n{code}",
        "```a\nsame\n```\n```b\nsame\n```",
    );
}

#[test]
fn test_crlf_lines() {
    assert_converts(
        "crlf",
        "h1. Title\r\n* item *bold*\r\n",
        "# Title\r\n* item **bold**\r\n",
    );
}

#[test]
fn test_converter_is_reusable() {
    let converter = Converter::default();
    let first = converter.convert("{color:red}open").unwrap();
    let second = converter.convert("plain").unwrap();
    assert_eq!(first, "open");
    assert_eq!(second, "plain");
}

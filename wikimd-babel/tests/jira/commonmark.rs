//! Checks that converted output is read back by a CommonMark parser as the intended
//! structure, not just as the intended characters.

use comrak::nodes::{ListType, NodeValue};
use comrak::{parse_document, Arena, Options};
use wikimd_babel::convert;

/// Convert wiki markup and return every node of the parsed Markdown, in document order.
fn wiki_to_nodes(wiki: &str) -> Vec<NodeValue> {
    let markdown = convert(wiki).expect("conversion to succeed");
    let arena = Arena::new();
    let mut options = Options::default();
    options.extension.strikethrough = true;
    let root = parse_document(&arena, &markdown, &options);
    root.descendants()
        .map(|node| node.data.borrow().value.clone())
        .collect()
}

#[test]
fn test_heading_levels() {
    let levels: Vec<u8> = wiki_to_nodes("h1. One\n\nh3. Three\n\nh6. Six")
        .into_iter()
        .filter_map(|node| match node {
            NodeValue::Heading(heading) => Some(heading.level),
            _ => None,
        })
        .collect();
    assert_eq!(levels, vec![1, 3, 6]);
}

#[test]
fn test_code_block_info_and_literal() {
    let blocks: Vec<(String, String)> =
        wiki_to_nodes("{code:python|title=demo.py}\nprint(*args)\n{code}")
            .into_iter()
            .filter_map(|node| match node {
                NodeValue::CodeBlock(block) => Some((block.info, block.literal)),
                _ => None,
            })
            .collect();
    assert_eq!(
        blocks,
        vec![("python".to_string(), "print(*args)\n".to_string())]
    );
}

#[test]
fn test_mid_line_code_block_is_still_a_code_block() {
    let nodes = wiki_to_nodes("Run {code:sh}ls *.md{code} first");
    let blocks: Vec<(String, String)> = nodes
        .iter()
        .filter_map(|node| match node {
            NodeValue::CodeBlock(block) => Some((block.info.clone(), block.literal.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(blocks, vec![("sh".to_string(), "ls *.md\n".to_string())]);
    assert!(!nodes.iter().any(|n| matches!(n, NodeValue::Emph)));
}

#[test]
fn test_nested_lists() {
    let lists: Vec<ListType> = wiki_to_nodes("* a\n** b\n\n# one\n## two")
        .into_iter()
        .filter_map(|node| match node {
            NodeValue::List(list) => Some(list.list_type),
            _ => None,
        })
        .collect();
    assert_eq!(
        lists,
        vec![
            ListType::Bullet,
            ListType::Bullet,
            ListType::Ordered,
            ListType::Ordered
        ]
    );
}

#[test]
fn test_inline_emphasis_nodes() {
    let nodes = wiki_to_nodes("*strong* and _emphasis_ and x -gone- y");
    assert!(nodes.iter().any(|n| matches!(n, NodeValue::Strong)));
    assert!(nodes.iter().any(|n| matches!(n, NodeValue::Emph)));
    assert!(nodes.iter().any(|n| matches!(n, NodeValue::Strikethrough)));
}

#[test]
fn test_links_and_images() {
    let urls: Vec<String> =
        wiki_to_nodes("[Docs|http://example.com/docs] [http://example.com] !http://example.com/a.png!")
            .into_iter()
            .filter_map(|node| match node {
                NodeValue::Link(link) => Some(format!("link:{}", link.url)),
                NodeValue::Image(image) => Some(format!("image:{}", image.url)),
                _ => None,
            })
            .collect();
    assert_eq!(
        urls,
        vec![
            "link:http://example.com/docs",
            "link:http://example.com",
            "image:http://example.com/a.png",
        ]
    );
}

#[test]
fn test_blockquote() {
    let nodes = wiki_to_nodes("bq. quoted text");
    assert!(nodes.iter().any(|n| matches!(n, NodeValue::BlockQuote)));
}

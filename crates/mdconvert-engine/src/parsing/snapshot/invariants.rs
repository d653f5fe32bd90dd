use crate::document::{Block, Document, Inline};
use crate::options::Limits;

/// Validates parser output invariants.
///
/// Asserts that:
/// - Heading levels are within `1..=6`
/// - A list item is at most one level deeper than the item before it, and
///   the first item of a list is at depth 0
/// - Text nodes are never empty and never adjacent
/// - Inline formatting nests no deeper than `limits.max_nesting_depth`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document, limits: &Limits) {
    check_blocks(&doc.blocks, limits);
}

fn check_blocks(blocks: &[Block], limits: &Limits) {
    let mut prev_depth: Option<usize> = None;
    for b in blocks {
        match b {
            Block::Heading { level, content } => {
                assert!((1..=6).contains(level), "heading level out of range: {level}");
                check_inlines(content, limits);
            }
            Block::ListItem { depth, content, .. } => {
                let max = prev_depth.map_or(0, |d| d + 1);
                assert!(
                    *depth <= max,
                    "list item jumps to depth {depth}, previous allows at most {max}"
                );
                check_inlines(content, limits);
            }
            Block::Paragraph { content } => check_inlines(content, limits),
            Block::BlockQuote { blocks } => check_blocks(blocks, limits),
            Block::CodeBlock { .. } | Block::ThematicBreak => {}
        }
        prev_depth = match b {
            Block::ListItem { depth, .. } => Some(*depth),
            _ => None,
        };
    }
}

fn check_inlines(nodes: &[Inline], limits: &Limits) {
    let depth = inline_depth(nodes);
    assert!(
        depth <= limits.max_nesting_depth,
        "inline nesting {depth} exceeds {}",
        limits.max_nesting_depth
    );
    check_text_nodes(nodes);
}

fn check_text_nodes(nodes: &[Inline]) {
    for pair in nodes.windows(2) {
        assert!(
            !matches!(pair, [Inline::Text(_), Inline::Text(_)]),
            "adjacent text nodes: {pair:?}"
        );
    }
    for n in nodes {
        match n {
            Inline::Text(t) => assert!(!t.is_empty(), "empty text node"),
            Inline::Emphasis(c) | Inline::Strong(c) | Inline::Link { children: c, .. } => {
                check_text_nodes(c)
            }
            _ => {}
        }
    }
}

fn inline_depth(nodes: &[Inline]) -> usize {
    nodes
        .iter()
        .map(|n| match n {
            Inline::Emphasis(c) | Inline::Strong(c) | Inline::Link { children: c, .. } => {
                1 + inline_depth(c)
            }
            _ => 0,
        })
        .max()
        .unwrap_or(0)
}

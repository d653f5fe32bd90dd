//! Tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; their expected outlines are inline
//! snapshots below.

use crate::{
    document::{Block, Inline},
    error::ConversionError,
    options::Limits,
    parsing::{
        parse_document,
        snapshot::{invariants, normalize},
    },
};

fn outline(md: &str) -> String {
    let limits = Limits::default();
    let doc = parse_document(md, &limits).unwrap();
    invariants(&doc, &limits);
    normalize(&doc).to_string()
}

// Fixture-based snapshot tests

#[test]
fn fixture_mixed_blocks() {
    insta::assert_snapshot!(outline(include_str!("fixtures/mixed_blocks.md")), @r#"
    Heading(1)
      Text "Title"
    Paragraph
      Text "Some "
      Emphasis
        Text "emphasis"
      Text " and "
      Strong
        Text "strong"
      Text " text\nover two lines."
    ListItem(- depth=0)
      Text "one"
    ListItem(- depth=0)
      Text "two"
    ListItem(- depth=1)
      Text "nested"
    ListItem(1. depth=0)
      Text "first"
    ThematicBreak
    "#);
}

#[test]
fn fixture_quote_and_fence() {
    insta::assert_snapshot!(outline(include_str!("fixtures/quote_and_fence.md")), @r#"
    BlockQuote
      Paragraph
        Text "quoted "
        Emphasis
          Text "text"
      BlockQuote
        Paragraph
          Text "deeper"
      Paragraph
        Text "back"
    CodeBlock(rust) "fn main() {}\n"
    CodeBlock() "unterminated\n```\n"
    "#);
}

#[test]
fn fixture_links_and_code() {
    insta::assert_snapshot!(outline(include_str!("fixtures/links_and_code.md")), @r#"
    Paragraph
      Text "See "
      Link "https://example.com" title=Some("Docs")
        Text "the docs"
      Text " or "
      Image "logo.png" alt="logo" title=None
      Text ".\nUse "
      CodeSpan "let x = *y;"
      Text " here"
      LineBreak
      Text "and [broken](link"
    "#);
}

// Invariant tests

/// Code spans are raw zones: nothing inside them is parsed.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let doc = parse_document("`[link](x) *em*`", &Limits::default()).unwrap();
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            content: vec![Inline::CodeSpan("[link](x) *em*".to_string())]
        }]
    );
}

/// Unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let doc = parse_document("[unclosed and `also unclosed", &Limits::default()).unwrap();
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            content: vec![Inline::Text("[unclosed and `also unclosed".to_string())]
        }]
    );
}

#[test]
fn empty_document() {
    let doc = parse_document("", &Limits::default()).unwrap();
    assert!(doc.blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = parse_document("\n\n  \n\t\n", &Limits::default()).unwrap();
    assert!(doc.blocks.is_empty());
}

#[test]
fn oversized_input_is_rejected_before_parsing() {
    let limits = Limits {
        max_input_bytes: 8,
        ..Limits::default()
    };
    let err = parse_document("123456789", &limits).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Resource limit exceeded: input is 9 bytes, maximum is 8"
    );
    assert!(parse_document("12345678", &limits).is_ok());
}

#[test]
fn nested_markers_hit_depth_limit() {
    let input = "- ".repeat(100) + "x";
    let err = parse_document(&input, &Limits::default()).unwrap_err();
    assert!(matches!(err, ConversionError::ResourceExhausted(_)));
}

#[test]
fn messy_input_keeps_invariants() {
    let inputs = [
        "***a** b* _c __d_ e__ [f *g](h) i*",
        "# *\n## **\n###### [](\n####### seven",
        "- a\n        - b\n - c\n      - d\n- e",
        "> - a\n> - b\n>\n> ```\n> x",
        "*a **b [c](d) e** f*\n![*i*](j \"k\")",
    ];
    for input in inputs {
        let limits = Limits::default();
        let doc = parse_document(input, &limits).unwrap();
        invariants(&doc, &limits);
    }
}

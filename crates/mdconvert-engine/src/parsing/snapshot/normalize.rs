use std::fmt::{self, Write};

use crate::document::{Block, Document, Inline, ListKind};

/// Indented outline of a parsed document, one node per line.
///
/// ```text
/// Heading(1)
///   Text "Hello"
/// ListItem(- depth=0)
///   Emphasis
///     Text "a"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snap(String);

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converts a document into its outline.
pub fn normalize(doc: &Document) -> Snap {
    let mut out = String::new();
    for block in &doc.blocks {
        write_block(&mut out, block, 0);
    }
    Snap(out)
}

fn line(out: &mut String, indent: usize, args: fmt::Arguments<'_>) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{:width$}{args}", "", width = indent * 2);
}

fn write_block(out: &mut String, block: &Block, indent: usize) {
    match block {
        Block::Paragraph { content } => {
            line(out, indent, format_args!("Paragraph"));
            write_inlines(out, content, indent + 1);
        }
        Block::Heading { level, content } => {
            line(out, indent, format_args!("Heading({level})"));
            write_inlines(out, content, indent + 1);
        }
        Block::ListItem {
            list,
            depth,
            content,
        } => {
            let marker = match list {
                ListKind::Unordered { bullet } => bullet.to_string(),
                ListKind::Ordered { start, delimiter } => format!("{start}{delimiter}"),
            };
            line(out, indent, format_args!("ListItem({marker} depth={depth})"));
            write_inlines(out, content, indent + 1);
        }
        Block::CodeBlock { lang, raw } => {
            let lang = lang.as_deref().unwrap_or("");
            line(out, indent, format_args!("CodeBlock({lang}) {raw:?}"));
        }
        Block::BlockQuote { blocks } => {
            line(out, indent, format_args!("BlockQuote"));
            for b in blocks {
                write_block(out, b, indent + 1);
            }
        }
        Block::ThematicBreak => line(out, indent, format_args!("ThematicBreak")),
    }
}

fn write_inlines(out: &mut String, nodes: &[Inline], indent: usize) {
    for node in nodes {
        match node {
            Inline::Text(t) => line(out, indent, format_args!("Text {t:?}")),
            Inline::CodeSpan(c) => line(out, indent, format_args!("CodeSpan {c:?}")),
            Inline::Emphasis(children) => {
                line(out, indent, format_args!("Emphasis"));
                write_inlines(out, children, indent + 1);
            }
            Inline::Strong(children) => {
                line(out, indent, format_args!("Strong"));
                write_inlines(out, children, indent + 1);
            }
            Inline::Link {
                href,
                title,
                children,
            } => {
                line(out, indent, format_args!("Link {href:?} title={title:?}"));
                write_inlines(out, children, indent + 1);
            }
            Inline::Image { src, alt, title } => line(
                out,
                indent,
                format_args!("Image {src:?} alt={alt:?} title={title:?}"),
            ),
            Inline::LineBreak => line(out, indent, format_args!("LineBreak")),
        }
    }
}

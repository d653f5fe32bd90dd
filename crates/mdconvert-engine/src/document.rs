//! # Document Tree
//!
//! The owned tree produced by parsing and consumed by rendering. Every node
//! exclusively owns its children, so the structure is a strict tree: no
//! shared ownership, no cycles.

/// Root of a parse result: blocks in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// Which kind of list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-`, `*` or `+` bullet.
    Unordered { bullet: char },
    /// `1.` or `1)` marker with the item's number.
    Ordered { start: u64, delimiter: char },
}

impl ListKind {
    /// Whether two items can sit in the same rendered list.
    pub fn continues(self, other: ListKind) -> bool {
        match (self, other) {
            (ListKind::Unordered { bullet: a }, ListKind::Unordered { bullet: b }) => a == b,
            (
                ListKind::Ordered { delimiter: a, .. },
                ListKind::Ordered { delimiter: b, .. },
            ) => a == b,
            _ => false,
        }
    }
}

/// A structural, line-level unit of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph {
        content: Vec<Inline>,
    },
    Heading {
        /// Always within `1..=6`.
        level: u8,
        content: Vec<Inline>,
    },
    /// A list item. Items are kept flat; `depth` (0 for top level) carries
    /// the nesting, and the renderer rebuilds the list structure from it.
    ListItem {
        list: ListKind,
        depth: usize,
        content: Vec<Inline>,
    },
    /// Raw code, never inline-parsed.
    CodeBlock {
        lang: Option<String>,
        raw: String,
    },
    BlockQuote {
        blocks: Vec<Block>,
    },
    ThematicBreak,
}

/// A span-level unit nested within a block's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    CodeSpan(String),
    Link {
        href: String,
        title: Option<String>,
        children: Vec<Inline>,
    },
    Image {
        src: String,
        alt: String,
        title: Option<String>,
    },
    LineBreak,
}

impl Inline {
    /// Concatenated text content, with formatting dropped.
    ///
    /// Used for image alt text, where markup has no place.
    pub fn plain_text(nodes: &[Inline]) -> String {
        let mut out = String::new();
        for n in nodes {
            n.push_plain_text(&mut out);
        }
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Inline::Text(t) | Inline::CodeSpan(t) => out.push_str(t),
            Inline::Emphasis(children) | Inline::Strong(children) => {
                children.iter().for_each(|c| c.push_plain_text(out))
            }
            Inline::Link { children, .. } => children.iter().for_each(|c| c.push_plain_text(out)),
            Inline::Image { alt, .. } => out.push_str(alt),
            Inline::LineBreak => out.push('\n'),
        }
    }
}

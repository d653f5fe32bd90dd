use crate::{
    document::{Block, ListKind},
    error::ConversionError,
    options::Limits,
    parsing::inline,
};

use super::{
    containers::ContainerPath,
    kinds::{BlockQuote, CodeFence, FenceKind, ListMarker, Paragraph, ThematicBreak},
    tokenizer::{LineKind, LineToken, MAX_MARKER_INDENT, strip_indent},
};

#[derive(Debug)]
enum LeafState<'a> {
    None,
    Paragraph {
        lines: Vec<&'a str>,
    },
    ListItem {
        list: ListKind,
        depth: usize,
        lines: Vec<&'a str>,
    },
    Fence {
        kind: FenceKind,
        len: usize,
        indent: usize,
        lang: Option<String>,
        lines: Vec<&'a str>,
    },
}

/// An open list level: where its marker sat and where its text starts.
#[derive(Debug, Clone, Copy)]
struct ListFrame {
    marker_indent: usize,
    content_indent: usize,
}

/// Line-driven state machine that turns [`LineToken`]s into blocks.
///
/// Blockquotes live on the container path, lists on the list stack, and
/// at most one leaf (paragraph, list item text or fence) is open at a time.
pub struct BlockBuilder<'a> {
    limits: Limits,
    containers: ContainerPath,
    lists: Vec<ListFrame>,
    leaf: LeafState<'a>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            containers: ContainerPath::default(),
            lists: vec![],
            leaf: LeafState::None,
        }
    }

    pub fn push(&mut self, t: &LineToken<'a>) -> Result<(), ConversionError> {
        if self.in_fence() {
            if t.quote_depth >= self.containers.depth() {
                return self.consume_fence_line(t);
            }
            // Fewer quote markers: the enclosing quote ends and takes the fence with it.
            self.flush_leaf()?;
        }

        if t.quote_depth > self.limits.max_nesting_depth {
            log::warn!(
                "line {}: blockquote depth {} over limit",
                t.number,
                t.quote_depth
            );
            return Err(ConversionError::nesting(self.limits.max_nesting_depth));
        }
        if t.quote_depth != self.containers.depth() {
            self.flush_leaf()?;
            self.lists.clear();
            self.containers.set_blockquote_depth(t.quote_depth);
        }

        match t.kind {
            LineKind::Blank => {
                self.flush_leaf()?;
                self.lists.clear();
            }
            LineKind::Fence(sig) => {
                self.flush_leaf()?;
                self.lists.clear();
                self.leaf = LeafState::Fence {
                    kind: sig.kind,
                    len: sig.len,
                    indent: t.indent,
                    lang: CodeFence::lang(sig.info),
                    lines: vec![],
                };
            }
            LineKind::Heading { level, text } => {
                self.flush_leaf()?;
                self.lists.clear();
                let content = inline::parse_inline(text, &self.limits)?;
                self.containers.push(Block::Heading { level, content });
            }
            LineKind::ThematicBreak => {
                self.flush_leaf()?;
                self.lists.clear();
                self.containers.push(Block::ThematicBreak);
            }
            LineKind::ListMarker(marker) => {
                self.flush_leaf()?;
                self.open_list_item(t.indent, marker)?;
            }
            LineKind::Text(text) => self.extend_text(text),
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<Vec<Block>, ConversionError> {
        // EOF flush; an unterminated fence is emitted as a code block anyway.
        self.flush_leaf()?;
        Ok(self.containers.finish())
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, t: &LineToken<'a>) -> Result<(), ConversionError> {
        let depth = self.containers.depth();
        let LeafState::Fence {
            kind,
            len,
            indent,
            lines,
            ..
        } = &mut self.leaf
        else {
            return Ok(());
        };

        let (_, idx) = BlockQuote::strip_at_most(t.raw, depth);
        let line = &t.raw[idx..];
        let unindented = line.trim_start_matches([' ', '\t']);
        let closing_indent = line.len() - unindented.len();
        if closing_indent <= MAX_MARKER_INDENT
            && CodeFence::closes(*kind, *len, CodeFence::sig(unindented))
        {
            return self.flush_leaf();
        }
        lines.push(strip_indent(line, *indent));
        Ok(())
    }

    /// Places a list item on the list stack, following nested markers that
    /// share the line (`- - item`).
    fn open_list_item(
        &mut self,
        mut indent: usize,
        mut marker: ListMarker<'a>,
    ) -> Result<(), ConversionError> {
        loop {
            let depth = self.place_list_item(indent, marker.width);
            if depth >= self.limits.max_nesting_depth {
                log::warn!("list depth {depth} over limit");
                return Err(ConversionError::nesting(self.limits.max_nesting_depth));
            }

            if let Some(inner) = ListMarker::parse(marker.content)
                && !ThematicBreak::matches(marker.content)
            {
                self.containers.push(Block::ListItem {
                    list: marker.list,
                    depth,
                    content: vec![],
                });
                indent += marker.width;
                marker = inner;
                continue;
            }

            self.leaf = LeafState::ListItem {
                list: marker.list,
                depth,
                lines: vec![marker.content],
            };
            return Ok(());
        }
    }

    /// Returns the depth of a marker at `indent`, updating the list stack.
    ///
    /// A marker nests when it reaches the parent's content column. Otherwise
    /// it closes deeper levels and becomes a sibling, so indentation that
    /// does not line up is never an error.
    fn place_list_item(&mut self, indent: usize, width: usize) -> usize {
        while let Some(top) = self.lists.last().copied() {
            if indent >= top.content_indent {
                break;
            }
            self.lists.pop();
            if indent >= top.marker_indent {
                break;
            }
        }
        let depth = self.lists.len();
        self.lists.push(ListFrame {
            marker_indent: indent,
            content_indent: indent + width,
        });
        depth
    }

    fn extend_text(&mut self, text: &'a str) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } | LeafState::ListItem { lines, .. } => {
                lines.push(text);
            }
            _ => {
                self.leaf = LeafState::Paragraph { lines: vec![text] };
            }
        }
    }

    fn flush_leaf(&mut self) -> Result<(), ConversionError> {
        let block = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return Ok(()),
            LeafState::Paragraph { lines } => Block::Paragraph {
                content: inline::parse_inline(&Paragraph::join_lines(&lines), &self.limits)?,
            },
            LeafState::ListItem { list, depth, lines } => Block::ListItem {
                list,
                depth,
                content: inline::parse_inline(&Paragraph::join_lines(&lines), &self.limits)?,
            },
            LeafState::Fence { lang, lines, .. } => {
                let mut raw = lines.join("\n");
                if !lines.is_empty() {
                    raw.push('\n');
                }
                Block::CodeBlock { lang, raw }
            }
        };
        log::trace!("closed {}", block_name(&block));
        self.containers.push(block);
        Ok(())
    }
}

fn block_name(b: &Block) -> &'static str {
    match b {
        Block::Paragraph { .. } => "paragraph",
        Block::Heading { .. } => "heading",
        Block::ListItem { .. } => "list item",
        Block::CodeBlock { .. } => "code block",
        Block::BlockQuote { .. } => "blockquote",
        Block::ThematicBreak => "thematic break",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Inline;
    use crate::parsing::blocks::tokenizer::Tokenizer;
    use pretty_assertions::assert_eq;

    fn build(input: &str) -> Result<Vec<Block>, ConversionError> {
        build_with(input, Limits::default())
    }

    fn build_with(input: &str, limits: Limits) -> Result<Vec<Block>, ConversionError> {
        let mut b = BlockBuilder::new(limits);
        for t in Tokenizer::new(input) {
            b.push(&t)?;
        }
        b.finish()
    }

    fn text(s: &str) -> Vec<Inline> {
        vec![Inline::Text(s.to_string())]
    }

    fn depths(blocks: &[Block]) -> Vec<usize> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::ListItem { depth, .. } => Some(*depth),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn paragraph_lines_join() {
        let blocks = build("one\ntwo\n\nthree").unwrap();
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    content: text("one\ntwo")
                },
                Block::Paragraph {
                    content: text("three")
                },
            ]
        );
    }

    #[test]
    fn fence_is_raw() {
        let blocks = build("```rust\nlet *a* = 1;\n```\nafter").unwrap();
        assert_eq!(
            blocks[0],
            Block::CodeBlock {
                lang: Some("rust".into()),
                raw: "let *a* = 1;\n".into()
            }
        );
        assert_eq!(
            blocks[1],
            Block::Paragraph {
                content: text("after")
            }
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let blocks = build("```rust\ncode").unwrap();
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                lang: Some("rust".into()),
                raw: "code\n".into()
            }]
        );
    }

    #[test]
    fn shorter_fence_does_not_close() {
        let blocks = build("````\n```\n````").unwrap();
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                lang: None,
                raw: "```\n".into()
            }]
        );
    }

    #[test]
    fn fence_strips_opening_indent() {
        let blocks = build("  ```\n    code\n  ```").unwrap();
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                lang: None,
                raw: "  code\n".into()
            }]
        );
    }

    #[test]
    fn list_nesting_follows_indentation() {
        let blocks = build("- a\n  - b\n    - c\n  - d\n- e").unwrap();
        assert_eq!(depths(&blocks), vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn shallow_indent_is_a_sibling() {
        let blocks = build("- a\n - b").unwrap();
        assert_eq!(depths(&blocks), vec![0, 0]);
    }

    #[test]
    fn non_monotonic_indent_is_not_an_error() {
        let blocks = build("- a\n      - b\n   - c\n  - d").unwrap();
        assert_eq!(depths(&blocks), vec![0, 1, 1, 1]);
    }

    #[test]
    fn markers_on_one_line_nest() {
        let blocks = build("- - x").unwrap();
        assert_eq!(depths(&blocks), vec![0, 1]);
        assert_eq!(
            blocks[1],
            Block::ListItem {
                list: ListKind::Unordered { bullet: '-' },
                depth: 1,
                content: text("x")
            }
        );
    }

    #[test]
    fn list_item_continuation_line() {
        let blocks = build("- first\nmore").unwrap();
        assert_eq!(
            blocks,
            vec![Block::ListItem {
                list: ListKind::Unordered { bullet: '-' },
                depth: 0,
                content: text("first\nmore")
            }]
        );
    }

    #[test]
    fn blank_line_ends_list_context() {
        let blocks = build("- a\n\n  - b").unwrap();
        assert_eq!(depths(&blocks), vec![0, 0]);
    }

    #[test]
    fn quote_opens_and_closes() {
        let blocks = build("> a\n> > b\n> c\nd").unwrap();
        assert_eq!(
            blocks,
            vec![
                Block::BlockQuote {
                    blocks: vec![
                        Block::Paragraph { content: text("a") },
                        Block::BlockQuote {
                            blocks: vec![Block::Paragraph { content: text("b") }]
                        },
                        Block::Paragraph { content: text("c") },
                    ]
                },
                Block::Paragraph { content: text("d") },
            ]
        );
    }

    #[test]
    fn fence_inside_quote_keeps_inner_markers() {
        let blocks = build("> ```\n> > not a quote\n> ```").unwrap();
        assert_eq!(
            blocks,
            vec![Block::BlockQuote {
                blocks: vec![Block::CodeBlock {
                    lang: None,
                    raw: "> not a quote\n".into()
                }]
            }]
        );
    }

    #[test]
    fn leaving_quote_closes_its_fence() {
        let blocks = build("> ```\n> code\nafter").unwrap();
        assert_eq!(
            blocks,
            vec![
                Block::BlockQuote {
                    blocks: vec![Block::CodeBlock {
                        lang: None,
                        raw: "code\n".into()
                    }]
                },
                Block::Paragraph {
                    content: text("after")
                },
            ]
        );
    }

    #[test]
    fn deep_list_is_rejected() {
        let limits = Limits {
            max_nesting_depth: 4,
            ..Limits::default()
        };
        let ok = build_with("- - - x", limits).unwrap();
        assert_eq!(depths(&ok), vec![0, 1, 2]);
        let err = build_with("- - - - - x", limits).unwrap_err();
        assert_eq!(err, ConversionError::nesting(4));
    }

    #[test]
    fn deep_quote_is_rejected() {
        let limits = Limits {
            max_nesting_depth: 2,
            ..Limits::default()
        };
        assert!(build_with("> > x", limits).is_ok());
        assert_eq!(
            build_with("> > > x", limits).unwrap_err(),
            ConversionError::nesting(2)
        );
    }
}

use std::ops::Range;

use crate::document::Inline;
use crate::error::ConversionError;
use crate::options::Limits;

use super::{
    kinds::{CodeSpan, Emphasis, Flanking, Link, LinkTail},
    lexer::{TokenKind, lex_with_spans},
};

/// Parses inline content into a sequence of [`Inline`] nodes.
///
/// # Precedence
/// Code spans are resolved first and suppress all other parsing inside them.
/// Links and images come next; emphasis never crosses a bracket boundary.
///
/// # Failure
/// Syntax that cannot be resolved becomes literal text. The only error is
/// [`ConversionError::ResourceExhausted`], when formatting nests deeper than
/// `limits.max_nesting_depth`.
///
/// Adjacent text is merged, and a soft line break stays in the text as `\n`.
pub fn parse_inline(text: &str, limits: &Limits) -> Result<Vec<Inline>, ConversionError> {
    InlineParser::new(text, limits.max_nesting_depth).run()
}

/// What started an open frame.
#[derive(Debug, Clone, Copy)]
enum Opener {
    /// Unmatched emphasis delimiters still available to closers.
    Emphasis { ch: u8, count: usize },
    /// `[` or `![` waiting for its `]`. `saved` holds the open emphasis
    /// counts of the enclosing segment.
    Bracket {
        image: bool,
        active: bool,
        saved: [usize; 2],
    },
}

impl Opener {
    fn literal(&self) -> String {
        match *self {
            Opener::Emphasis { ch, count } => char::from(ch).to_string().repeat(count),
            Opener::Bracket { image: true, .. } => Link::IMAGE_OPEN.to_string(),
            Opener::Bracket { image: false, .. } => Link::OPEN.to_string(),
        }
    }
}

/// Children collected since an opener, waiting to be wrapped or flattened.
#[derive(Debug)]
struct Frame {
    opener: Option<Opener>,
    children: Vec<Inline>,
    /// Deepest formatting nesting among `children`.
    depth: usize,
}

impl Frame {
    fn new(opener: Option<Opener>) -> Self {
        Self {
            opener,
            children: Vec::new(),
            depth: 0,
        }
    }

    fn push(&mut self, node: Inline, depth: usize) {
        if let Inline::Text(s) = &node {
            self.push_text(s);
            return;
        }
        self.depth = self.depth.max(depth);
        self.children.push(node);
    }

    fn push_text(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        match self.children.last_mut() {
            Some(Inline::Text(last)) => last.push_str(s),
            _ => self.children.push(Inline::Text(s.to_string())),
        }
    }

    /// Flattens `other` into this frame: its opener becomes literal text
    /// followed by its children.
    fn absorb(&mut self, other: Frame) {
        if let Some(opener) = other.opener {
            self.push_text(&opener.literal());
        }
        self.depth = self.depth.max(other.depth);
        for child in other.children {
            match child {
                Inline::Text(s) => self.push_text(&s),
                node => self.children.push(node),
            }
        }
    }
}

/// Delimiter-stack inline parser.
///
/// Every open delimiter gets a frame on `stack`. A closer wraps the frame's
/// children into a node; frames left unmatched are flattened back into
/// their parent as literal text. Each token is visited once and the stack
/// holds at most `max_depth` frames, so work stays linear in the input.
struct InlineParser<'s> {
    text: &'s str,
    tokens: Vec<(TokenKind, Range<usize>)>,
    code_closers: Vec<Option<usize>>,
    root: Frame,
    stack: Vec<Frame>,
    /// Open emphasis frames per delimiter slot, above the innermost bracket.
    open: [usize; 2],
    max_depth: usize,
}

impl<'s> InlineParser<'s> {
    fn new(text: &'s str, max_depth: usize) -> Self {
        let tokens = lex_with_spans(text);
        let code_closers = CodeSpan::closers(&tokens);
        Self {
            text,
            tokens,
            code_closers,
            root: Frame::new(None),
            stack: Vec::new(),
            open: [0; 2],
            max_depth,
        }
    }

    fn run(mut self) -> Result<Vec<Inline>, ConversionError> {
        let text = self.text;
        let mut i = 0;
        while i < self.tokens.len() {
            let (kind, span) = self.tokens[i].clone();
            match kind {
                TokenKind::Backticks => {
                    if let Some(close) = self.code_closers[i] {
                        let raw = &text[span.end..self.tokens[close].1.start];
                        self.top().push(Inline::CodeSpan(CodeSpan::content(raw)), 0);
                        i = close + 1;
                        continue;
                    }
                    self.top().push_text(&text[span]);
                }
                TokenKind::Stars | TokenKind::Underscores => self.delimiter_run(span)?,
                TokenKind::ImageOpen => self.open_bracket(true),
                TokenKind::LBracket => self.open_bracket(false),
                TokenKind::RBracket => {
                    if let Some(end) = self.close_bracket(span.end)? {
                        while i < self.tokens.len() && self.tokens[i].1.start < end {
                            i += 1;
                        }
                        continue;
                    }
                }
                TokenKind::Escape => self.top().push_text(&text[span.start + 1..span.end]),
                TokenKind::HardBreak => self.top().push(Inline::LineBreak, 0),
                TokenKind::SoftBreak => self.top().push_text("\n"),
                TokenKind::LParen | TokenKind::RParen | TokenKind::Whitespace | TokenKind::Text => {
                    self.top().push_text(&text[span])
                }
            }
            i += 1;
        }

        while !self.stack.is_empty() {
            self.collapse_top();
        }
        Ok(self.root.children)
    }

    fn top(&mut self) -> &mut Frame {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    fn delimiter_run(&mut self, span: Range<usize>) -> Result<(), ConversionError> {
        let ch = self.text.as_bytes()[span.start];
        let flanking = Flanking::of(self.text, span.start, span.end, ch);

        let mut count = span.len();
        if flanking.can_close {
            count = self.close_emphasis(ch, count)?;
        }
        if count == 0 {
            return Ok(());
        }

        if flanking.can_open {
            self.reserve_frame();
            self.open[Emphasis::slot(ch)] += 1;
            self.stack
                .push(Frame::new(Some(Opener::Emphasis { ch, count })));
        } else {
            let text = self.text;
            self.top().push_text(&text[span.end - count..span.end]);
        }
        Ok(())
    }

    /// Matches `count` closing `ch` delimiters against open frames and
    /// returns how many were left over.
    fn close_emphasis(&mut self, ch: u8, mut count: usize) -> Result<usize, ConversionError> {
        let slot = Emphasis::slot(ch);

        while count > 0 && self.open[slot] > 0 {
            // Anything opened after the matching opener can no longer close.
            loop {
                match self.stack.last().and_then(|f| f.opener) {
                    Some(Opener::Emphasis { ch: c, .. }) if c == ch => break,
                    Some(Opener::Emphasis { .. }) => self.collapse_top(),
                    _ => return Ok(count),
                }
            }

            let max_depth = self.max_depth;
            let (node, depth) = {
                let Some(frame) = self.stack.last_mut() else {
                    return Ok(count);
                };
                let Some(Opener::Emphasis {
                    count: available, ..
                }) = &mut frame.opener
                else {
                    return Ok(count);
                };

                let used = if count >= Emphasis::STRONG_LEN && *available >= Emphasis::STRONG_LEN {
                    Emphasis::STRONG_LEN
                } else {
                    1
                };
                *available -= used;
                count -= used;
                let exhausted = *available == 0;

                let depth = frame.depth + 1;
                if depth > max_depth {
                    return Err(ConversionError::nesting(max_depth));
                }
                let children = std::mem::take(&mut frame.children);
                frame.depth = 0;
                let node = if used == Emphasis::STRONG_LEN {
                    Inline::Strong(children)
                } else {
                    Inline::Emphasis(children)
                };

                if !exhausted {
                    frame.push(node, depth);
                    continue;
                }
                (node, depth)
            };

            self.stack.pop();
            self.open[slot] -= 1;
            self.top().push(node, depth);
        }

        Ok(count)
    }

    fn open_bracket(&mut self, image: bool) {
        self.reserve_frame();
        let saved = std::mem::take(&mut self.open);
        self.stack.push(Frame::new(Some(Opener::Bracket {
            image,
            active: true,
            saved,
        })));
    }

    /// Handles `]` ending at byte `end`. Returns the end of the link when
    /// one was formed, so the caller can skip its destination.
    fn close_bracket(&mut self, end: usize) -> Result<Option<usize>, ConversionError> {
        let Some(pos) = self
            .stack
            .iter()
            .rposition(|f| matches!(f.opener, Some(Opener::Bracket { .. })))
        else {
            self.top().push_text(Link::CLOSE);
            return Ok(None);
        };
        while self.stack.len() > pos + 1 {
            self.collapse_top();
        }

        let Some(Opener::Bracket { image, active, .. }) = self.stack.last().and_then(|f| f.opener)
        else {
            return Ok(None);
        };
        let tail = if active {
            LinkTail::parse(self.text, end)
        } else {
            None
        };
        let Some(tail) = tail else {
            self.collapse_top();
            self.top().push_text(Link::CLOSE);
            return Ok(None);
        };
        let Some(frame) = self.stack.pop() else {
            return Ok(None);
        };
        if let Some(Opener::Bracket { saved, .. }) = frame.opener {
            self.open = saved;
        }

        let (node, depth) = if image {
            let node = Inline::Image {
                src: tail.dest,
                alt: Inline::plain_text(&frame.children),
                title: tail.title,
            };
            (node, 0)
        } else {
            let depth = frame.depth + 1;
            if depth > self.max_depth {
                return Err(ConversionError::nesting(self.max_depth));
            }
            // Links cannot contain links.
            for f in &mut self.stack {
                if let Some(Opener::Bracket {
                    image: false,
                    active,
                    ..
                }) = &mut f.opener
                {
                    *active = false;
                }
            }
            let node = Inline::Link {
                href: tail.dest,
                title: tail.title,
                children: frame.children,
            };
            (node, depth)
        };
        self.top().push(node, depth);
        Ok(Some(tail.end))
    }

    /// Flattens the innermost frame into its parent as literal text.
    fn collapse_top(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame.opener {
            Some(Opener::Emphasis { ch, .. }) => self.open[Emphasis::slot(ch)] -= 1,
            Some(Opener::Bracket { saved, .. }) => self.open = saved,
            None => {}
        }
        self.top().absorb(frame);
    }

    /// Makes room for one more frame by giving up on the oldest opener.
    fn reserve_frame(&mut self) {
        if self.stack.len() < self.max_depth.max(1) {
            return;
        }
        log::trace!("inline delimiter stack full, oldest opener becomes text");
        let frame = self.stack.remove(0);

        let next_bracket = self.stack.iter_mut().find_map(|f| match &mut f.opener {
            Some(Opener::Bracket { saved, .. }) => Some(saved),
            _ => None,
        });
        let counts = match next_bracket {
            Some(saved) => saved,
            None => &mut self.open,
        };
        match frame.opener {
            Some(Opener::Emphasis { ch, .. }) => counts[Emphasis::slot(ch)] -= 1,
            Some(Opener::Bracket { saved, .. }) => {
                counts[0] += saved[0];
                counts[1] += saved[1];
            }
            None => {}
        }
        self.root.absorb(frame);
    }
}

use super::kinds::{BlockQuote, CodeFence, FenceSig, Heading, ListMarker, ThematicBreak};

/// Tab stops used when measuring indentation.
pub const TAB_WIDTH: usize = 4;

/// Deepest indentation at which structural markers (headings, fences,
/// breaks) are still recognised.
pub const MAX_MARKER_INDENT: usize = 3;

/// What a single line looks like, decided from the line alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    ThematicBreak,
    ListMarker(ListMarker<'a>),
    Fence(FenceSig<'a>),
    /// Anything else; unrecognised syntax always lands here.
    Text(&'a str),
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineToken<'a> {
    /// 1-based line number.
    pub number: usize,
    /// The line without its terminator.
    pub raw: &'a str,
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: usize,
    /// Indentation of the remainder in columns (tabs expanded).
    pub indent: usize,
    pub kind: LineKind<'a>,
}

/// Lazy line tokenizer over the whole input.
///
/// A clone resumes independently from the same line, so a caller can look
/// ahead and rewind.
///
/// Lines end at LF, CRLF or a lone CR. A final terminator does not start an
/// extra empty line.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    rest: &'a str,
    number: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            number: 0,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self.rest.find(['\n', '\r']).unwrap_or(self.rest.len());
        let (line, after) = self.rest.split_at(end);
        let terminator = if after.starts_with("\r\n") {
            2
        } else {
            after.len().min(1)
        };
        self.rest = &after[terminator..];
        Some(line)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = LineToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.next_line()?;
        self.number += 1;
        Some(classify(self.number, raw))
    }
}

/// Classifies a line into a [`LineToken`].
pub fn classify(number: usize, raw: &str) -> LineToken<'_> {
    let (quote_depth, idx) = BlockQuote::strip_prefixes(raw);
    let remainder = &raw[idx..];
    let text = remainder.trim_start_matches([' ', '\t']);
    let indent = indent_columns(&remainder[..remainder.len() - text.len()]);

    let kind = if text.trim_end().is_empty() {
        LineKind::Blank
    } else if indent <= MAX_MARKER_INDENT {
        classify_marker(text)
    } else {
        ListMarker::parse(text)
            .map(LineKind::ListMarker)
            .unwrap_or(LineKind::Text(text))
    };

    LineToken {
        number,
        raw,
        quote_depth,
        indent,
        kind,
    }
}

fn classify_marker(text: &str) -> LineKind<'_> {
    // Precedence: fence beats everything else, and a break beats a bullet.
    if let Some(sig) = CodeFence::sig(text) {
        return LineKind::Fence(sig);
    }
    if let Some((level, heading)) = Heading::parse(text) {
        return LineKind::Heading {
            level,
            text: heading,
        };
    }
    if ThematicBreak::matches(text) {
        return LineKind::ThematicBreak;
    }
    if let Some(marker) = ListMarker::parse(text) {
        return LineKind::ListMarker(marker);
    }
    LineKind::Text(text)
}

/// Width of leading whitespace in columns.
pub fn indent_columns(ws: &str) -> usize {
    ws.chars().fold(0, |col, c| match c {
        '\t' => col + TAB_WIDTH - col % TAB_WIDTH,
        _ => col + 1,
    })
}

/// Removes up to `columns` columns of leading whitespace.
pub fn strip_indent(line: &str, columns: usize) -> &str {
    let mut col = 0usize;
    for (i, c) in line.char_indices() {
        if col >= columns {
            return &line[i..];
        }
        match c {
            ' ' => col += 1,
            '\t' => col += TAB_WIDTH - col % TAB_WIDTH,
            _ => return &line[i..],
        }
    }
    ""
}

use crate::parsing::inline::cursor::Cursor;

/// Link and image syntax with owned delimiter constants.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    pub const IMAGE_OPEN: &'static str = "![";
    pub const CLOSE: &'static str = "]";
    pub const TAIL_OPEN: u8 = b'(';
    pub const TAIL_CLOSE: u8 = b')';

    /// Nesting limit for balanced parentheses in a bare destination.
    pub const MAX_PAREN_DEPTH: usize = 32;

    /// Removes backslashes that escape ASCII punctuation.
    pub fn unescape(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\\' && chars.peek().is_some_and(char::is_ascii_punctuation) {
                continue;
            }
            out.push(c);
        }
        out
    }
}

/// The `(destination "title")` part following a link's closing bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTail {
    pub dest: String,
    pub title: Option<String>,
    /// Absolute byte offset just past the closing `)`.
    pub end: usize,
}

impl LinkTail {
    /// Parses a tail starting at byte `at` of `text`.
    ///
    /// Returns `None` unless a complete, well-formed tail begins exactly at
    /// `at`; the caller then treats the brackets as literal text.
    pub fn parse(text: &str, at: usize) -> Option<Self> {
        let mut cur = Cursor::new(&text[at..], at);
        if cur.bump()? != Link::TAIL_OPEN {
            return None;
        }
        cur.skip_link_whitespace();

        let dest = match cur.peek()? {
            b'<' => angle_destination(&mut cur)?,
            _ => bare_destination(&mut cur)?,
        };

        let spaced = cur.skip_link_whitespace();
        let title = match cur.peek()? {
            b'"' | b'\'' | b'(' if spaced => {
                let title = title(&mut cur)?;
                cur.skip_link_whitespace();
                Some(title)
            }
            _ => None,
        };

        if cur.bump()? != Link::TAIL_CLOSE {
            return None;
        }

        Some(Self {
            dest: Link::unescape(dest),
            title: title.map(Link::unescape),
            end: cur.pos(),
        })
    }
}

fn angle_destination<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    cur.bump(); // <
    let start = cur.i;
    loop {
        match cur.peek()? {
            b'>' => break,
            b'<' | b'\n' => return None,
            b'\\' => {
                cur.bump_escape();
            }
            _ => {
                cur.bump();
            }
        }
    }
    let dest = cur.slice(start, cur.i);
    cur.bump(); // >
    Some(dest)
}

fn bare_destination<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cur.i;
    let mut depth = 0usize;
    while let Some(b) = cur.peek() {
        match b {
            b'\\' => {
                cur.bump_escape();
            }
            b'(' => {
                depth += 1;
                if depth > Link::MAX_PAREN_DEPTH {
                    return None;
                }
                cur.bump();
            }
            b')' if depth == 0 => break,
            b')' => {
                depth -= 1;
                cur.bump();
            }
            b if b.is_ascii_whitespace() || b.is_ascii_control() => break,
            _ => {
                cur.bump();
            }
        }
    }
    (depth == 0).then(|| cur.slice(start, cur.i))
}

fn title<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let close = match cur.bump()? {
        b'(' => b')',
        quote => quote,
    };
    let start = cur.i;
    let mut last_was_newline = false;
    loop {
        match cur.peek()? {
            b if b == close => break,
            b'(' if close == b')' => return None,
            b'\\' => {
                cur.bump_escape();
                last_was_newline = false;
            }
            b'\n' if last_was_newline => return None,
            b => {
                cur.bump();
                if b != b' ' && b != b'\t' {
                    last_was_newline = b == b'\n';
                }
            }
        }
    }
    let title = cur.slice(start, cur.i);
    cur.bump(); // closing delimiter
    Some(title)
}

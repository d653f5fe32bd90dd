/// A cursor for byte-by-byte scanning with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the enclosing block text (via `base` offset).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Base offset in the block text (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Consumes a backslash escape if one starts here.
    ///
    /// Only ASCII punctuation can be escaped; a backslash before anything
    /// else is consumed alone.
    pub fn bump_escape(&mut self) -> bool {
        if self.peek() != Some(b'\\') {
            return false;
        }
        self.i += 1;
        if self.peek().is_some_and(|b| b.is_ascii_punctuation()) {
            self.i += 1;
        }
        true
    }

    /// Skips spaces and tabs plus at most one line ending.
    ///
    /// Returns true if anything was skipped.
    pub fn skip_link_whitespace(&mut self) -> bool {
        let start = self.i;
        let mut seen_newline = false;
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' => self.i += 1,
                b'\n' if !seen_newline => {
                    seen_newline = true;
                    self.i += 1;
                }
                _ => break,
            }
        }
        self.i > start
    }

    /// Slice of `s` between two local indices.
    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.s[from..to]
    }
}

/// Emphasis delimiters and their flanking rules.
pub struct Emphasis;

impl Emphasis {
    pub const UNDERSCORE: u8 = b'_';

    /// Characters a closer consumes to produce strong emphasis.
    pub const STRONG_LEN: usize = 2;

    /// Slot for per-character bookkeeping (`*` is 0, `_` is 1).
    pub fn slot(ch: u8) -> usize {
        usize::from(ch == Self::UNDERSCORE)
    }
}

/// Whether a delimiter run may open and/or close emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flanking {
    pub can_open: bool,
    pub can_close: bool,
}

impl Flanking {
    /// Classifies the run `text[start..end]` made of `ch`.
    ///
    /// A run opens when followed by non-whitespace and closes when preceded
    /// by non-whitespace. Underscores additionally refuse to open or close
    /// inside a word, so `snake_case_name` stays literal.
    pub fn of(text: &str, start: usize, end: usize, ch: u8) -> Self {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();

        let mut can_open = after.is_some_and(|c| !c.is_whitespace());
        let mut can_close = before.is_some_and(|c| !c.is_whitespace());

        if ch == Emphasis::UNDERSCORE {
            can_open &= !before.is_some_and(char::is_alphanumeric);
            can_close &= !after.is_some_and(char::is_alphanumeric);
        }

        Self {
            can_open,
            can_close,
        }
    }
}

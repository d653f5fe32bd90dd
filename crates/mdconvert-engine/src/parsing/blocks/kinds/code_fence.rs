#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// What a line looks like when it could open or close a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    pub kind: FenceKind,
    /// Number of fence characters in the run (at least 3).
    pub len: usize,
    /// Trimmed text after the run.
    pub info: &'a str,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LEN: usize = 3;

    /// Recognises a fence run at the start of `text` (indentation already removed).
    pub fn sig(text: &str) -> Option<FenceSig<'_>> {
        let t = text.trim_end_matches(['\r', '\n']);
        let (kind, ch) = match t.as_bytes().first().copied()? {
            Self::BACKTICK => (FenceKind::Backticks, Self::BACKTICK),
            Self::TILDE => (FenceKind::Tildes, Self::TILDE),
            _ => return None,
        };
        let len = t.bytes().take_while(|&b| b == ch).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = t[len..].trim();
        // A backtick in the info string would make this an inline code span.
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceSig { kind, len, info })
    }

    /// Language tag: first word of the info string.
    pub fn lang(info: &str) -> Option<String> {
        info.split_whitespace().next().map(str::to_string)
    }

    /// A closing fence uses the same character, is at least as long as the
    /// opener, and carries no info string.
    pub fn closes(open_kind: FenceKind, open_len: usize, sig: Option<FenceSig<'_>>) -> bool {
        match sig {
            Some(s) => s.kind == open_kind && s.len >= open_len && s.info.is_empty(),
            None => false,
        }
    }
}

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// tokenizer code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips every blockquote prefix from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    pub fn strip_prefixes(s: &str) -> (usize, usize) {
        Self::strip_at_most(s, usize::MAX)
    }

    /// Like [`BlockQuote::strip_prefixes`] but stops after `max` prefixes.
    ///
    /// Code fences inside a quote use this so a `>` that belongs to the code
    /// is not eaten as a deeper quote marker.
    pub fn strip_at_most(s: &str, max: usize) -> (usize, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0usize;

        while depth < max {
            let mut j = i;
            while j < b.len() && j - i < 3 && b[j] == b' ' {
                j += 1;
            }
            if j < b.len() && b[j] == (Self::PREFIX as u8) {
                depth += 1;
                i = j + 1;
                if i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }
}

/// ATX heading (`# Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns `(level, text)` when `text` (indentation already removed) is a heading.
    ///
    /// The `#` run must be followed by whitespace or end of line: `#Hello` is
    /// plain text. A trailing `#` run preceded by whitespace is dropped.
    pub fn parse(text: &str) -> Option<(u8, &str)> {
        let hashes = text.bytes().take_while(|&b| b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = &text[hashes..];
        if !(rest.is_empty() || rest.starts_with([' ', '\t'])) {
            return None;
        }
        Some((hashes as u8, Self::strip_closing(rest.trim())))
    }

    fn strip_closing(content: &str) -> &str {
        let without = content.trim_end_matches(Self::MARKER as char);
        if without.is_empty() {
            return without;
        }
        if without.len() != content.len() && without.ends_with([' ', '\t']) {
            without.trim_end()
        } else {
            content
        }
    }
}

/// Thematic break (`---`, `***`, `___`).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_COUNT: usize = 3;

    /// Three or more of one break character, optionally separated by spaces
    /// or tabs, and nothing else.
    pub fn matches(text: &str) -> bool {
        let mut marker = None;
        let mut count = 0usize;
        for c in text.chars() {
            match c {
                ' ' | '\t' => continue,
                c if Self::CHARS.contains(&c) && marker.is_none_or(|m| m == c) => {
                    marker = Some(c);
                    count += 1;
                }
                _ => return false,
            }
        }
        count >= Self::MIN_COUNT
    }
}

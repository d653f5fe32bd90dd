use std::sync::OnceLock;

use regex::Regex;

use crate::document::ListKind;

/// A list item marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'a> {
    pub list: ListKind,
    /// Byte width of the marker plus the whitespace after it.
    pub width: usize,
    /// Item text after the marker.
    pub content: &'a str,
}

impl<'a> ListMarker<'a> {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];

    /// Recognises `- item`, `* item`, `+ item`, `1. item` and `1) item`.
    ///
    /// The marker must be followed by whitespace or end of line.
    pub fn parse(text: &'a str) -> Option<Self> {
        let first = text.chars().next()?;
        if Self::BULLETS.contains(&first) {
            let rest = &text[1..];
            if !(rest.is_empty() || rest.starts_with([' ', '\t'])) {
                return None;
            }
            let content = rest.trim_start_matches([' ', '\t']);
            return Some(Self {
                list: ListKind::Unordered { bullet: first },
                width: text.len() - content.len(),
                content,
            });
        }

        let caps = ordered_marker().captures(text)?;
        let start = caps[1].parse::<u64>().ok()?;
        let delimiter = caps[2].chars().next()?;
        let width = caps[0].len();
        Some(Self {
            list: ListKind::Ordered { start, delimiter },
            width,
            content: &text[width..],
        })
    }
}

fn ordered_marker() -> &'static Regex {
    static ORDERED: OnceLock<Regex> = OnceLock::new();
    ORDERED.get_or_init(|| {
        Regex::new(r"^([0-9]{1,9})([.)])(?:[ \t]+|$)").expect("Invalid ordered list regex")
    })
}

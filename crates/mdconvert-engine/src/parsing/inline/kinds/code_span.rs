use std::collections::HashMap;
use std::ops::Range;

use crate::parsing::inline::lexer::TokenKind;

/// Code span inline type.
///
/// Code spans are raw zones: no other inline parsing occurs inside them,
/// and they take precedence over every other construct.
pub struct CodeSpan;

impl CodeSpan {
    /// For each backtick run, the index of the next run of the same length.
    ///
    /// One right-to-left pass, so the whole table costs O(tokens).
    pub fn closers(tokens: &[(TokenKind, Range<usize>)]) -> Vec<Option<usize>> {
        let mut next_by_len: HashMap<usize, usize> = HashMap::new();
        let mut closers = vec![None; tokens.len()];
        for (i, (kind, span)) in tokens.iter().enumerate().rev() {
            if *kind == TokenKind::Backticks {
                closers[i] = next_by_len.insert(span.len(), i);
            }
        }
        closers
    }

    /// Normalizes raw code span content.
    ///
    /// Line endings become spaces, then one leading and one trailing space
    /// are stripped when both are present and the content isn't all spaces.
    pub fn content(raw: &str) -> String {
        let text = raw.replace("\r\n", " ").replace('\n', " ");
        let b = text.as_bytes();
        if b.len() >= 2 && b[0] == b' ' && b[b.len() - 1] == b' ' && b.iter().any(|&c| c != b' ')
        {
            text[1..text.len() - 1].to_string()
        } else {
            text
        }
    }
}

//! # Inline Lexer
//!
//! Breaks block text into tokens with [Logos]. Tokens are minimal and
//! context-free: the lexer does not know whether `*` opens emphasis or is a
//! literal star, that is the parser's job.
//!
//! Every byte of the input lands in exactly one token, so token spans tile
//! the text and any token boundary is a valid place to resume scanning.
//!
//! [Logos]: https://docs.rs/logos

use std::ops::Range;

use logos::Logos;

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of backticks (code span delimiter).
    #[regex(r"`+")]
    Backticks,

    /// Run of `*` (emphasis delimiter).
    #[regex(r"\*+")]
    Stars,

    /// Run of `_` (emphasis delimiter).
    #[regex(r"_+")]
    Underscores,

    /// `![` opening an image.
    #[token("![")]
    ImageOpen,

    /// `[` opening a link.
    #[token("[")]
    LBracket,

    /// `]` closing link or image text.
    #[token("]")]
    RBracket,

    /// `(`, kept separate so a link destination always ends on a token boundary.
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    /// Backslash followed by ASCII punctuation.
    #[regex(r"\\[!-/:-@\[-`{-~]")]
    Escape,

    /// Two or more spaces, or a backslash, before a line end.
    #[regex(r" {2,}\r?\n")]
    #[regex(r"\\\r?\n")]
    HardBreak,

    #[regex(r"\r?\n")]
    SoftBreak,

    /// Horizontal whitespace (spaces, tabs).
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Plain text - anything not matched by other rules.
    #[regex(r"[^`*_\[\]()\\!\r\n \t]+")]
    Text,
}

/// Lex and return tokens along with their byte spans.
///
/// Characters no rule matches (a lone `!` or `\`) come back as `Text`.
pub fn lex_with_spans(input: &str) -> Vec<(TokenKind, Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Text);
        tokens.push((kind, lexer.span()));
    }

    tokens
}

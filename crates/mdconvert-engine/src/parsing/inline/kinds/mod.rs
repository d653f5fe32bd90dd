//! # Inline Kinds
//!
//! Inline constructs that own their delimiters and local rules. The parser
//! asks these types what a run of characters means; it never hardcodes a
//! backtick, a star or a bracket itself.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Flanking};
pub use link::{Link, LinkTail};

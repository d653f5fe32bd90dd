//! # Inline Parsing
//!
//! Turns the text of a paragraph, heading or list item into [`Inline`]
//! nodes.
//!
//! ## Modules
//!
//! - **`lexer`**: Logos tokens for delimiter runs, brackets, escapes and breaks
//! - **`kinds`**: Inline constructs with owned delimiters (CodeSpan, Emphasis, Link)
//! - **`cursor`**: `Cursor` for byte-level scanning of link destinations and titles
//! - **`parser`**: `parse_inline()`, the delimiter-stack resolver
//!
//! ## Precedence
//!
//! Code spans bind tightest: `` `*not emphasis*` `` is one code span. Link
//! brackets come next, and emphasis delimiters only pair within the same
//! bracket level.
//!
//! [`Inline`]: crate::document::Inline

pub mod cursor;
pub mod kinds;
pub mod lexer;
pub mod parser;

pub use parser::parse_inline;

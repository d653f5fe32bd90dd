//! # Block Parsing
//!
//! Two-phase block parsing over a container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`tokenizer`): Each line becomes a `LineToken`
//!    holding local facts (quote depth, indentation, which marker it starts with)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` keeps the open
//!    quotes, the list stack and the current leaf, and emits `Block`s as
//!    leaves close
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, ListMarker, ...)
//! - **`tokenizer`**: `Tokenizer` lazily classifies lines
//! - **`containers`**: `ContainerPath` for nested blockquotes
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Quote and list nesting is bounded by `Limits::max_nesting_depth`
//! - Every line of input lands in exactly one block, or is blank

pub mod builder;
pub mod containers;
pub mod kinds;
pub mod tokenizer;

pub use builder::BlockBuilder;
pub use containers::ContainerPath;
pub use tokenizer::{LineKind, LineToken, Tokenizer};

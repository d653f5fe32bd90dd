//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a `Document` as a stable indented outline (`Snap`)
//!   for `insta` snapshot testing
//! - **`invariants`**: Structural checks every parse result must pass (heading
//!   levels, list depth steps, merged text, nesting bound)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};

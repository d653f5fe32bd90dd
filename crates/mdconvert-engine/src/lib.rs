pub mod convert;
pub mod document;
pub mod error;
pub mod options;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use convert::{convert, convert_bytes, convert_bytes_with, convert_with};
pub use document::{Block, Document, Inline, ListKind};
pub use error::{ConversionError, LimitExceeded};
pub use options::{ConvertOptions, Limits, RenderOptions};
pub use parsing::parse_document;
pub use render::render_html;

//! # HTML Rendering
//!
//! Turns a [`Document`] into HTML text. Rendering is a pure pre-order walk:
//! blocks in document order, inlines left to right. It never fails; every
//! limit was already enforced while parsing.
//!
//! ## Modules
//!
//! - **`html`**: `HtmlWriter`, which owns the output buffer and rebuilds
//!   nested lists from flat list items
//! - **`url`**: scheme filtering and percent-encoding for `href` and `src`

pub mod html;
pub mod url;

use crate::{document::Document, options::RenderOptions};

use html::HtmlWriter;

/// Renders a document to HTML.
pub fn render_html(doc: &Document, options: &RenderOptions) -> String {
    let mut writer = HtmlWriter::new(options);
    writer.blocks(&doc.blocks);
    writer.finish()
}

pub mod blocks;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

use crate::{document::Document, error::ConversionError, options::Limits};

use blocks::{BlockBuilder, Tokenizer};

/// Parses Markdown text into a [`Document`].
///
/// Fails only when `input` is larger than `limits.max_input_bytes` or nests
/// deeper than `limits.max_nesting_depth`; any other input parses, with
/// unrecognised syntax kept as text.
pub fn parse_document(input: &str, limits: &Limits) -> Result<Document, ConversionError> {
    limits.check_input_len(input.len())?;

    let mut builder = BlockBuilder::new(*limits);
    for token in Tokenizer::new(input) {
        builder.push(&token)?;
    }

    Ok(Document {
        blocks: builder.finish()?,
    })
}

//! # Conversion Entry Points
//!
//! One call runs the whole pipeline: size check, parse, render. Nothing is
//! shared between calls, so concurrent conversions are independent.

use crate::{
    error::ConversionError, options::ConvertOptions, parsing::parse_document, render::render_html,
};

/// Converts Markdown to HTML with default options.
///
/// ```
/// assert_eq!(mdconvert_engine::convert("# Hello").unwrap(), "<h1>Hello</h1>\n");
/// ```
pub fn convert(input: &str) -> Result<String, ConversionError> {
    convert_with(input, &ConvertOptions::default())
}

/// Converts Markdown to HTML with explicit limits and render options.
pub fn convert_with(input: &str, options: &ConvertOptions) -> Result<String, ConversionError> {
    let doc = parse_document(input, &options.limits)?;
    let html = render_html(&doc, &options.render);
    log::debug!(
        "converted {} bytes into {} blocks, {} bytes of html",
        input.len(),
        doc.blocks.len(),
        html.len()
    );
    Ok(html)
}

/// Converts raw bytes, which must be UTF-8, with default options.
pub fn convert_bytes(input: &[u8]) -> Result<String, ConversionError> {
    convert_bytes_with(input, &ConvertOptions::default())
}

/// Converts raw bytes with explicit options.
///
/// The size limit is checked before decoding, so an oversized buffer is
/// rejected without being scanned.
pub fn convert_bytes_with(
    input: &[u8],
    options: &ConvertOptions,
) -> Result<String, ConversionError> {
    options.limits.check_input_len(input.len())?;
    let text = std::str::from_utf8(input)?;
    convert_with(text, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::LimitExceeded, options::Limits};
    use pretty_assertions::assert_eq;

    #[test]
    fn bytes_must_be_utf8() {
        let err = convert_bytes(b"ok \xff bad").unwrap_err();
        assert_eq!(err, ConversionError::InvalidEncoding { valid_up_to: 3 });
    }

    #[test]
    fn size_is_checked_before_encoding() {
        let options = ConvertOptions {
            limits: Limits {
                max_input_bytes: 2,
                ..Limits::default()
            },
            ..ConvertOptions::default()
        };
        let err = convert_bytes_with(b"\xff\xff\xff", &options).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::ResourceExhausted(LimitExceeded::InputTooLarge { len: 3, max: 2 })
        ));
    }

    #[test]
    fn bytes_and_str_agree() {
        let md = "*hi* there";
        assert_eq!(convert_bytes(md.as_bytes()).unwrap(), convert(md).unwrap());
    }
}

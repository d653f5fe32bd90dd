use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, LimitExceeded};

/// Safety bounds applied to every conversion.
///
/// Both bounds guarantee bounded work and memory: oversized input is rejected
/// before parsing starts, and nesting is checked as the tree is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum input length in bytes.
    pub max_input_bytes: usize,
    /// Maximum depth of lists, blockquotes and nested inline spans.
    pub max_nesting_depth: usize,
}

impl Limits {
    pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

    /// Rejects an input of `len` bytes if it is over `max_input_bytes`.
    pub fn check_input_len(&self, len: usize) -> Result<(), ConversionError> {
        if len > self.max_input_bytes {
            log::warn!("input of {len} bytes over limit {}", self.max_input_bytes);
            return Err(ConversionError::ResourceExhausted(
                LimitExceeded::InputTooLarge {
                    len,
                    max: self.max_input_bytes,
                },
            ));
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_bytes: Self::DEFAULT_MAX_INPUT_BYTES,
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Knobs for the HTML renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prefix for the class attribute of fenced code (`language-rust`).
    pub language_class_prefix: String,
    /// Blank out link and image URLs with script-capable schemes.
    pub sanitize_urls: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language_class_prefix: "language-".to_string(),
            sanitize_urls: true,
        }
    }
}

/// Everything a single conversion call needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub limits: Limits,
    pub render: RenderOptions,
}

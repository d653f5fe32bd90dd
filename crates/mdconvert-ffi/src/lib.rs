//! UniFFI bindings for mdconvert
//!
//! Exposes `get_markdown` and a configurable `Converter` to Kotlin and
//! Swift. Every call is independent; nothing is cached between calls.

use mdconvert_config::Config;
use mdconvert_engine::{ConversionError, ConvertOptions, Limits};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid encoding: {reason}")]
    InvalidEncoding { reason: String },

    #[error("Resource exhausted: {reason}")]
    ResourceExhausted { reason: String },

    #[error("Config error: {reason}")]
    Config { reason: String },
}

impl From<ConversionError> for FfiError {
    fn from(e: ConversionError) -> Self {
        let reason = e.to_string();
        match e {
            ConversionError::InvalidEncoding { .. } => FfiError::InvalidEncoding { reason },
            ConversionError::ResourceExhausted(_) => FfiError::ResourceExhausted { reason },
        }
    }
}

// ============ Standalone Functions ============

/// Convert Markdown text to HTML with default settings.
#[uniffi::export]
pub fn get_markdown(input: String) -> Result<String, FfiError> {
    Ok(mdconvert_engine::convert(&input)?)
}

/// Convert raw bytes to HTML. Fails with `InvalidEncoding` unless the
/// bytes are UTF-8.
#[uniffi::export]
pub fn get_markdown_bytes(input: Vec<u8>) -> Result<String, FfiError> {
    Ok(mdconvert_engine::convert_bytes(&input)?)
}

// ============ Converter ============

/// Resource bounds as seen from the host language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct LimitsDto {
    pub max_input_bytes: u64,
    pub max_nesting_depth: u32,
}

impl LimitsDto {
    fn from_engine(limits: Limits) -> Self {
        Self {
            max_input_bytes: u64::try_from(limits.max_input_bytes).unwrap_or(u64::MAX),
            max_nesting_depth: u32::try_from(limits.max_nesting_depth).unwrap_or(u32::MAX),
        }
    }

    fn to_engine(self) -> Limits {
        Limits {
            max_input_bytes: usize::try_from(self.max_input_bytes).unwrap_or(usize::MAX),
            max_nesting_depth: usize::try_from(self.max_nesting_depth).unwrap_or(usize::MAX),
        }
    }
}

/// A converter with fixed settings, for hosts that configure once and
/// convert many times.
#[derive(uniffi::Object)]
pub struct Converter {
    options: ConvertOptions,
}

#[uniffi::export]
impl Converter {
    /// Create a converter with default limits and render options.
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Create a converter with custom limits and default render options.
    #[uniffi::constructor]
    pub fn with_limits(limits: LimitsDto) -> Self {
        Self {
            options: ConvertOptions {
                limits: limits.to_engine(),
                ..ConvertOptions::default()
            },
        }
    }

    /// Create a converter from a TOML config file. A missing file means defaults.
    #[uniffi::constructor]
    pub fn from_config_file(path: String) -> Result<Self, FfiError> {
        let config = Config::load_from_path(&path)
            .map_err(|e| FfiError::Config {
                reason: e.to_string(),
            })?
            .unwrap_or_default();
        log::debug!("converter configured from {path}");
        Ok(Self {
            options: config.convert_options(),
        })
    }

    pub fn convert(&self, input: String) -> Result<String, FfiError> {
        Ok(mdconvert_engine::convert_with(&input, &self.options)?)
    }

    pub fn convert_bytes(&self, input: Vec<u8>) -> Result<String, FfiError> {
        Ok(mdconvert_engine::convert_bytes_with(&input, &self.options)?)
    }

    pub fn limits(&self) -> LimitsDto {
        LimitsDto::from_engine(self.options.limits)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

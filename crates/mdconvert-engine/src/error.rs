/// Which safety bound rejected an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitExceeded {
    /// Input is longer than `Limits::max_input_bytes`.
    InputTooLarge { len: usize, max: usize },
    /// List, blockquote or inline nesting went past `Limits::max_nesting_depth`.
    NestingTooDeep { max: usize },
}

impl std::fmt::Display for LimitExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitExceeded::InputTooLarge { len, max } => {
                write!(f, "input is {len} bytes, maximum is {max}")
            }
            LimitExceeded::NestingTooDeep { max } => {
                write!(f, "nesting deeper than {max} levels")
            }
        }
    }
}

/// Errors returned by a conversion.
///
/// Malformed Markdown is never an error: unresolvable syntax degrades to
/// literal text. Only encoding problems and resource bounds fail a call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding { valid_up_to: usize },

    #[error("Resource limit exceeded: {0}")]
    ResourceExhausted(LimitExceeded),
}

impl From<std::str::Utf8Error> for ConversionError {
    fn from(e: std::str::Utf8Error) -> Self {
        ConversionError::InvalidEncoding {
            valid_up_to: e.valid_up_to(),
        }
    }
}

impl ConversionError {
    pub(crate) fn nesting(max: usize) -> Self {
        ConversionError::ResourceExhausted(LimitExceeded::NestingTooDeep { max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_error_keeps_offset() {
        let bytes = [b'o', b'k', 0xff, b'x'];
        let err = std::str::from_utf8(&bytes).unwrap_err();
        assert_eq!(
            ConversionError::from(err),
            ConversionError::InvalidEncoding { valid_up_to: 2 }
        );
    }

    #[test]
    fn limit_messages_are_readable() {
        let err = ConversionError::ResourceExhausted(LimitExceeded::InputTooLarge {
            len: 10,
            max: 5,
        });
        assert_eq!(
            err.to_string(),
            "Resource limit exceeded: input is 10 bytes, maximum is 5"
        );
        assert_eq!(
            ConversionError::nesting(64).to_string(),
            "Resource limit exceeded: nesting deeper than 64 levels"
        );
    }
}

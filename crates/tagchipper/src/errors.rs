//! # Error Types

/// Errors from tagchipper operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagchipperError {
    /// Input exceeds the caller-imposed maximum length.
    #[error("input length ({len} bytes) exceeds the configured maximum ({max} bytes)")]
    InputTooLong {
        /// The length of the rejected input, in bytes.
        len: usize,

        /// The configured maximum, in bytes.
        max: usize,
    },

    /// Input contains a character from the invalid-control class.
    #[error("invalid character {ch:?} at code point offset {offset}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,

        /// The code point offset of the character.
        offset: usize,
    },

    /// A pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// A character class name that names no table.
    #[error("unknown character class: {0}")]
    UnknownCharClass(String),
}

impl From<regex::Error> for TagchipperError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}

/// Result type for tagchipper operations.
pub type TCResult<T> = core::result::Result<T, TagchipperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TagchipperError::InputTooLong { len: 12, max: 10 }.to_string(),
            "input length (12 bytes) exceeds the configured maximum (10 bytes)"
        );
        assert_eq!(
            TagchipperError::InvalidCharacter { ch: 'x', offset: 3 }.to_string(),
            "invalid character 'x' at code point offset 3"
        );
    }

    #[test]
    fn test_regex_error_conversion() {
        let err: TagchipperError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, TagchipperError::Pattern(_)));
    }
}

//! Error types for PHP unserialization.
//!
//! Serialization of a well-formed [`Value`](crate::Value) tree cannot fail, so
//! every error here comes from the parser. Errors carry the byte offset where
//! parsing stopped plus optional context to help debug malformed input.

use std::fmt;
use thiserror::Error;

/// The main error type for PHP unserialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct PhpSerializeError {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The byte offset where the error occurred.
    pub position: usize,
    /// Optional context about what was being parsed.
    pub context: Option<String>,
    /// Preview of input around error position for debugging.
    pub input_preview: Option<String>,
}

impl fmt::Display for PhpSerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)?;
        if let Some(ref ctx) = self.context {
            write!(f, " ({})", ctx)?;
        }
        if let Some(ref preview) = self.input_preview {
            write!(f, "\n{}", preview)?;
        }
        Ok(())
    }
}

/// Specific kinds of unserialization errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tag at a value boundary is not a known type.
    #[error("unknown type tag '{0}'")]
    UnknownType(char),

    /// A value in array-key position is neither a string nor an integer.
    #[error("invalid array key: expected string or integer, found {found}")]
    InvalidKey {
        /// Type name of the offending value.
        found: &'static str,
    },

    /// A value in object-field-name position is not a string.
    #[error("invalid object field name: expected string, found {found}")]
    InvalidFieldName {
        /// Type name of the offending value.
        found: &'static str,
    },

    /// A length, count, integer or double body failed to parse.
    #[error("malformed number: {0:?}")]
    MalformedNumeric(String),

    /// Input ended before a required token.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Expected a specific character but found something else.
    #[error("expected '{expected}', found '{found}'")]
    UnexpectedChar {
        /// The character that was expected.
        expected: char,
        /// The character that was found.
        found: char,
    },

    /// A declared byte length does not line up with the content.
    #[error("length mismatch: declared {expected} bytes, found {found}")]
    LengthMismatch {
        /// The declared length in bytes.
        expected: usize,
        /// The number of bytes actually consumed.
        found: usize,
    },

    /// Nesting depth exceeded the configured limit.
    #[error("maximum nesting depth ({0}) exceeded")]
    MaxDepthExceeded(usize),

    /// Input continues after the top-level value.
    #[error("trailing data after value")]
    TrailingData,

    /// Any other failure, with the message of its cause.
    #[error("uncaught unserialize error: {0}")]
    Uncaught(String),
}

impl PhpSerializeError {
    /// Create a new error with the given kind and position.
    #[inline]
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self {
            kind,
            position,
            context: None,
            input_preview: None,
        }
    }

    /// Wrap an unclassified failure, keeping its message.
    #[cold]
    pub fn uncaught(cause: impl fmt::Display, position: usize) -> Self {
        Self::new(ErrorKind::Uncaught(cause.to_string()), position)
    }

    /// Add context to the error.
    #[inline]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Move the position by `offset` bytes, for errors raised while parsing a
    /// slice embedded in a larger input.
    #[inline]
    pub fn shifted(mut self, offset: usize) -> Self {
        self.position += offset;
        self
    }

    /// Add input preview around the error position for debugging.
    ///
    /// Shows up to 20 bytes before and after the error position.
    #[cold]
    pub fn with_input_preview(mut self, data: &[u8], error_pos: usize) -> Self {
        let start = error_pos.saturating_sub(20);
        let end = (error_pos + 20).min(data.len());

        if start < end {
            let slice = &data[start..end];
            // The window may cut a multi-byte character in half
            let preview = String::from_utf8_lossy(slice);

            let relative_pos = error_pos.saturating_sub(start);
            let mut result = String::with_capacity(preview.len() + relative_pos + 2);
            result.push_str(&preview);
            result.push('\n');
            result.push_str(&" ".repeat(relative_pos));
            result.push('^');

            self.input_preview = Some(result);
        }
        self
    }
}

/// Result type alias for PHP unserialization.
pub type Result<T> = std::result::Result<T, PhpSerializeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_context() {
        let err = PhpSerializeError::new(ErrorKind::UnknownType('x'), 0)
            .with_context("top-level value");
        assert_eq!(
            err.to_string(),
            "unknown type tag 'x' at position 0 (top-level value)"
        );
    }

    #[test]
    fn test_input_preview_marks_position() {
        let err = PhpSerializeError::new(ErrorKind::UnexpectedEof, 4)
            .with_input_preview(b"i:42", 4);
        assert_eq!(err.input_preview.as_deref(), Some("i:42\n    ^"));

        let err = PhpSerializeError::new(ErrorKind::UnexpectedEof, 0).with_input_preview(b"", 0);
        assert_eq!(err.input_preview, None);

        let err = PhpSerializeError::new(ErrorKind::MalformedNumeric("4x".into()), 2)
            .with_input_preview(b"i:4x;", 2);
        assert_eq!(err.input_preview.as_deref(), Some("i:4x;\n  ^"));
    }

    #[test]
    fn test_uncaught_keeps_cause() {
        let cause = "abc".parse::<i64>().unwrap_err();
        let err = PhpSerializeError::uncaught(&cause, 3);
        assert_eq!(err.kind, ErrorKind::Uncaught(cause.to_string()));
        assert!(err.to_string().starts_with("uncaught unserialize error"));
    }
}

//! Forward-only reader over serialized text.
//!
//! The cursor walks the input one code point at a time but can also consume a
//! run of code points measured in *encoded bytes*, which is what the `s:` and
//! `C:` length prefixes count.

use memchr::memchr;

use crate::encoding::TextEncoding;
use crate::error::{ErrorKind, PhpSerializeError, Result};

/// A forward-only cursor over a `&str`.
///
/// Positions are byte offsets into the underlying UTF-8 text and always sit on
/// a character boundary.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    encoding: TextEncoding,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `text`.
    pub fn new(text: &'a str, encoding: TextEncoding) -> Self {
        Self {
            text,
            pos: 0,
            encoding,
        }
    }

    /// The full text this cursor reads from.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The encoding used by [`take_bytes`](Self::take_bytes).
    #[inline]
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Whether every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// The unread part of the text.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Peek at the next character without consuming it.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Read and consume the next character.
    #[inline]
    pub fn next_char(&mut self) -> Result<char> {
        let c = self
            .peek_char()
            .ok_or_else(|| PhpSerializeError::new(ErrorKind::UnexpectedEof, self.pos))?;
        self.pos += c.len_utf8();
        Ok(c)
    }

    /// Consume `expected`, failing if the next character is anything else.
    #[inline]
    pub fn expect(&mut self, expected: char) -> Result<()> {
        let start = self.pos;
        let found = self.next_char()?;
        if found != expected {
            return Err(self.make_unexpected_char_error(expected, found, start));
        }
        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn make_unexpected_char_error(&self, expected: char, found: char, at: usize) -> PhpSerializeError {
        PhpSerializeError::new(ErrorKind::UnexpectedChar { expected, found }, at)
    }

    /// Read up to (not including) the ASCII `delimiter`.
    ///
    /// The delimiter itself stays unread. Running out of input first is an
    /// [`ErrorKind::UnexpectedEof`].
    #[inline]
    pub fn read_until(&mut self, delimiter: u8) -> Result<&'a str> {
        debug_assert!(delimiter.is_ascii());
        let start = self.pos;
        let offset = memchr(delimiter, &self.text.as_bytes()[start..]).ok_or_else(|| {
            PhpSerializeError::new(ErrorKind::UnexpectedEof, self.text.len())
                .with_context(format!("looking for '{}'", delimiter as char))
        })?;
        let end = start + offset;
        let slice = self
            .text
            .get(start..end)
            .ok_or_else(|| PhpSerializeError::uncaught("cursor left a character boundary", start))?;
        self.pos = end;
        Ok(slice)
    }

    /// Consume whole characters until their encoded size reaches `len` bytes.
    ///
    /// A length that ends inside a multi-byte character is an
    /// [`ErrorKind::LengthMismatch`]; input that ends first is an
    /// [`ErrorKind::UnexpectedEof`].
    pub fn take_bytes(&mut self, len: usize) -> Result<&'a str> {
        let start = self.pos;
        let rest = self.remaining();

        let end = match self.encoding {
            TextEncoding::Utf8 => {
                if len > rest.len() {
                    return Err(PhpSerializeError::new(ErrorKind::UnexpectedEof, self.text.len())
                        .with_context(format!("string of {} bytes", len)));
                }
                if !rest.is_char_boundary(len) {
                    let found = (len..=rest.len())
                        .find(|&i| rest.is_char_boundary(i))
                        .unwrap_or(rest.len());
                    return Err(PhpSerializeError::new(
                        ErrorKind::LengthMismatch {
                            expected: len,
                            found,
                        },
                        start,
                    ));
                }
                len
            }
            encoding => {
                let mut consumed = 0;
                let mut end = 0;
                let mut chars = rest.chars();
                while consumed < len {
                    let c = chars.next().ok_or_else(|| {
                        PhpSerializeError::new(ErrorKind::UnexpectedEof, self.text.len())
                            .with_context(format!("string of {} bytes", len))
                    })?;
                    consumed += encoding.encoded_len(c);
                    end += c.len_utf8();
                }
                if consumed != len {
                    return Err(PhpSerializeError::new(
                        ErrorKind::LengthMismatch {
                            expected: len,
                            found: consumed,
                        },
                        start,
                    ));
                }
                end
            }
        };

        self.pos = start + end;
        Ok(&rest[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_until_leaves_delimiter() {
        let mut cursor = Cursor::new("12:rest", TextEncoding::Utf8);
        assert_eq!(cursor.read_until(b':').unwrap(), "12");
        assert_eq!(cursor.peek_char(), Some(':'));
        cursor.expect(':').unwrap();
        assert_eq!(cursor.remaining(), "rest");
    }

    #[test]
    fn test_read_until_missing_delimiter() {
        let mut cursor = Cursor::new("12345", TextEncoding::Utf8);
        let err = cursor.read_until(b';').unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedEof);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_expect_mismatch() {
        let mut cursor = Cursor::new("x", TextEncoding::Utf8);
        let err = cursor.expect(';').unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::UnexpectedChar {
                expected: ';',
                found: 'x'
            }
        );
        assert!(cursor.is_at_end());
        assert_eq!(cursor.next_char().unwrap_err().kind, ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_take_bytes_utf8() {
        let mut cursor = Cursor::new("こんにちは🎅\";", TextEncoding::Utf8);
        assert_eq!(cursor.take_bytes(19).unwrap(), "こんにちは🎅");
        assert_eq!(cursor.remaining(), "\";");
    }

    #[test]
    fn test_take_bytes_inside_character() {
        let mut cursor = Cursor::new("한글", TextEncoding::Utf8);
        let err = cursor.take_bytes(4).unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::LengthMismatch {
                expected: 4,
                found: 6
            }
        );
    }

    #[test]
    fn test_take_bytes_utf16_counts_pairs_once() {
        let mut cursor = Cursor::new("a🎅b", TextEncoding::Utf16Le);
        assert_eq!(cursor.take_bytes(6).unwrap(), "a🎅");
        assert_eq!(cursor.remaining(), "b");

        let mut cursor = Cursor::new("a🎅b", TextEncoding::Utf16Le);
        assert!(matches!(
            cursor.take_bytes(4).unwrap_err().kind,
            ErrorKind::LengthMismatch { expected: 4, found: 6 }
        ));
    }

    #[test]
    fn test_take_bytes_latin1() {
        let mut cursor = Cursor::new("café!", TextEncoding::Latin1);
        assert_eq!(cursor.take_bytes(4).unwrap(), "café");
    }

    #[test]
    fn test_take_bytes_truncated() {
        let mut cursor = Cursor::new("abc", TextEncoding::Utf8);
        assert_eq!(cursor.take_bytes(10).unwrap_err().kind, ErrorKind::UnexpectedEof);

        let mut cursor = Cursor::new("abc", TextEncoding::Ascii);
        assert_eq!(cursor.take_bytes(10).unwrap_err().kind, ErrorKind::UnexpectedEof);
    }
}

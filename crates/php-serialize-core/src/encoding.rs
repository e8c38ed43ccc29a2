//! Text encodings used for byte-length accounting.
//!
//! PHP's `serialize()` prefixes every string with its length in *bytes*, so the
//! codec has to know which encoding the producer used. Text in Rust is always
//! UTF-8 in memory; a [`TextEncoding`] only decides how many bytes each code
//! point would occupy on the PHP side.

use std::fmt;

/// The encoding in which declared string lengths are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// UTF-8 (1 to 4 bytes per code point).
    #[default]
    Utf8,
    /// UTF-16, little endian (2 bytes, or 4 for a surrogate pair).
    Utf16Le,
    /// UTF-16, big endian (2 bytes, or 4 for a surrogate pair).
    Utf16Be,
    /// ISO-8859-1. Unmappable characters are written as a single `?`.
    Latin1,
    /// US-ASCII. Unmappable characters are written as a single `?`.
    Ascii,
}

impl TextEncoding {
    /// Number of bytes `c` occupies in this encoding.
    ///
    /// A `char` is a full Unicode scalar value, so characters outside the
    /// Basic Multilingual Plane count as one surrogate pair in UTF-16.
    #[inline]
    pub fn encoded_len(self, c: char) -> usize {
        match self {
            TextEncoding::Utf8 => c.len_utf8(),
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => c.len_utf16() * 2,
            TextEncoding::Latin1 | TextEncoding::Ascii => 1,
        }
    }

    /// Number of bytes `text` occupies in this encoding.
    pub fn byte_len(self, text: &str) -> usize {
        match self {
            TextEncoding::Utf8 => text.len(),
            TextEncoding::Latin1 | TextEncoding::Ascii => text.chars().count(),
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
                text.chars().map(|c| self.encoded_len(c)).sum()
            }
        }
    }

    /// Look up an encoding by a case-insensitive label such as `"utf-8"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Some(TextEncoding::Utf8),
            "utf-16le" | "utf16le" | "utf-16" | "utf16" => Some(TextEncoding::Utf16Le),
            "utf-16be" | "utf16be" => Some(TextEncoding::Utf16Be),
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" => Some(TextEncoding::Latin1),
            "ascii" | "us-ascii" => Some(TextEncoding::Ascii),
            _ => None,
        }
    }

    /// Canonical label of the encoding.
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
            TextEncoding::Latin1 => "iso-8859-1",
            TextEncoding::Ascii => "us-ascii",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

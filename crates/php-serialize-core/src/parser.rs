//! PHP unserialize parser.
//!
//! A single-pass recursive descent parser over a [`Cursor`]. Every value is
//! introduced by a one-character tag; string and `Serializable` payloads are
//! measured in encoded bytes of the configured [`TextEncoding`].
//!
//! # Tracing Support
//!
//! Enable the `tracing` feature for parsing instrumentation:
//!
//! ```toml
//! php-serialize-core = { version = "0.1", features = ["tracing"] }
//! ```

#[cfg(feature = "tracing")]
use tracing::{debug, instrument, trace, warn};

use crate::cursor::Cursor;
use crate::encoding::TextEncoding;
use crate::error::{ErrorKind, PhpSerializeError, Result};
use crate::types::{ArrayKey, PhpArray, PhpObject, Serializable, Value};

/// Cap on entries reserved up front from an untrusted count.
const MAX_PREALLOC: usize = 1024;

/// Parser configuration options.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Encoding in which string and payload lengths are declared.
    pub encoding: TextEncoding,
    /// Maximum nesting depth for arrays, objects and `Serializable` payloads.
    ///
    /// `None` (the default) imposes no limit; callers handling untrusted,
    /// deeply nested input should set one.
    pub max_depth: Option<usize>,
    /// Whether text after the top-level value is ignored.
    ///
    /// When `true` (the default) trailing characters are never read. When
    /// `false` they fail the parse with [`ErrorKind::TrailingData`].
    pub allow_trailing: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            max_depth: None,
            allow_trailing: true,
        }
    }
}

impl ParserConfig {
    /// Default configuration with a different encoding.
    pub fn with_encoding(encoding: TextEncoding) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }
}

/// Type tags of the serialize format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
    Serializable,
}

impl Tag {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Tag::Null),
            'b' => Some(Tag::Bool),
            'i' => Some(Tag::Int),
            'd' => Some(Tag::Double),
            's' => Some(Tag::String),
            'a' => Some(Tag::Array),
            'O' => Some(Tag::Object),
            'C' => Some(Tag::Serializable),
            _ => None,
        }
    }
}

/// A PHP unserialize parser.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: ParserConfig,
    /// Current nesting depth.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default configuration.
    pub fn new(text: &'a str) -> Self {
        Self::with_config(text, ParserConfig::default())
    }

    /// Create a new parser with custom configuration.
    pub fn with_config(text: &'a str, config: ParserConfig) -> Self {
        Self {
            cursor: Cursor::new(text, config.encoding),
            config,
            depth: 0,
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse one complete value.
    ///
    /// This is the error boundary of the parser: any failure below it discards
    /// the whole tree and comes back with an input preview attached.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(text_len = self.cursor.text().len())))]
    pub fn parse(&mut self) -> Result<Value> {
        #[cfg(feature = "tracing")]
        debug!(encoding = %self.config.encoding, "Starting PHP unserialize");

        let result = self.parse_value().and_then(|value| {
            if !self.config.allow_trailing && !self.cursor.is_at_end() {
                return Err(PhpSerializeError::new(
                    ErrorKind::TrailingData,
                    self.cursor.position(),
                ));
            }
            Ok(value)
        });

        let text = self.cursor.text().as_bytes();
        let result = result.map_err(|e| {
            if e.input_preview.is_some() {
                return e;
            }
            let pos = e.position;
            e.with_input_preview(text, pos)
        });

        #[cfg(feature = "tracing")]
        match &result {
            Ok(value) => debug!(value_type = value.type_name(), "Parse completed successfully"),
            Err(e) => warn!(error = %e, "Parse failed"),
        }

        result
    }

    /// Parse a single value at the current position.
    #[cfg_attr(feature = "tracing", instrument(skip(self), level = "trace", fields(pos = self.cursor.position(), depth = self.depth)))]
    fn parse_value(&mut self) -> Result<Value> {
        if let Some(max_depth) = self.config.max_depth {
            if self.depth > max_depth {
                #[cfg(feature = "tracing")]
                warn!(depth = self.depth, max_depth, "Max depth exceeded");
                return Err(PhpSerializeError::new(
                    ErrorKind::MaxDepthExceeded(max_depth),
                    self.cursor.position(),
                ));
            }
        }

        let start = self.cursor.position();
        let tag_char = self.cursor.next_char()?;

        #[cfg(feature = "tracing")]
        trace!(tag = %tag_char, pos = start, "Parsing value");

        let Some(tag) = Tag::from_char(tag_char) else {
            #[cfg(feature = "tracing")]
            warn!(tag = %tag_char, pos = start, "Unknown type tag");
            return Err(PhpSerializeError::new(ErrorKind::UnknownType(tag_char), start));
        };

        if tag == Tag::Null {
            self.cursor.expect(';')?;
            return Ok(Value::Null);
        }
        self.cursor.expect(':')?;

        match tag {
            Tag::Null => Ok(Value::Null),
            Tag::Bool => self.parse_bool(),
            Tag::Int => self.parse_int(),
            Tag::Double => self.parse_double(),
            Tag::String => self.parse_string().map(Value::String),
            Tag::Array => self.nested(Self::parse_array),
            Tag::Object => self.nested(Self::parse_object),
            Tag::Serializable => self.nested(Self::parse_serializable),
        }
    }

    /// Run `parse` one nesting level deeper.
    fn nested(&mut self, parse: fn(&mut Self) -> Result<Value>) -> Result<Value> {
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Body of `b:<0|1>;`. Only `1` is true.
    fn parse_bool(&mut self) -> Result<Value> {
        let body = self.cursor.read_until(b';')?;
        self.cursor.expect(';')?;
        Ok(Value::Bool(body == "1"))
    }

    /// Body of `i:<value>;`.
    fn parse_int(&mut self) -> Result<Value> {
        let start = self.cursor.position();
        let body = self.cursor.read_until(b';')?;
        // `str::parse` handles i64::MIN directly, no negation of a positive parse
        let value: i64 = body.parse().map_err(|_| {
            PhpSerializeError::new(ErrorKind::MalformedNumeric(body.to_string()), start)
        })?;
        self.cursor.expect(';')?;
        Ok(Value::Int(value))
    }

    /// Body of `d:<value>;`, including `INF`, `-INF` and `NAN`.
    fn parse_double(&mut self) -> Result<Value> {
        let start = self.cursor.position();
        let body = self.cursor.read_until(b';')?;
        let value = match body {
            "INF" | "+INF" => f64::INFINITY,
            "-INF" => f64::NEG_INFINITY,
            nan if nan.eq_ignore_ascii_case("nan") => f64::NAN,
            _ => body.parse().map_err(|_| {
                PhpSerializeError::new(ErrorKind::MalformedNumeric(body.to_string()), start)
            })?,
        };
        self.cursor.expect(';')?;
        Ok(Value::Double(value))
    }

    /// Body of `s:<len>:"<text>";`.
    fn parse_string(&mut self) -> Result<String> {
        let text = self.parse_quoted()?;
        self.cursor.expect(';')?;
        Ok(text)
    }

    /// `<len>:"<text>"`, shared by strings and class names.
    fn parse_quoted(&mut self) -> Result<String> {
        let len = self.read_length()?;
        self.cursor.expect('"')?;
        let text = match self.cursor.take_bytes(len) {
            Ok(text) => text,
            Err(e) => {
                #[cfg(feature = "tracing")]
                warn!(declared_len = len, error = %e.kind, "String length does not match content");
                return Err(e);
            }
        };
        self.cursor.expect('"')?;
        Ok(text.to_owned())
    }

    /// Body of `a:<count>:{<key><value>...}`.
    fn parse_array(&mut self) -> Result<Value> {
        let count = self.read_length()?;
        self.cursor.expect('{')?;

        let mut array = PhpArray::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            let key_start = self.cursor.position();
            let key = ArrayKey::try_from(self.parse_value()?).map_err(|rejected| {
                PhpSerializeError::new(
                    ErrorKind::InvalidKey {
                        found: rejected.type_name(),
                    },
                    key_start,
                )
            })?;
            let value = self.parse_value()?;
            array.insert(key, value);
        }

        self.cursor.expect('}')?;
        Ok(Value::Array(array))
    }

    /// Body of `O:<len>:"<class>":<count>:{<name><value>...}`.
    fn parse_object(&mut self) -> Result<Value> {
        let class_name = self.parse_quoted()?;
        self.cursor.expect(':')?;
        let count = self.read_length()?;
        self.cursor.expect('{')?;

        let mut object = PhpObject::new(class_name);
        for _ in 0..count {
            let name_start = self.cursor.position();
            let name = match self.parse_value()? {
                Value::String(name) => name,
                other => {
                    return Err(PhpSerializeError::new(
                        ErrorKind::InvalidFieldName {
                            found: other.type_name(),
                        },
                        name_start,
                    ))
                }
            };
            let value = self.parse_value()?;
            object.insert(name, value);
        }

        self.cursor.expect('}')?;
        Ok(Value::Object(object))
    }

    /// Body of `C:<len>:"<class>":<len>:{<payload>}`.
    ///
    /// The payload is parsed as a standalone value and must contain exactly one.
    fn parse_serializable(&mut self) -> Result<Value> {
        let class_name = self.parse_quoted()?;
        self.cursor.expect(':')?;
        let payload_len = self.read_length()?;
        self.cursor.expect('{')?;

        let payload_start = self.cursor.position();
        let payload = self.cursor.take_bytes(payload_len)?;

        let mut inner = Parser {
            cursor: Cursor::new(payload, self.config.encoding),
            config: self.config.clone(),
            depth: self.depth,
        };
        let value = inner.parse_value().map_err(|e| {
            e.shifted(payload_start)
                .with_context(format!("in payload of {}", class_name))
        })?;
        if !inner.cursor.is_at_end() {
            let consumed = &payload[..inner.cursor.position()];
            return Err(PhpSerializeError::new(
                ErrorKind::LengthMismatch {
                    expected: payload_len,
                    found: self.config.encoding.byte_len(consumed),
                },
                payload_start,
            )
            .with_context(format!("payload of {} holds more than one value", class_name)));
        }

        self.cursor.expect('}')?;
        Ok(Value::Serializable(Serializable::new(class_name, value)))
    }

    /// A decimal length or count followed by its `:` separator.
    fn read_length(&mut self) -> Result<usize> {
        let start = self.cursor.position();
        let digits = self.cursor.read_until(b':')?;
        let len = digits.parse().map_err(|_| {
            PhpSerializeError::new(ErrorKind::MalformedNumeric(digits.to_string()), start)
        })?;
        self.cursor.expect(':')?;
        Ok(len)
    }
}

/// Whether `text` starts with a known type tag.
///
/// This is a quick check that doesn't validate the rest of the input.
pub fn is_serialized(text: &str) -> bool {
    text.chars().next().and_then(Tag::from_char).is_some()
}

/// Parse PHP serialized text with UTF-8 lengths.
///
/// # Example
///
/// ```rust
/// use php_serialize_core::from_str;
///
/// let value = from_str("i:42;").unwrap();
/// assert_eq!(value.as_int(), Some(42));
/// ```
#[inline]
pub fn from_str(text: &str) -> Result<Value> {
    #[cfg(feature = "tracing")]
    trace!(text_len = text.len(), "from_str called");

    Parser::new(text).parse()
}

/// Parse PHP serialized text whose lengths are declared in `encoding`.
///
/// # Example
///
/// ```rust
/// use php_serialize_core::{deserialize, TextEncoding};
///
/// // "é" is one byte in ISO-8859-1
/// let value = deserialize("s:4:\"café\";", TextEncoding::Latin1).unwrap();
/// assert_eq!(value.as_str(), Some("café"));
/// ```
#[inline]
pub fn deserialize(text: &str, encoding: TextEncoding) -> Result<Value> {
    from_str_with_config(text, ParserConfig::with_encoding(encoding))
}

/// Parse PHP serialized text with custom configuration.
///
/// # Example
///
/// ```rust
/// use php_serialize_core::{from_str_with_config, ParserConfig, TextEncoding};
///
/// let config = ParserConfig {
///     encoding: TextEncoding::Utf8,
///     max_depth: Some(64),
///     allow_trailing: false,
/// };
/// let value = from_str_with_config("b:1;", config).unwrap();
/// assert_eq!(value.as_bool(), Some(true));
/// ```
#[inline]
pub fn from_str_with_config(text: &str, config: ParserConfig) -> Result<Value> {
    #[cfg(feature = "tracing")]
    trace!(text_len = text.len(), ?config, "from_str_with_config called");

    Parser::with_config(text, config).parse()
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;

    #[test]
    fn test_null() {
        assert_eq!(from_str("N;").unwrap(), Value::Null);
    }

    #[test]
    fn test_bool() {
        assert_eq!(from_str("b:0;").unwrap(), Value::FALSE);
        assert_eq!(from_str("b:1;").unwrap(), Value::TRUE);
        // Anything but "1" is false
        assert_eq!(from_str("b:2;").unwrap(), Value::FALSE);
    }

    #[test]
    fn test_int() {
        assert_eq!(from_str("i:0;").unwrap(), Value::Int(0));
        assert_eq!(from_str("i:-123;").unwrap(), Value::Int(-123));
        assert_eq!(
            from_str("i:9223372036854775807;").unwrap(),
            Value::Int(i64::MAX)
        );
        assert_eq!(
            from_str("i:-9223372036854775808;").unwrap(),
            Value::Int(i64::MIN)
        );
    }

    #[test]
    fn test_double() {
        assert_eq!(from_str("d:0;").unwrap(), Value::Double(0.0));
        assert_eq!(from_str("d:685230.15;").unwrap(), Value::Double(685230.15));
        assert_eq!(from_str("d:-421000000;").unwrap(), Value::Double(-421000000.0));
        assert_eq!(from_str("d:1.0E+25;").unwrap(), Value::Double(1.0e25));
    }

    #[test]
    fn test_double_special_values() {
        assert!(matches!(from_str("d:INF;").unwrap(), Value::Double(f) if f.is_infinite() && f.is_sign_positive()));
        assert!(matches!(from_str("d:-INF;").unwrap(), Value::Double(f) if f.is_infinite() && f.is_sign_negative()));
        for nan in ["NAN", "NaN", "nan"] {
            let text = format!("d:{};", nan);
            assert!(matches!(from_str(&text).unwrap(), Value::Double(f) if f.is_nan()));
        }
    }

    #[test]
    fn test_string() {
        assert_eq!(from_str("s:0:\"\";").unwrap(), Value::from(""));
        assert_eq!(from_str("s:5:\"apple\";").unwrap(), Value::from("apple"));
        assert_eq!(
            from_str("s:14:\"\"hello:world;\"\";").unwrap(),
            Value::from("\"hello:world;\"")
        );
    }

    #[test]
    fn test_string_multibyte() {
        assert_eq!(
            from_str("s:19:\"こんにちは🎅\";").unwrap(),
            Value::from("こんにちは🎅")
        );
        // "한글" = 6 bytes in UTF-8
        assert_eq!(from_str("s:6:\"한글\";").unwrap().as_str(), Some("한글"));
    }

    #[test]
    fn test_string_other_encodings() {
        assert_eq!(
            deserialize("s:8:\"a🎅b\";", TextEncoding::Utf16Le).unwrap(),
            Value::from("a🎅b")
        );
        assert_eq!(
            deserialize("s:2:\"日本\";", TextEncoding::Ascii).unwrap(),
            Value::from("日本")
        );
    }

    #[test]
    fn test_array_empty() {
        assert_eq!(from_str("a:0:{}").unwrap(), Value::Array(PhpArray::new()));
    }

    #[test]
    fn test_array_flat() {
        let value = from_str("a:4:{i:0;b:1;i:1;N;i:2;d:-421000000;i:3;s:6:\"A to Z\";}").unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 4);
        assert_eq!(array.get_int(0), Some(&Value::TRUE));
        assert_eq!(array.get_int(1), Some(&Value::Null));
        assert_eq!(array.get_int(2), Some(&Value::Double(-421000000.0)));
        assert_eq!(array.get_int(3), Some(&Value::from("A to Z")));
    }

    #[test]
    fn test_array_nested() {
        let value =
            from_str("a:3:{i:42;b:1;s:6:\"A to Z\";a:3:{i:0;i:1;i:1;i:2;i:2;i:3;}i:99;N;}").unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.get_int(42), Some(&Value::TRUE));
        let inner = array.get_str("A to Z").and_then(Value::as_array).unwrap();
        assert_eq!(inner, &PhpArray::list([1, 2, 3]));
        assert_eq!(array.get_int(99), Some(&Value::Null));
    }

    #[test]
    fn test_array_preserves_order() {
        let value = from_str("a:3:{s:1:\"z\";i:1;i:5;i:2;s:1:\"a\";i:3;}").unwrap();
        let keys: Vec<_> = value.as_array().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![ArrayKey::from("z"), ArrayKey::Int(5), ArrayKey::from("a")]
        );
    }

    #[test]
    fn test_array_int_and_string_keys_are_distinct() {
        let value = from_str("a:2:{i:3;s:1:\"a\";s:1:\"3\";s:1:\"b\";}").unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array.get_int(3), Some(&Value::from("a")));
        assert_eq!(array.get_str("3"), Some(&Value::from("b")));
    }

    #[test]
    fn test_object() {
        let value = from_str("O:8:\"stdClass\":2:{s:4:\"John\";d:3.14;s:4:\"Jane\";d:2.718;}").unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.class_name(), "stdClass");
        assert_eq!(object.len(), 2);
        let fields: Vec<_> = object.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        assert_eq!(
            fields,
            vec![("John", Value::Double(3.14)), ("Jane", Value::Double(2.718))]
        );
    }

    #[test]
    fn test_object_nested() {
        let text = "O:6:\"Person\":3:{s:4:\"name\";s:8:\"John Doe\";s:7:\"address\";O:7:\"Address\":1:{s:6:\"street\";s:11:\"123 Main St\";}s:3:\"age\";i:25;}";
        let value = from_str(text).unwrap();
        let person = value.as_object().unwrap();
        assert_eq!(person.class_name(), "Person");
        assert_eq!(person.get("name"), Some(&Value::from("John Doe")));
        let address = person.get("address").and_then(Value::as_object).unwrap();
        assert_eq!(address.class_name(), "Address");
        assert_eq!(address.get("street"), Some(&Value::from("123 Main St")));
        assert_eq!(person.get("age"), Some(&Value::Int(25)));
    }

    #[test]
    fn test_serializable() {
        let value = from_str("C:4:\"Name\":4:{i:1;}").unwrap();
        let ser = value.as_serializable().unwrap();
        assert_eq!(ser.class_name(), "Name");
        assert_eq!(ser.value(), &Value::Int(1));
    }

    #[test]
    fn test_serializable_with_multibyte_payload() {
        let value = from_str("C:3:\"Box\":13:{s:6:\"한글\";}").unwrap();
        assert_eq!(
            value,
            Value::from(Serializable::new("Box", "한글"))
        );
    }

    #[test]
    fn test_nested_array_depth() {
        let mut text = String::from("s:4:\"leaf\";");
        for _ in 0..100 {
            text = format!("a:1:{{s:1:\"k\";{}}}", text);
        }
        assert!(from_str(&text).unwrap().is_array());

        let config = ParserConfig {
            max_depth: Some(10),
            ..ParserConfig::default()
        };
        let err = from_str_with_config(&text, config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MaxDepthExceeded(10));
    }

    #[test]
    fn test_trailing_data() {
        assert_eq!(from_str("i:1;garbage").unwrap(), Value::Int(1));
        let config = ParserConfig {
            allow_trailing: false,
            ..ParserConfig::default()
        };
        let err = from_str_with_config("i:1;garbage", config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TrailingData);
        assert_eq!(err.position, 4);
    }

    #[test]
    fn test_error_unknown_type() {
        let err = from_str("x:1;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownType('x'));
        assert_eq!(err.position, 0);
        assert!(err.input_preview.is_some());
    }

    #[test]
    fn test_error_truncated_string() {
        let err = from_str("s:10:\"hello").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_error_invalid_key() {
        let err = from_str("a:1:{d:1.5;i:1;}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidKey { found: "double" });
        assert_eq!(err.position, 5);
    }

    #[test]
    fn test_error_invalid_field_name() {
        let err = from_str("O:3:\"Foo\":1:{i:0;i:1;}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFieldName { found: "integer" });
    }

    #[test]
    fn test_error_malformed_numbers() {
        assert_eq!(
            from_str("i:abc;").unwrap_err().kind,
            ErrorKind::MalformedNumeric("abc".into())
        );
        assert_eq!(
            from_str("i:9223372036854775808;").unwrap_err().kind,
            ErrorKind::MalformedNumeric("9223372036854775808".into())
        );
        assert_eq!(
            from_str("d:1.2.3;").unwrap_err().kind,
            ErrorKind::MalformedNumeric("1.2.3".into())
        );
        assert_eq!(
            from_str("s:-1:\"\";").unwrap_err().kind,
            ErrorKind::MalformedNumeric("-1".into())
        );
        assert_eq!(
            from_str("a:x:{}").unwrap_err().kind,
            ErrorKind::MalformedNumeric("x".into())
        );
    }

    #[test]
    fn test_error_empty_input() {
        assert_eq!(from_str("").unwrap_err().kind, ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_error_count_mismatch() {
        // Declares two entries but holds one; the closing brace is read as a key tag
        let err = from_str("a:2:{i:0;i:1;}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownType('}'));

        // Declares one entry but holds two
        let err = from_str("a:1:{i:0;i:1;i:1;i:2;}").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::UnexpectedChar {
                expected: '}',
                found: 'i'
            }
        );
    }

    #[test]
    fn test_error_string_length_inside_character() {
        let err = from_str("s:4:\"한글\";").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::LengthMismatch {
                expected: 4,
                found: 6
            }
        );
    }

    #[test]
    fn test_error_serializable_payload() {
        let err = from_str("C:4:\"Name\":8:{i:1;i:2;}").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::LengthMismatch {
                expected: 8,
                found: 4
            }
        );

        // Inner errors report positions in the outer text
        let err = from_str("C:4:\"Name\":4:{x:1;}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownType('x'));
        assert_eq!(err.position, 14);
        assert_eq!(err.context.as_deref(), Some("in payload of Name"));
    }

    #[test]
    fn test_is_serialized() {
        assert!(is_serialized("a:1:{i:0;s:3:\"foo\";}"));
        assert!(is_serialized("N;"));
        assert!(!is_serialized("not serialized"));
        assert!(!is_serialized(""));
    }
}

//! PHP serialize writer.
//!
//! Walks a [`Value`] tree and emits `serialize()` text. Entries of arrays and
//! objects are written in insertion order; string lengths are counted in the
//! configured [`TextEncoding`].

use std::fmt::{self, Write};

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::encoding::TextEncoding;
use crate::types::{ArrayKey, PhpArray, PhpObject, Serializable, Value};

/// Digits kept after the decimal point when a double needs rounding.
const DOUBLE_PRECISION: usize = 15;

/// Writes serialized text into any [`fmt::Write`] sink.
pub struct Serializer<W> {
    out: W,
    encoding: TextEncoding,
}

impl<W: Write> Serializer<W> {
    /// Create a serializer writing to `out`.
    pub fn new(out: W, encoding: TextEncoding) -> Self {
        Self { out, encoding }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one value, recursing into composites.
    pub fn serialize_value(&mut self, value: &Value) -> fmt::Result {
        match value {
            Value::Null => self.out.write_str("N;"),
            Value::Bool(b) => self.out.write_str(if *b { "b:1;" } else { "b:0;" }),
            Value::Int(i) => write!(self.out, "i:{};", i),
            Value::Double(d) => {
                self.out.write_str("d:")?;
                write_double(&mut self.out, *d)?;
                self.out.write_char(';')
            }
            Value::String(s) => self.serialize_str(s),
            Value::Array(array) => self.serialize_array(array),
            Value::Object(object) => self.serialize_object(object),
            Value::Serializable(ser) => self.serialize_serializable(ser),
        }
    }

    fn serialize_str(&mut self, s: &str) -> fmt::Result {
        write!(self.out, "s:{}:\"{}\";", self.encoding.byte_len(s), s)
    }

    fn serialize_key(&mut self, key: &ArrayKey) -> fmt::Result {
        match key {
            ArrayKey::Int(i) => write!(self.out, "i:{};", i),
            ArrayKey::String(s) => self.serialize_str(s),
        }
    }

    fn serialize_array(&mut self, array: &PhpArray) -> fmt::Result {
        write!(self.out, "a:{}:{{", array.len())?;
        for (key, value) in array {
            self.serialize_key(key)?;
            self.serialize_value(value)?;
        }
        self.out.write_char('}')
    }

    fn serialize_object(&mut self, object: &PhpObject) -> fmt::Result {
        self.write_class_name(object.class_name())?;
        write!(self.out, ":{}:{{", object.len())?;
        for (name, value) in object.iter() {
            self.serialize_str(name)?;
            self.serialize_value(value)?;
        }
        self.out.write_char('}')
    }

    fn serialize_serializable(&mut self, ser: &Serializable) -> fmt::Result {
        // The length prefix has to be known before the payload is written
        let mut inner = Serializer::new(String::new(), self.encoding);
        inner.serialize_value(ser.value())?;
        let payload = inner.into_inner();

        self.out.write_char('C')?;
        self.write_class_name_body(ser.class_name())?;
        write!(
            self.out,
            ":{}:{{{}}}",
            self.encoding.byte_len(&payload),
            payload
        )
    }

    /// `O:<len>:"<class>"`
    fn write_class_name(&mut self, class_name: &str) -> fmt::Result {
        self.out.write_char('O')?;
        self.write_class_name_body(class_name)
    }

    /// `:<len>:"<class>"`
    fn write_class_name_body(&mut self, class_name: &str) -> fmt::Result {
        write!(
            self.out,
            ":{}:\"{}\"",
            self.encoding.byte_len(class_name),
            class_name
        )
    }
}

/// Format a double the way the codec always does: `INF`, `-INF`, `NAN`, or a
/// fixed-point decimal with at most 15 fractional digits and no trailing zeros.
fn write_double<W: Write>(out: &mut W, d: f64) -> fmt::Result {
    if d.is_nan() {
        return out.write_str("NAN");
    }
    if d.is_infinite() {
        return out.write_str(if d > 0.0 { "INF" } else { "-INF" });
    }

    // Shortest round-trip digits, never in exponent form
    let shortest = d.to_string();
    let fraction_digits = shortest
        .find('.')
        .map_or(0, |dot| shortest.len() - dot - 1);
    if fraction_digits <= DOUBLE_PRECISION {
        return out.write_str(&shortest);
    }

    let fixed = format!("{:.*}", DOUBLE_PRECISION, d);
    out.write_str(fixed.trim_end_matches('0').trim_end_matches('.'))
}

/// Serialize `value` with string lengths counted in `encoding`.
///
/// # Example
///
/// ```rust
/// use php_serialize_core::{serialize, TextEncoding, Value};
///
/// let text = serialize(&Value::from("日本"), TextEncoding::Utf8);
/// assert_eq!(text, "s:6:\"日本\";");
/// ```
pub fn serialize(value: &Value, encoding: TextEncoding) -> String {
    #[cfg(feature = "tracing")]
    trace!(value_type = value.type_name(), %encoding, "serialize called");

    let mut serializer = Serializer::new(String::new(), encoding);
    // Writing into a String cannot fail
    let _ = serializer.serialize_value(value);
    serializer.into_inner()
}

/// Serialize `value` with UTF-8 string lengths.
///
/// # Example
///
/// ```rust
/// use php_serialize_core::{php_array, to_string};
///
/// let value = php_array![0 => true, "name" => "Alice"];
/// assert_eq!(to_string(&value), "a:2:{i:0;b:1;s:4:\"name\";s:5:\"Alice\";}");
/// ```
pub fn to_string(value: &Value) -> String {
    serialize(value, TextEncoding::Utf8)
}

/// Serialize `value` into an existing writer.
pub fn to_writer<W: Write>(out: W, value: &Value, encoding: TextEncoding) -> fmt::Result {
    Serializer::new(out, encoding).serialize_value(value)
}

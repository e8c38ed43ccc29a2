//! JSON conversion for PHP values.
//!
//! This module provides conversion from [`Value`] to JSON using serde_json,
//! and a [`serde::Serialize`] impl following the same mapping so values can be
//! written by any serde data format. Enable the `serde` feature to use it.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{json, Map, Value as JsonValue};

use crate::types::{ArrayKey, Value};

/// Convert a PHP value to a JSON value.
///
/// # Mapping Rules
///
/// | PHP Type | JSON Type |
/// |----------|-----------|
/// | `null` | `null` |
/// | `bool` | `boolean` |
/// | `int` | `number` |
/// | `double` | `number` (`null` for NaN, `"Infinity"`/`"-Infinity"` strings) |
/// | `string` | `string` |
/// | `array` (keys `0..n`) | `array` |
/// | `array` (other keys) | `object`, keys in insertion order |
/// | `object` | `object` with a `__class__` field |
/// | `Serializable` | `object` with `__class__` and `__data__` fields |
///
/// # Example
///
/// ```rust
/// use php_serialize_core::{from_str, to_json};
///
/// let data = r#"a:2:{s:4:"name";s:5:"Alice";s:3:"age";i:30;}"#;
/// let php_value = from_str(data).unwrap();
/// let json = to_json(&php_value);
/// assert_eq!(json, serde_json::json!({"name": "Alice", "age": 30}));
/// ```
pub fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => json!(*i),
        Value::Double(f) => {
            if f.is_nan() {
                JsonValue::Null
            } else if f.is_infinite() {
                if f.is_sign_positive() {
                    json!("Infinity")
                } else {
                    json!("-Infinity")
                }
            } else {
                json!(*f)
            }
        }
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Array(array) => {
            if array.is_list() {
                JsonValue::Array(array.values().map(to_json).collect())
            } else {
                let mut map = Map::with_capacity(array.len());
                for (k, v) in array {
                    let key = match k {
                        ArrayKey::String(s) => s.clone(),
                        ArrayKey::Int(i) => i.to_string(),
                    };
                    map.insert(key, to_json(v));
                }
                JsonValue::Object(map)
            }
        }
        Value::Object(object) => {
            let mut map = Map::with_capacity(object.len() + 1);
            map.insert("__class__".to_string(), json!(object.class_name()));
            for (name, v) in object.iter() {
                map.insert(name.clone(), to_json(v));
            }
            JsonValue::Object(map)
        }
        Value::Serializable(ser) => {
            json!({
                "__class__": ser.class_name(),
                "__data__": to_json(ser.value()),
            })
        }
    }
}

/// Convert a PHP value to a JSON string.
///
/// # Example
///
/// ```rust
/// use php_serialize_core::{from_str, json::to_json_string};
///
/// let data = r#"a:2:{s:4:"name";s:5:"Alice";s:3:"age";i:30;}"#;
/// let php_value = from_str(data).unwrap();
/// let json_str = to_json_string(&php_value).unwrap();
/// assert_eq!(json_str, r#"{"name":"Alice","age":30}"#);
/// ```
pub fn to_json_string(value: &Value) -> serde_json::Result<String> {
    let json = to_json(value);
    serde_json::to_string(&json)
}

/// Convert a PHP value to a pretty-printed JSON string.
pub fn to_json_string_pretty(value: &Value) -> serde_json::Result<String> {
    let json = to_json(value);
    serde_json::to_string_pretty(&json)
}

impl Serialize for ArrayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ArrayKey::Int(i) => serializer.serialize_i64(*i),
            ArrayKey::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Double(f) if f.is_nan() => serializer.serialize_unit(),
            Value::Double(f) if f.is_infinite() => {
                serializer.serialize_str(if *f > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Double(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(array) if array.is_list() => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for v in array.values() {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Value::Array(array) => {
                let mut map = serializer.serialize_map(Some(array.len()))?;
                for (k, v) in array {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len() + 1))?;
                map.serialize_entry("__class__", object.class_name())?;
                for (name, v) in object.iter() {
                    map.serialize_entry(name, v)?;
                }
                map.end()
            }
            Value::Serializable(ser) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("__class__", ser.class_name())?;
                map.serialize_entry("__data__", ser.value())?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;
    use crate::from_str;

    #[test]
    fn test_simple_types() {
        assert_eq!(to_json(&Value::Null), JsonValue::Null);
        assert_eq!(to_json(&Value::TRUE), JsonValue::Bool(true));
        assert_eq!(to_json(&Value::Int(42)), json!(42));
        assert_eq!(to_json(&Value::Double(3.14)), json!(3.14));
        assert_eq!(to_json(&Value::Double(f64::NAN)), JsonValue::Null);
        assert_eq!(to_json(&Value::Double(f64::NEG_INFINITY)), json!("-Infinity"));
    }

    #[test]
    fn test_indexed_array() {
        let value = from_str("a:2:{i:0;s:3:\"foo\";i:1;s:3:\"bar\";}").unwrap();
        assert_eq!(to_json(&value), json!(["foo", "bar"]));
    }

    #[test]
    fn test_mixed_array() {
        // Non-sequential keys -> object
        let value = from_str("a:2:{i:0;s:3:\"foo\";i:5;s:3:\"bar\";}").unwrap();
        assert_eq!(to_json(&value), json!({"0": "foo", "5": "bar"}));
    }

    #[test]
    fn test_object() {
        let value = from_str("O:8:\"stdClass\":2:{s:4:\"John\";d:3.14;s:4:\"Jane\";d:2.718;}").unwrap();
        assert_eq!(
            to_json_string(&value).unwrap(),
            r#"{"__class__":"stdClass","John":3.14,"Jane":2.718}"#
        );
    }

    #[test]
    fn test_serializable() {
        let value = from_str("C:4:\"Name\":4:{i:1;}").unwrap();
        assert_eq!(to_json(&value), json!({"__class__": "Name", "__data__": 1}));
    }

    #[test]
    fn test_serialize_impl_matches_to_json() {
        let value = from_str(
            "a:4:{i:0;d:NAN;i:7;O:4:\"User\":1:{s:4:\"name\";s:3:\"Bob\";}s:4:\"list\";a:2:{i:0;d:-INF;i:1;b:0;}s:3:\"box\";C:3:\"Box\":2:{N;}}",
        )
        .unwrap();
        assert_eq!(serde_json::to_value(&value).unwrap(), to_json(&value));
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"0":null,"7":{"__class__":"User","name":"Bob"},"list":["-Infinity",false],"box":{"__class__":"Box","__data__":null}}"#
        );
    }

    #[test]
    fn test_nested() {
        let value = from_str("a:1:{s:4:\"user\";a:2:{s:4:\"name\";s:5:\"Alice\";s:3:\"age\";i:30;}}").unwrap();
        assert_eq!(
            to_json(&value),
            json!({"user": {"name": "Alice", "age": 30}})
        );
    }
}

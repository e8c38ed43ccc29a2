//! Python bindings for php-serialize-core.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};

use php_serialize_core::{
    from_str_with_config, json::to_json, serialize, ArrayKey, ParserConfig, PhpArray, PhpObject,
    TextEncoding, Value,
};

pyo3::create_exception!(php_serialize, PhpSerializeError, pyo3::exceptions::PyException);

/// Dict key carrying the class name of objects and Serializable values.
const CLASS_KEY: &str = "__class__";
/// Dict key carrying the payload of Serializable values.
const DATA_KEY: &str = "__data__";

fn resolve_encoding(label: &str) -> PyResult<TextEncoding> {
    TextEncoding::from_label(label)
        .ok_or_else(|| PyValueError::new_err(format!("unknown encoding: {:?}", label)))
}

fn parse(data: &str, encoding: &str, max_depth: Option<usize>) -> PyResult<Value> {
    let config = ParserConfig {
        max_depth,
        ..ParserConfig::with_encoding(resolve_encoding(encoding)?)
    };
    from_str_with_config(data, config).map_err(|e| PhpSerializeError::new_err(e.to_string()))
}

/// Convert a Value to a Python object.
fn value_to_python(py: Python<'_>, value: &Value) -> PyResult<PyObject> {
    match value {
        Value::Null => Ok(py.None()),
        Value::Bool(b) => Ok(b.to_object(py)),
        Value::Int(i) => Ok(i.to_object(py)),
        Value::Double(d) => Ok(d.to_object(py)),
        Value::String(s) => Ok(s.to_object(py)),
        Value::Array(array) => {
            if array.is_list() {
                let list = PyList::empty_bound(py);
                for v in array.values() {
                    list.append(value_to_python(py, v)?)?;
                }
                Ok(list.to_object(py))
            } else {
                let dict = PyDict::new_bound(py);
                for (k, v) in array {
                    let key = match k {
                        ArrayKey::Int(i) => i.to_object(py),
                        ArrayKey::String(s) => s.to_object(py),
                    };
                    dict.set_item(key, value_to_python(py, v)?)?;
                }
                Ok(dict.to_object(py))
            }
        }
        Value::Object(object) => {
            let dict = PyDict::new_bound(py);
            dict.set_item(CLASS_KEY, object.class_name())?;
            for (name, v) in object.iter() {
                dict.set_item(name, value_to_python(py, v)?)?;
            }
            Ok(dict.to_object(py))
        }
        Value::Serializable(ser) => {
            let dict = PyDict::new_bound(py);
            dict.set_item(CLASS_KEY, ser.class_name())?;
            dict.set_item(DATA_KEY, value_to_python(py, ser.value())?)?;
            Ok(dict.to_object(py))
        }
    }
}

/// Convert a Python object to a Value.
fn python_to_value(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if obj.is_none() {
        return Ok(Value::Null);
    }
    // bool is a subclass of int, check it first
    if let Ok(b) = obj.downcast::<PyBool>() {
        return Ok(Value::Bool(b.is_true()));
    }
    if obj.is_instance_of::<PyInt>() {
        let i: i64 = obj
            .extract()
            .map_err(|_| PhpSerializeError::new_err("integer does not fit in 64 bits"))?;
        return Ok(Value::Int(i));
    }
    if let Ok(f) = obj.downcast::<PyFloat>() {
        return Ok(Value::Double(f.value()));
    }
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(Value::String(s.to_str()?.to_owned()));
    }
    if let Ok(list) = obj.downcast::<PyList>() {
        return list
            .iter()
            .map(|item| python_to_value(&item))
            .collect::<PyResult<Vec<_>>>()
            .map(|items| Value::Array(PhpArray::list(items)));
    }
    if let Ok(tuple) = obj.downcast::<PyTuple>() {
        return tuple
            .iter()
            .map(|item| python_to_value(&item))
            .collect::<PyResult<Vec<_>>>()
            .map(|items| Value::Array(PhpArray::list(items)));
    }
    if let Ok(dict) = obj.downcast::<PyDict>() {
        return dict_to_value(dict);
    }

    let type_name = obj.get_type().name()?.to_string();
    Err(PhpSerializeError::new_err(format!(
        "cannot serialize object of type {}",
        type_name
    )))
}

fn dict_to_value(dict: &Bound<'_, PyDict>) -> PyResult<Value> {
    let class = dict
        .get_item(CLASS_KEY)?
        .and_then(|c| c.downcast::<PyString>().ok().map(|s| s.to_str().map(str::to_owned)))
        .transpose()?;

    if let Some(class_name) = class {
        let mut object = PhpObject::new(class_name);
        for (k, v) in dict.iter() {
            let name = k
                .downcast::<PyString>()
                .map_err(|_| PhpSerializeError::new_err("object field names must be str"))?
                .to_str()?
                .to_owned();
            if name != CLASS_KEY {
                object.insert(name, python_to_value(&v)?);
            }
        }
        return Ok(Value::Object(object));
    }

    let mut array = PhpArray::with_capacity(dict.len());
    for (k, v) in dict.iter() {
        let key = if let Ok(s) = k.downcast::<PyString>() {
            ArrayKey::String(s.to_str()?.to_owned())
        } else if k.is_instance_of::<PyInt>() && !k.is_instance_of::<PyBool>() {
            ArrayKey::Int(k.extract()?)
        } else {
            return Err(PhpSerializeError::new_err("array keys must be int or str"));
        };
        array.insert(key, python_to_value(&v)?);
    }
    Ok(Value::Array(array))
}

/// Unserialize PHP serialized text to a Python object.
///
/// Args:
///     data: PHP serialized text
///     encoding: Encoding the string lengths were counted in (default: "utf-8").
///         One of "utf-8", "utf-16le", "utf-16be", "latin1", "ascii".
///     max_depth: Maximum nesting depth of arrays, objects and Serializable
///         payloads (default: unlimited)
///
/// Returns:
///     The Python object (dict, list, str, int, float, bool, or None).
///     Objects become dicts with a "__class__" entry; Serializable values become
///     {"__class__": name, "__data__": payload}.
///
/// Raises:
///     PhpSerializeError: If the data cannot be parsed
///     ValueError: If the encoding is unknown
///
/// Example:
///     >>> from php_serialize import loads
///     >>> loads('a:2:{s:4:"name";s:5:"Alice";s:3:"age";i:30;}')
///     {'name': 'Alice', 'age': 30}
///
///     >>> loads('s:6:"a🎅";', encoding="utf-16le")
///     'a🎅'
#[pyfunction]
#[pyo3(signature = (data, *, encoding="utf-8", max_depth=None))]
fn loads(
    py: Python<'_>,
    data: &str,
    encoding: &str,
    max_depth: Option<usize>,
) -> PyResult<PyObject> {
    let value = parse(data, encoding, max_depth)?;
    value_to_python(py, &value)
}

/// Serialize a Python object to PHP serialized text.
///
/// Args:
///     obj: None, bool, int, float, str, list, tuple or dict. A dict with a str
///         "__class__" entry becomes an object of that class.
///     encoding: Encoding used to count string lengths (default: "utf-8")
///
/// Returns:
///     The serialized text
///
/// Raises:
///     PhpSerializeError: If the object contains an unsupported type
///     ValueError: If the encoding is unknown
///
/// Example:
///     >>> from php_serialize import dumps
///     >>> dumps({"name": "Alice", "tags": ["a", "b"]})
///     'a:2:{s:4:"name";s:5:"Alice";s:4:"tags";a:2:{i:0;s:1:"a";i:1;s:1:"b";}}'
#[pyfunction]
#[pyo3(signature = (obj, *, encoding="utf-8"))]
fn dumps(obj: &Bound<'_, PyAny>, encoding: &str) -> PyResult<String> {
    let encoding = resolve_encoding(encoding)?;
    let value = python_to_value(obj)?;
    Ok(serialize(&value, encoding))
}

/// Unserialize PHP serialized text directly to a JSON string.
///
/// Avoids building intermediate Python objects when JSON is the target.
///
/// Args:
///     data: PHP serialized text
///     encoding: Encoding the string lengths were counted in (default: "utf-8")
///     pretty: Indent the output (default: False)
///
/// Returns:
///     A JSON string representation of the value
///
/// Raises:
///     PhpSerializeError: If the data cannot be parsed
///
/// Example:
///     >>> from php_serialize import loads_json
///     >>> loads_json('a:2:{s:4:"name";s:5:"Alice";s:3:"age";i:30;}')
///     '{"name":"Alice","age":30}'
#[pyfunction]
#[pyo3(signature = (data, *, encoding="utf-8", pretty=false))]
fn loads_json(data: &str, encoding: &str, pretty: bool) -> PyResult<String> {
    let value = parse(data, encoding, None)?;
    let json = to_json(&value);
    let rendered = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    rendered.map_err(|e| PhpSerializeError::new_err(e.to_string()))
}

/// Check if text looks like PHP serialized format.
///
/// This only inspects the leading type tag and does not validate the rest.
///
/// Example:
///     >>> from php_serialize import is_serialized
///     >>> is_serialized('a:1:{i:0;s:3:"foo";}')
///     True
///     >>> is_serialized('not serialized')
///     False
#[pyfunction]
fn is_serialized(data: &str) -> bool {
    php_serialize_core::is_serialized(data)
}

/// Get the version of the library.
#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// PHP serialize module for Python.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("PhpSerializeError", m.py().get_type_bound::<PhpSerializeError>())?;
    m.add_function(wrap_pyfunction!(loads, m)?)?;
    m.add_function(wrap_pyfunction!(dumps, m)?)?;
    m.add_function(wrap_pyfunction!(loads_json, m)?)?;
    m.add_function(wrap_pyfunction!(is_serialized, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;
    Ok(())
}

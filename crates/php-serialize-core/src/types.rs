//! PHP value types.
//!
//! [`Value`] is a closed enum over everything `serialize()` can carry. Arrays
//! and objects are insertion-ordered maps; array keys are restricted to the
//! [`ArrayKey`] sub-type so a float or nested array can never be used as a key.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::map::{IntoIter, Iter, Keys, Values};
use indexmap::{Equivalent, IndexMap};

/// A PHP value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// PHP null value.
    #[default]
    Null,

    /// PHP boolean value.
    Bool(bool),

    /// PHP integer value.
    Int(i64),

    /// PHP float value. Any bit pattern is accepted, including NaN and infinities.
    Double(f64),

    /// PHP string value. Its declared byte length depends on the encoding
    /// chosen at serialization time.
    String(String),

    /// PHP array (ordered map).
    Array(PhpArray),

    /// PHP object with a class label.
    Object(PhpObject),

    /// Object serialized through PHP's `Serializable` interface (`C:` tag).
    Serializable(Serializable),
}

/// A key of a PHP array: only integers and strings qualify.
///
/// `ArrayKey::Int(3)` and `ArrayKey::String("3".into())` are distinct keys;
/// nothing here coerces one into the other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArrayKey {
    /// Integer key.
    Int(i64),
    /// String key.
    String(String),
}

/// Borrowed form of [`ArrayKey`], used for allocation-free lookups.
#[derive(Hash)]
enum KeyRef<'a> {
    Int(i64),
    String(&'a str),
}

impl ArrayKey {
    fn as_key_ref(&self) -> KeyRef<'_> {
        match self {
            ArrayKey::Int(i) => KeyRef::Int(*i),
            ArrayKey::String(s) => KeyRef::String(s),
        }
    }

    /// Get the key as an integer.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArrayKey::Int(i) => Some(*i),
            ArrayKey::String(_) => None,
        }
    }

    /// Get the key as a string slice.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArrayKey::String(s) => Some(s),
            ArrayKey::Int(_) => None,
        }
    }
}

// Both forms hash through `KeyRef` so borrowed lookups land in the same bucket.
impl Hash for ArrayKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key_ref().hash(state);
    }
}

impl Equivalent<ArrayKey> for KeyRef<'_> {
    fn equivalent(&self, key: &ArrayKey) -> bool {
        match (self, key) {
            (KeyRef::Int(a), ArrayKey::Int(b)) => a == b,
            (KeyRef::String(a), ArrayKey::String(b)) => *a == b.as_str(),
            _ => false,
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(i: i64) -> Self {
        ArrayKey::Int(i)
    }
}

impl From<i32> for ArrayKey {
    fn from(i: i32) -> Self {
        ArrayKey::Int(i64::from(i))
    }
}

impl From<&str> for ArrayKey {
    fn from(s: &str) -> Self {
        ArrayKey::String(s.to_owned())
    }
}

impl From<String> for ArrayKey {
    fn from(s: String) -> Self {
        ArrayKey::String(s)
    }
}

impl TryFrom<Value> for ArrayKey {
    /// The rejected value is handed back unchanged.
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(ArrayKey::Int(i)),
            Value::String(s) => Ok(ArrayKey::String(s)),
            other => Err(other),
        }
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(i) => write!(f, "{}", i),
            ArrayKey::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// An insertion-ordered PHP array.
///
/// Inserting an existing key replaces its value and keeps the key's original
/// position. Equality is order-sensitive, matching PHP's `===`.
#[derive(Debug, Clone, Default)]
pub struct PhpArray {
    entries: IndexMap<ArrayKey, Value>,
}

impl PhpArray {
    /// Create an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty array with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Build a list: values keyed `0, 1, 2, ...` in order.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .zip(0_i64..)
            .map(|(v, i)| (ArrayKey::Int(i), v.into()))
            .collect()
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<ArrayKey>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Append one entry and hand the array back.
    pub fn with(mut self, key: impl Into<ArrayKey>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by key.
    #[inline]
    pub fn get(&self, key: &ArrayKey) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a value by integer key. String keys never match.
    #[inline]
    pub fn get_int(&self, key: i64) -> Option<&Value> {
        self.entries.get(&KeyRef::Int(key))
    }

    /// Look up a value by string key. Integer keys never match.
    #[inline]
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.entries.get(&KeyRef::String(key))
    }

    /// Whether the array contains `key`.
    pub fn contains_key(&self, key: &ArrayKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the array has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> Iter<'_, ArrayKey, Value> {
        self.entries.iter()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> Keys<'_, ArrayKey, Value> {
        self.entries.keys()
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> Values<'_, ArrayKey, Value> {
        self.entries.values()
    }

    /// Whether the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .zip(0_i64..)
            .all(|(k, i)| *k == ArrayKey::Int(i))
    }
}

impl PartialEq for PhpArray {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Into<ArrayKey>, V: Into<Value>> FromIterator<(K, V)> for PhpArray {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for PhpArray {
    type Item = (ArrayKey, Value);
    type IntoIter = IntoIter<ArrayKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PhpArray {
    type Item = (&'a ArrayKey, &'a Value);
    type IntoIter = Iter<'a, ArrayKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A PHP object: an opaque class label plus ordered fields.
#[derive(Debug, Clone, Default)]
pub struct PhpObject {
    class_name: String,
    fields: IndexMap<String, Value>,
}

impl PhpObject {
    /// Create an object with no fields.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Create an object from its class name and fields.
    pub fn from_fields<K, V, I>(class_name: impl Into<String>, fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            class_name: class_name.into(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The class label.
    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Insert a field, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Append one field and hand the object back.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a field.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the object has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.fields.iter()
    }

    /// The ordered field map.
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }
}

impl PartialEq for PhpObject {
    fn eq(&self, other: &Self) -> bool {
        self.class_name == other.class_name
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

/// Payload of a class implementing PHP's `Serializable` interface.
///
/// The wrapped value is itself a parsed tree, not raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct Serializable {
    class_name: String,
    value: Box<Value>,
}

impl Serializable {
    /// Wrap `value` under `class_name`.
    pub fn new(class_name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            class_name: class_name.into(),
            value: Box::new(value.into()),
        }
    }

    /// The class label.
    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The wrapped value.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Unwrap into the inner value.
    pub fn into_inner(self) -> Value {
        *self.value
    }
}

impl Value {
    /// PHP `true`.
    pub const TRUE: Value = Value::Bool(true);

    /// PHP `false`.
    pub const FALSE: Value = Value::Bool(false);

    /// Check if the value is null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if the value is a boolean.
    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if the value is an integer.
    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if the value is a double.
    #[inline]
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// Check if the value is a string.
    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if the value is an array.
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if the value is an object.
    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Check if the value is a `Serializable` payload.
    #[inline]
    pub fn is_serializable(&self) -> bool {
        matches!(self, Value::Serializable(_))
    }

    /// Get the value as a boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as an integer.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a double. Integers are widened.
    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get the value as a string slice.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an array.
    #[inline]
    pub fn as_array(&self) -> Option<&PhpArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get the value as an object.
    #[inline]
    pub fn as_object(&self) -> Option<&PhpObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get the value as a `Serializable` payload.
    #[inline]
    pub fn as_serializable(&self) -> Option<&Serializable> {
        match self {
            Value::Serializable(s) => Some(s),
            _ => None,
        }
    }

    /// Get a type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Serializable(_) => "serializable",
        }
    }

    /// Structural identity: like `==`, but doubles compare bit-for-bit, so
    /// `NaN` is identical to `NaN` while `0.0` and `-0.0` are not.
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va.identical(vb))
            }
            (Value::Object(a), Value::Object(b)) => {
                a.class_name() == b.class_name()
                    && a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va.identical(vb))
            }
            (Value::Serializable(a), Value::Serializable(b)) => {
                a.class_name() == b.class_name() && a.value().identical(b.value())
            }
            _ => self == other,
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<f32> for Value {
    fn from(d: f32) -> Self {
        Value::Double(f64::from(d))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<ArrayKey> for Value {
    fn from(key: ArrayKey) -> Self {
        match key {
            ArrayKey::Int(i) => Value::Int(i),
            ArrayKey::String(s) => Value::String(s),
        }
    }
}

impl From<PhpArray> for Value {
    fn from(a: PhpArray) -> Self {
        Value::Array(a)
    }
}

impl From<PhpObject> for Value {
    fn from(o: PhpObject) -> Self {
        Value::Object(o)
    }
}

impl From<Serializable> for Value {
    fn from(s: Serializable) -> Self {
        Value::Serializable(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(PhpArray::list(values))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Double(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Array(arr) => {
                write!(f, "[")?;
                for (i, (k, v)) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} => {}", k, v)?;
                }
                write!(f, "]")
            }
            Value::Object(obj) => write!(f, "{}{{...}}", obj.class_name()),
            Value::Serializable(s) => write!(f, "{}({})", s.class_name(), s.value()),
        }
    }
}

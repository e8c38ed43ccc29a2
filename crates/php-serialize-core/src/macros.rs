/// Build a [`Value::Array`](crate::Value::Array) from `key => value` pairs.
///
/// Keys may be anything convertible into [`ArrayKey`](crate::ArrayKey), values
/// anything convertible into [`Value`](crate::Value).
///
/// ```rust
/// use php_serialize_core::{php_array, Value};
///
/// let value = php_array![0 => "zero", "nested" => php_array![1 => Value::Null]];
/// assert_eq!(value.as_array().map(|a| a.len()), Some(2));
/// ```
#[macro_export]
macro_rules! php_array {
    () => {
        $crate::Value::Array($crate::PhpArray::new())
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut array = $crate::PhpArray::new();
        $(
            array.insert($key, $value);
        )+
        $crate::Value::Array(array)
    }};
}

/// Build a [`Value::Object`](crate::Value::Object) from a class name and
/// `field => value` pairs.
///
/// ```rust
/// use php_serialize_core::php_object;
///
/// let value = php_object!("stdClass", { "John" => 3.14, "Jane" => 2.718 });
/// assert_eq!(value.as_object().map(|o| o.class_name()), Some("stdClass"));
/// ```
#[macro_export]
macro_rules! php_object {
    ($class:expr) => {
        $crate::Value::Object($crate::PhpObject::new($class))
    };

    ($class:expr, { $($name:expr => $value:expr),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut object = $crate::PhpObject::new($class);
        $(
            object.insert($name, $value);
        )*
        $crate::Value::Object(object)
    }};
}

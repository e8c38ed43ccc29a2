//! PHP serialize/unserialize codec.
//!
//! This crate converts between PHP's `serialize()` text format and an ordered,
//! strongly typed value tree. Both directions count string lengths in a
//! configurable text encoding, so data produced by PHP under UTF-8, UTF-16 or a
//! single-byte charset round-trips with the correct byte lengths.
//!
//! # Features
//!
//! - **Closed value model** - `Value` covers every type the format carries
//! - **Ordered arrays and objects** - insertion order survives both directions
//! - **Typed array keys** - only integers and strings can be keys
//! - **Encoding aware** - byte lengths measured in UTF-8, UTF-16, Latin-1 or ASCII
//! - **Detailed errors** - classified error kinds with positions and previews
//!
//! # Quick Start
//!
//! ```rust
//! use php_serialize_core::{from_str, to_string, Value};
//!
//! let text = r#"a:2:{s:4:"name";s:5:"Alice";s:3:"age";i:30;}"#;
//! let value = from_str(text).unwrap();
//!
//! if let Value::Array(items) = &value {
//!     for (key, val) in items {
//!         println!("{} => {}", key, val);
//!     }
//!     assert_eq!(items.get_str("age"), Some(&Value::Int(30)));
//! }
//!
//! assert_eq!(to_string(&value), text);
//! ```
//!
//! # Supported Types
//!
//! | PHP Type | Tag | Rust Type |
//! |----------|-----|-----------|
//! | `null` | `N` | `Value::Null` |
//! | `bool` | `b` | `Value::Bool(bool)` |
//! | `int` | `i` | `Value::Int(i64)` |
//! | `float` | `d` | `Value::Double(f64)` |
//! | `string` | `s` | `Value::String(String)` |
//! | `array` | `a` | `Value::Array(PhpArray)` |
//! | `object` | `O` | `Value::Object(PhpObject)` |
//! | `Serializable` | `C` | `Value::Serializable(Serializable)` |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::inline_always)]

#[macro_use]
mod macros;

pub mod cursor;
pub mod encoding;
pub mod error;
pub mod parser;
pub mod ser;
pub mod types;

#[cfg(feature = "serde")]
pub mod json;

pub use encoding::TextEncoding;
pub use error::{ErrorKind, PhpSerializeError, Result};
pub use parser::{deserialize, from_str, from_str_with_config, is_serialized, Parser, ParserConfig};
pub use ser::{serialize, to_string, to_writer, Serializer};
pub use types::{ArrayKey, PhpArray, PhpObject, Serializable, Value};

#[cfg(feature = "serde")]
pub use json::to_json;

//! A JSON value model with exact-width numbers.
//!
//! ```
//! use jsonette::{from_str, path, JsonValue, Number};
//!
//! let value = from_str(r#"{"items": [{"id": 300}, {"id": 1.5}]}"#).unwrap();
//! assert_eq!(
//!     value.dig_number("items", &path![0, "id"]),
//!     Some(&Number::I16(300))
//! );
//! assert_eq!(
//!     value.dig("items", &path![1, "id"]),
//!     Some(&JsonValue::Number(Number::F32(1.5)))
//! );
//! assert_eq!(from_str(&value.to_string()).unwrap(), value);
//! ```
//!
//! [`parse`] reads one value from the front of its input and hands back the unconsumed rest,
//! while [`from_str`] requires the whole input to be a single value. Numbers are stored in the
//! narrowest of `i8`, `i16`, `i32`, `i64`, [`BigInt`](num_bigint::BigInt), `f32`, `f64` or
//! [`BigDecimal`] (from the `fraction` crate) that holds them exactly.
//!
//! # Features
//!
//! - `serde_json`: conversions and comparisons between [`JsonValue`] and `serde_json::Value`.
mod convert;
mod dig;
mod error;
mod escape;
mod impls;
mod options;
mod parser;
mod value;

pub use convert::ToJson;
pub use dig::Step;
pub use error::{ParseError, ParseErrorKind};
pub use escape::{escape, escape_into};
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH, MAX_DEPTH};
pub use parser::{from_str, from_str_with_options, parse, parse_with_options};
pub use value::{BigDecimal, JsonValue, Map, Number, MAX_EXPONENT};


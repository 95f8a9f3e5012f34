//! Conversions from Rust data into [`JsonValue`].
//!
//! Host types opt in by implementing [`ToJson`]; there is no runtime introspection.
use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use ahash::AHashMap;
use num_bigint::BigInt;

use crate::{BigDecimal, JsonValue, Map, Number};

/// Types that can be represented as a [`JsonValue`].
///
/// ```
/// use jsonette::{JsonValue, Map, ToJson};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl ToJson for Point {
///     fn to_json(&self) -> JsonValue {
///         let mut map = Map::default();
///         map.insert("x".to_string(), self.x.to_json());
///         map.insert("y".to_string(), self.y.to_json());
///         JsonValue::Object(map)
///     }
/// }
///
/// let point = Point { x: 1, y: -2 }.to_json();
/// assert_eq!(point.dig_number("y", &[]).and_then(|n| n.as_i64()), Some(-2));
/// ```
pub trait ToJson {
    fn to_json(&self) -> JsonValue;
}

impl ToJson for JsonValue {
    fn to_json(&self) -> JsonValue {
        self.clone()
    }
}

impl ToJson for bool {
    fn to_json(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

impl ToJson for str {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }
}

impl ToJson for String {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl ToJson for char {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }
}

macro_rules! impl_numeric {
    ($($ty:ty),*) => {
        $(
            impl ToJson for $ty {
                fn to_json(&self) -> JsonValue {
                    JsonValue::Number(Number::from(Clone::clone(self)))
                }
            }

            impl From<$ty> for JsonValue {
                fn from(value: $ty) -> Self {
                    JsonValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, BigInt, BigDecimal
);

impl ToJson for Number {
    fn to_json(&self) -> JsonValue {
        JsonValue::Number(self.clone())
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> JsonValue {
        match self {
            Some(value) => value.to_json(),
            None => JsonValue::Null,
        }
    }
}

impl<T: ToJson + ?Sized> ToJson for &T {
    fn to_json(&self) -> JsonValue {
        (**self).to_json()
    }
}

impl<T: ToJson + ?Sized> ToJson for Box<T> {
    fn to_json(&self) -> JsonValue {
        (**self).to_json()
    }
}

impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: ToJson, const N: usize> ToJson for [T; N] {
    fn to_json(&self) -> JsonValue {
        self.as_slice().to_json()
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> JsonValue {
        self.as_slice().to_json()
    }
}

fn object<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> JsonValue
where
    K: AsRef<str> + 'a,
    V: ToJson + 'a,
{
    JsonValue::Object(
        entries
            .map(|(key, value)| (key.as_ref().to_string(), value.to_json()))
            .collect(),
    )
}

impl<K: AsRef<str>, V: ToJson, S: BuildHasher> ToJson for HashMap<K, V, S> {
    fn to_json(&self) -> JsonValue {
        object(self.iter())
    }
}

impl<K: AsRef<str>, V: ToJson> ToJson for BTreeMap<K, V> {
    fn to_json(&self) -> JsonValue {
        object(self.iter())
    }
}

impl<K: AsRef<str>, V: ToJson> ToJson for AHashMap<K, V> {
    fn to_json(&self) -> JsonValue {
        object(self.iter())
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Number> for JsonValue {
    fn from(value: Number) -> Self {
        JsonValue::Number(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<Map> for JsonValue {
    fn from(value: Map) -> Self {
        JsonValue::Object(value)
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl From<()> for JsonValue {
    fn from((): ()) -> Self {
        JsonValue::Null
    }
}

impl FromIterator<JsonValue> for JsonValue {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsonValue::Object(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

use serde_json::Value;

use crate::{JsonValue, Number};

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(num) => JsonValue::Number(Number::from(&num)),
            Value::String(s) => JsonValue::String(s),
            Value::Array(old) => JsonValue::Array(old.into_iter().map(JsonValue::from).collect()),
            Value::Object(old) => JsonValue::Object(
                old.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(num: &serde_json::Number) -> Self {
        if let Some(i) = num.as_i64() {
            Number::from(i)
        } else if let Some(u) = num.as_u64() {
            Number::from(u)
        } else if let Some(f) = num.as_f64() {
            Number::from(f)
        } else {
            // Only reachable with `arbitrary_precision`, where the text is kept verbatim
            num.to_string()
                .parse()
                .unwrap_or(Number::F64(f64::NAN))
        }
    }
}

impl From<JsonValue> for Value {
    /// Integers beyond `u64` and decimals beyond `f64` are narrowed to the nearest `f64`.
    /// Non-finite values become `null`.
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(num) => to_serde_number(&num).map_or(Value::Null, Value::Number),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

fn to_serde_number(num: &Number) -> Option<serde_json::Number> {
    if let Some(i) = num.as_i64() {
        return Some(i.into());
    }
    if let Number::BigInt(big) = num {
        if let Some(u) = num_traits::ToPrimitive::to_u64(big) {
            return Some(u.into());
        }
    }
    serde_json::Number::from_f64(num.as_f64())
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Bool(r)) => l == r,
        (Value::Number(l), JsonValue::Number(r)) => Number::from(l) == *r,
        (Value::String(l), JsonValue::String(r)) => l == r,
        (Value::Array(l), JsonValue::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), JsonValue::Object(r)) => {
            // `Map` is unordered, so look every key up instead of zipping
            l.len() == r.len()
                && l.iter()
                    .all(|(key, lv)| r.get(key.as_str()).is_some_and(|rv| eq(lv, rv)))
        }
        _ => false,
    }
}

use core::fmt::{self, Write};

use super::JsonValue;
use crate::escape::escape_into;

/// Compact JSON text: no whitespace between tokens, object keys in map iteration order.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::Bool(value) => write!(f, "{value}"),
            JsonValue::Number(number) => write!(f, "{number}"),
            JsonValue::String(string) => write_string(f, string),
            JsonValue::Array(items) => {
                f.write_char('[')?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            JsonValue::Object(map) => {
                f.write_char('{')?;
                for (idx, (key, value)) in map.iter().enumerate() {
                    if idx > 0 {
                        f.write_char(',')?;
                    }
                    write_string(f, key)?;
                    write!(f, ":{value}")?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_string(f: &mut fmt::Formatter<'_>, string: &str) -> fmt::Result {
    f.write_char('"')?;
    escape_into(f, string)?;
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use crate::{JsonValue, Map, Number};
    use test_case::test_case;

    #[test_case(JsonValue::Null, "null")]
    #[test_case(JsonValue::Bool(true), "true")]
    #[test_case(JsonValue::Bool(false), "false")]
    #[test_case(JsonValue::Number(Number::I16(-300)), "-300")]
    #[test_case(JsonValue::Number(Number::F32(0.5)), "0.5")]
    #[test_case(JsonValue::String("a\"b\n".into()), r#""a\"b\n""#)]
    #[test_case(JsonValue::Array(vec![]), "[]")]
    #[test_case(
        JsonValue::Array(vec![JsonValue::Null, JsonValue::Array(vec![JsonValue::Bool(true)])]),
        "[null,[true]]";
        "nested array"
    )]
    #[test_case(JsonValue::Object(Map::default()), "{}")]
    fn renders(value: JsonValue, expected: &str) {
        assert_eq!(value.render(), expected);
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn object_entries() {
        let mut map = Map::default();
        map.insert("k\"ey".to_string(), JsonValue::Number(Number::I8(1)));
        assert_eq!(JsonValue::Object(map).render(), r#"{"k\"ey":1}"#);
    }
}

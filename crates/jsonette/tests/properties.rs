use jsonette::{
    escape, from_str, parse, parse_with_options, path, BigDecimal, JsonValue, Map, Number,
    ParseErrorKind, ParseOptions, ToJson, DEFAULT_MAX_DEPTH, MAX_DEPTH, MAX_EXPONENT,
};
use fraction::GenericFraction;
use num_bigint::{BigInt, BigUint};
use test_case::test_case;

fn constructed() -> Vec<JsonValue> {
    let mut nested = Map::default();
    nested.insert("empty".to_string(), JsonValue::Object(Map::default()));
    nested.insert("list".to_string(), JsonValue::Array(vec![]));
    nested.insert("quote\"d\n".to_string(), "tab\there".into());
    let mut root = Map::default();
    root.insert("nested".to_string(), JsonValue::Object(nested));
    root.insert(
        "numbers".to_string(),
        vec![
            JsonValue::from(0_i8),
            JsonValue::from(-129_i64),
            JsonValue::from(70_000_u32),
            JsonValue::from(i64::MIN),
            JsonValue::from(u128::MAX),
            JsonValue::from(1.5_f64),
            JsonValue::from(0.1_f64),
            JsonValue::from(-1e300_f64),
            JsonValue::from(100.0_f32),
        ]
        .into(),
    );
    root.insert("flags".to_string(), vec![true, false].to_json());
    root.insert("nothing".to_string(), JsonValue::Null);
    root.insert("unicode".to_string(), "héllo ✓ \u{1F600} \u{1}".into());

    vec![
        JsonValue::Null,
        JsonValue::Bool(false),
        JsonValue::from(42_i32),
        JsonValue::from(""),
        JsonValue::Array(vec![JsonValue::Array(vec![JsonValue::Null])]),
        JsonValue::Object(root),
    ]
}

#[test]
fn render_then_parse_round_trips() {
    for value in constructed() {
        let text = value.render();
        let (parsed, rest) = parse(&text).expect("rendered text is valid");
        assert_eq!(rest, "", "{text}");
        assert_eq!(parsed, value, "{text}");
    }
}

#[test]
fn render_is_idempotent() {
    for value in constructed() {
        let once = value.render();
        let twice = from_str(&once).expect("rendered text is valid").render();
        assert_eq!(once, twice);
    }
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    let compact = from_str(r#"{"a":[1,{"b":null}],"c":"x y"}"#).expect("valid");
    let spaced = from_str(" \t{ \"a\" :\n[ 1 ,\r\n{ \"b\" : null } ] , \"c\" : \"x y\" }\n ")
        .expect("valid");
    assert_eq!(compact, spaced);
    assert_eq!(spaced.dig_str("c", &[]), Some("x y"));
}

#[test_case("{}"; "empty object")]
#[test_case("[]"; "empty array")]
#[test_case("0"; "zero")]
#[test_case("0.5"; "fraction")]
#[test_case("-0.0"; "negative zero")]
#[test_case(r#"{"a":[{}]}"#; "nested")]
fn accepted(text: &str) {
    assert!(from_str(text).is_ok(), "{text}");
}

#[test_case("{,}", ParseErrorKind::ExpectedKey; "object with lone comma")]
#[test_case("[,]", ParseErrorKind::UnexpectedCharacter(','); "array with lone comma")]
#[test_case(r#"{"a":1,}"#, ParseErrorKind::TrailingComma; "object trailing comma")]
#[test_case("[1,]", ParseErrorKind::TrailingComma; "array trailing comma")]
#[test_case(r#""\q""#, ParseErrorKind::InvalidEscape('q'); "unknown escape")]
#[test_case(r#""\u12""#, ParseErrorKind::InvalidUnicodeEscape; "short unicode escape")]
#[test_case("01", ParseErrorKind::TrailingCharacters; "leading zero")]
#[test_case("", ParseErrorKind::UnexpectedEnd; "empty input")]
#[test_case("nul", ParseErrorKind::UnexpectedEnd; "truncated literal")]
#[test_case("[1 2]", ParseErrorKind::UnexpectedCharacter('2'); "missing comma")]
#[test_case(r#"{"a" 1}"#, ParseErrorKind::ExpectedColon; "missing colon")]
fn rejected(text: &str, kind: ParseErrorKind) {
    let error = from_str(text).expect_err(text);
    assert_eq!(error.kind(), kind, "{text}: {error}");
}

#[test]
fn leading_zero_leaves_remainder() {
    let (value, rest) = parse("01").expect("valid prefix");
    assert_eq!(value, JsonValue::Number(Number::I8(0)));
    assert_eq!(rest, "1");
}

#[test_case("127", Number::I8(127))]
#[test_case("128", Number::I16(128))]
#[test_case("-32769", Number::I32(-32769))]
#[test_case("1.5", Number::F32(1.5))]
#[test_case("0.1", Number::F64(0.1))]
fn numeric_width(text: &str, expected: Number) {
    assert_eq!(from_str(text), Ok(JsonValue::Number(expected)));
}

fn power_of_ten(exponent: u64) -> BigUint {
    BigUint::from(10_u8).pow(u32::try_from(exponent).expect("small exponent"))
}

fn large(exponent: u64) -> BigDecimal {
    BigDecimal::from(power_of_ten(exponent))
}

fn small(exponent: u64) -> BigDecimal {
    let precision = usize::try_from(exponent).expect("small exponent");
    BigDecimal::from_fraction(GenericFraction::new(BigUint::from(1_u8), power_of_ten(exponent)))
        .set_precision(precision)
}

#[test_case(large(400); "above f64 range")]
#[test_case(large(MAX_EXPONENT); "largest exponent")]
#[test_case(large(MAX_EXPONENT + 1); "beyond the largest exponent")]
#[test_case(-large(MAX_EXPONENT * 3); "far beyond the largest exponent")]
#[test_case(small(400); "below f64 range")]
#[test_case(small(MAX_EXPONENT); "smallest exponent")]
#[test_case(small(MAX_EXPONENT + 1); "beyond the smallest exponent")]
#[test_case(BigDecimal::from_fraction(GenericFraction::new(2_u8, 3_u8)); "repeating digits")]
fn constructed_decimals_round_trip(decimal: BigDecimal) {
    let value = JsonValue::from(decimal);
    assert!(
        matches!(value, JsonValue::Number(Number::BigDecimal(_))),
        "{value:?}"
    );
    let text = value.render();
    assert_eq!(from_str(&text), Ok(value), "{text}");
}

#[test]
fn forty_digit_integer() {
    let digits = "1234567890123456789012345678901234567890";
    let expected = BigInt::parse_bytes(digits.as_bytes(), 10).expect("digits");
    assert_eq!(
        from_str(digits),
        Ok(JsonValue::Number(Number::BigInt(expected)))
    );
}

#[test]
fn navigation() {
    let value = from_str(r#"{"a":[1,{"b":2}]}"#).expect("valid");
    assert_eq!(
        value.dig("a", &path![1, "b"]),
        Some(&JsonValue::Number(Number::I8(2)))
    );
    assert_eq!(value.dig("a", &path![5]), None);
    assert_eq!(value.dig("a", &path!["b"]), None);
    assert_eq!(value.dig_number("a", &path![0]), Some(&Number::I8(1)));
}

#[test_case("line\nbreak")]
#[test_case("tab\tstop")]
#[test_case("say \"hi\"")]
#[test_case("back\\slash \\n"; "backslash")]
#[test_case("it's"; "single quote")]
#[test_case("\u{0}\u{1f}"; "control characters")]
fn escape_round_trip(text: &str) {
    let literal = format!("\"{}\"", escape(text));
    assert_eq!(from_str(&literal), Ok(JsonValue::String(text.to_string())));
}

#[test]
fn nesting_limit() {
    let nested = |depth: usize| format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(from_str(&nested(DEFAULT_MAX_DEPTH)).is_ok());
    let error = from_str(&nested(DEFAULT_MAX_DEPTH + 1)).expect_err("too deep");
    assert_eq!(
        error.kind(),
        ParseErrorKind::DepthLimitExceeded(DEFAULT_MAX_DEPTH)
    );
    assert_eq!(error.offset(), DEFAULT_MAX_DEPTH);

    assert!(parse_with_options("[[]]", &ParseOptions::new().with_max_depth(1)).is_err());
}

#[test]
fn deep_input_fails_instead_of_overflowing() {
    let nested = |depth: usize| format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let widest = ParseOptions::new().with_max_depth(usize::MAX);
    assert!(parse_with_options(&nested(MAX_DEPTH), &widest).is_ok());

    let error = parse_with_options(&nested(100_000), &widest).expect_err("too deep");
    assert_eq!(error.kind(), ParseErrorKind::DepthLimitExceeded(MAX_DEPTH));
    assert_eq!(error.offset(), MAX_DEPTH);
}

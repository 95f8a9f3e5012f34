//! Hand-written recursive-descent JSON parser.
//!
//! Every production matches on a distinct leading character (`n`, `t`/`f`, `-`/digit, `"`, `[`,
//! `{`), so the parser dispatches on that character directly instead of trying each production
//! in turn. The accepted language is the same.
mod number;
mod string;

use std::str::FromStr;

use crate::{
    error::{ParseError, ParseErrorKind},
    options::ParseOptions,
    JsonValue, Map,
};

pub(crate) struct Parser<'a> {
    input: &'a str,
    position: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, options: ParseOptions) -> Self {
        Self {
            input,
            position: 0,
            depth: 0,
            options,
        }
    }

    /// Byte offset of the first unconsumed character.
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Parses one value, leaving anything after it unconsumed.
    pub(crate) fn parse_value(&mut self) -> Result<JsonValue, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'n') => self.parse_literal("null", JsonValue::Null),
            Some(b't') => self.parse_literal("true", JsonValue::Bool(true)),
            Some(b'f') => self.parse_literal("false", JsonValue::Bool(false)),
            Some(b'-' | b'0'..=b'9') => self.parse_number().map(JsonValue::Number),
            Some(b'"') => self.parse_string().map(JsonValue::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            _ => Err(self.unexpected()),
        }
    }

    /// Requires that only whitespace follows the current position.
    pub(crate) fn finish(&mut self) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.position == self.input.len() {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::TrailingCharacters))
        }
    }

    fn parse_literal(&mut self, literal: &str, value: JsonValue) -> Result<JsonValue, ParseError> {
        let rest = &self.input.as_bytes()[self.position..];
        for (idx, expected) in literal.bytes().enumerate() {
            if rest.get(idx) != Some(&expected) {
                self.position += idx;
                return Err(self.unexpected());
            }
        }
        self.position += literal.len();
        Ok(value)
    }

    fn parse_array(&mut self) -> Result<JsonValue, ParseError> {
        self.enter()?;
        // `[`
        self.position += 1;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.eat(b']') {
            self.depth -= 1;
            return Ok(JsonValue::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.position += 1;
                    self.skip_whitespace();
                    if self.peek() == Some(b']') {
                        return Err(self.error(ParseErrorKind::TrailingComma));
                    }
                }
                Some(b']') => {
                    self.position += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }
        self.depth -= 1;
        Ok(JsonValue::Array(items))
    }

    fn parse_object(&mut self) -> Result<JsonValue, ParseError> {
        self.enter()?;
        // `{`
        self.position += 1;
        let mut map = Map::default();
        self.skip_whitespace();
        if self.eat(b'}') {
            self.depth -= 1;
            return Ok(JsonValue::Object(map));
        }
        loop {
            match self.peek() {
                Some(b'"') => {}
                None => return Err(self.unexpected()),
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedKey)),
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            match self.peek() {
                Some(b':') => self.position += 1,
                None => return Err(self.unexpected()),
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedColon)),
            }
            let value = self.parse_value()?;
            // Later duplicates replace earlier ones
            map.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.position += 1;
                    self.skip_whitespace();
                    if self.peek() == Some(b'}') {
                        return Err(self.error(ParseErrorKind::TrailingComma));
                    }
                }
                Some(b'}') => {
                    self.position += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }
        self.depth -= 1;
        Ok(JsonValue::Object(map))
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        let limit = self.options.max_depth();
        if self.depth >= limit {
            tracing::debug!(limit, offset = self.position, "JSON nesting limit exceeded");
            return Err(self.error(ParseErrorKind::DepthLimitExceeded(limit)));
        }
        self.depth += 1;
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = bytes.get(self.position) {
            self.position += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn eat_digits(&mut self) {
        let bytes = self.input.as_bytes();
        while bytes.get(self.position).is_some_and(u8::is_ascii_digit) {
            self.position += 1;
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.position)
    }

    /// Error for whatever is at the current position.
    fn unexpected(&self) -> ParseError {
        match self.input[self.position..].chars().next() {
            Some(c) => self.error(ParseErrorKind::UnexpectedCharacter(c)),
            None => self.error(ParseErrorKind::UnexpectedEnd),
        }
    }
}

/// Parses one JSON value from the start of `text`.
///
/// Leading whitespace is skipped. On success returns the value together with the unconsumed rest
/// of the input, which may start with whitespace. Use [`from_str`] to reject trailing content.
///
/// ```
/// use jsonette::{parse, JsonValue};
///
/// let (value, rest) = parse("  true, false").unwrap();
/// assert_eq!(value, JsonValue::Bool(true));
/// assert_eq!(rest, ", false");
/// ```
///
/// # Errors
///
/// Returns [`ParseError`] if no JSON value starts at the beginning of `text`.
pub fn parse(text: &str) -> Result<(JsonValue, &str), ParseError> {
    parse_with_options(text, &ParseOptions::default())
}

/// Same as [`parse`], with custom options.
///
/// # Errors
///
/// Returns [`ParseError`] if no JSON value starts at the beginning of `text`, or if it nests
/// deeper than the configured limit.
pub fn parse_with_options<'a>(
    text: &'a str,
    options: &ParseOptions,
) -> Result<(JsonValue, &'a str), ParseError> {
    let mut parser = Parser::new(text, *options);
    match parser.parse_value() {
        Ok(value) => {
            let consumed = parser.position();
            tracing::trace!(consumed, "Parsed JSON value");
            Ok((value, &text[consumed..]))
        }
        Err(error) => {
            tracing::debug!(kind = ?error.kind(), offset = error.offset(), "Failed to parse JSON");
            Err(error)
        }
    }
}

/// Parses `text` as exactly one JSON value surrounded by optional whitespace.
///
/// # Errors
///
/// Returns [`ParseError`] if `text` is not a single JSON value.
pub fn from_str(text: &str) -> Result<JsonValue, ParseError> {
    from_str_with_options(text, &ParseOptions::default())
}

/// Same as [`from_str`], with custom options.
///
/// # Errors
///
/// Returns [`ParseError`] if `text` is not a single JSON value within the configured limits.
pub fn from_str_with_options(text: &str, options: &ParseOptions) -> Result<JsonValue, ParseError> {
    let mut parser = Parser::new(text, *options);
    let result = parser.parse_value().and_then(|value| {
        parser.finish()?;
        Ok(value)
    });
    if let Err(error) = &result {
        tracing::debug!(kind = ?error.kind(), offset = error.offset(), "Failed to parse JSON");
    }
    result
}

impl FromStr for JsonValue {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        from_str(text)
    }
}

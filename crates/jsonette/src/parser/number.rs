use std::str::FromStr;

use num_bigint::BigInt;

use super::Parser;
use crate::{
    error::{ParseError, ParseErrorKind},
    options::ParseOptions,
    value::{Scientific, MAX_EXPONENT},
    Number,
};

impl Parser<'_> {
    /// Scans `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` and stops at the first
    /// character that can not extend it.
    pub(super) fn parse_number(&mut self) -> Result<Number, ParseError> {
        let start = self.position;
        let negative = self.eat(b'-');
        let whole_start = self.position;
        match self.peek() {
            // A leading zero is the whole integer part
            Some(b'0') => self.position += 1,
            Some(b'1'..=b'9') => self.eat_digits(),
            _ => return Err(self.error(ParseErrorKind::InvalidNumber)),
        }
        let whole = &self.input[whole_start..self.position];

        let mut fraction = "";
        if self.eat(b'.') {
            let fraction_start = self.position;
            self.eat_digits();
            if fraction_start == self.position {
                return Err(self.error(ParseErrorKind::InvalidNumber));
            }
            fraction = &self.input[fraction_start..self.position];
        }

        let mut exponent = None;
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.position += 1;
            let exponent_start = self.position;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.position += 1;
            }
            let digits_start = self.position;
            self.eat_digits();
            if digits_start == self.position {
                return Err(self.error(ParseErrorKind::InvalidNumber));
            }
            exponent = Some(&self.input[exponent_start..self.position]);
        }

        let literal = &self.input[start..self.position];
        to_number(literal, negative, whole, fraction, exponent)
            .ok_or_else(|| ParseError::new(ParseErrorKind::NumberOutOfRange, start))
    }
}

/// Converts the scanned digit groups into the narrowest exact representation.
///
/// An exponent always moves the decimal point, so `1e2` goes through the decimal path like
/// `100.0` does. Returns `None` for a non-zero mantissa with an exponent beyond
/// [`MAX_EXPONENT`].
fn to_number(
    literal: &str,
    negative: bool,
    whole: &str,
    fraction: &str,
    exponent: Option<&str>,
) -> Option<Number> {
    if exponent.is_none() && fraction.is_empty() {
        if let Ok(value) = literal.parse::<i64>() {
            return Some(Number::from(value));
        }
        return BigInt::parse_bytes(literal.as_bytes(), 10).map(Number::from_integer);
    }
    // `literal` is also valid Rust float syntax
    let nearest = literal.parse::<f64>().ok()?;
    if whole.bytes().chain(fraction.bytes()).all(|digit| digit == b'0') {
        // Zero whatever the exponent
        return Some(Number::from(nearest));
    }
    let exponent = match exponent {
        Some(exponent) => exponent
            .parse::<i64>()
            .ok()
            .filter(|exponent| exponent.unsigned_abs() <= MAX_EXPONENT)?,
        None => 0,
    };
    let digits = Scientific::from_parts(negative, whole, fraction, exponent)?;
    Some(Number::from_scientific(&digits, nearest))
}

impl FromStr for Number {
    type Err = ParseError;

    /// Parses a complete JSON number literal, without surrounding whitespace.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(text, ParseOptions::default());
        let number = parser.parse_number()?;
        if parser.position() == text.len() {
            Ok(number)
        } else {
            Err(parser.error(ParseErrorKind::TrailingCharacters))
        }
    }
}

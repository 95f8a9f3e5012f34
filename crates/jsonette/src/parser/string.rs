use super::Parser;
use crate::error::{ParseError, ParseErrorKind};

const HIGH_SURROGATES: core::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

impl Parser<'_> {
    /// Parses a string literal starting at the opening quote and returns its unescaped contents.
    ///
    /// Characters other than `"` and `\` are copied verbatim, control characters included.
    pub(super) fn parse_string(&mut self) -> Result<String, ParseError> {
        let start = self.position;
        // `"`
        self.position += 1;
        let mut buffer = String::new();
        loop {
            let rest = &self.input.as_bytes()[self.position..];
            let Some(idx) = rest.iter().position(|byte| matches!(byte, b'"' | b'\\')) else {
                return Err(ParseError::new(ParseErrorKind::UnterminatedString, start));
            };
            buffer.push_str(&self.input[self.position..self.position + idx]);
            self.position += idx;
            if self.eat(b'"') {
                return Ok(buffer);
            }
            // `\`
            self.position += 1;
            self.parse_escape(&mut buffer, start)?;
        }
    }

    fn parse_escape(&mut self, buffer: &mut String, start: usize) -> Result<(), ParseError> {
        let Some(escaped) = self.input[self.position..].chars().next() else {
            return Err(ParseError::new(ParseErrorKind::UnterminatedString, start));
        };
        let unescaped = match escaped {
            '"' | '\\' | '\'' | '/' => escaped,
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => {
                self.position += 1;
                let c = self.parse_unicode_escape()?;
                buffer.push(c);
                return Ok(());
            }
            other => return Err(self.error(ParseErrorKind::InvalidEscape(other))),
        };
        buffer.push(unescaped);
        self.position += escaped.len_utf8();
        Ok(())
    }

    /// Decodes the hex digits after `\u`, combining a surrogate pair into one character.
    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        // Points at the `\` of the escape
        let escape_start = self.position - 2;
        let invalid = || ParseError::new(ParseErrorKind::InvalidUnicodeEscape, escape_start);
        let first = self.read_hex4().ok_or_else(invalid)?;
        let code = if HIGH_SURROGATES.contains(&first) {
            if !self.input[self.position..].starts_with("\\u") {
                return Err(invalid());
            }
            self.position += 2;
            let second = self.read_hex4().ok_or_else(invalid)?;
            if !LOW_SURROGATES.contains(&second) {
                return Err(invalid());
            }
            0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
        } else if LOW_SURROGATES.contains(&first) {
            return Err(invalid());
        } else {
            first
        };
        char::from_u32(code).ok_or_else(invalid)
    }

    /// Reads exactly four case-insensitive hex digits.
    fn read_hex4(&mut self) -> Option<u32> {
        let digits = self.input.as_bytes().get(self.position..self.position + 4)?;
        let mut code = 0;
        for digit in digits {
            code = (code << 4) | char::from(*digit).to_digit(16)?;
        }
        self.position += 4;
        Some(code)
    }
}

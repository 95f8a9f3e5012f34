use core::fmt;

/// An error that occurred while parsing JSON text.
///
/// Parsing never produces a partial value: it either yields a complete value or this error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

/// The reason a parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input ended where more text was required.
    UnexpectedEnd,
    /// A character that no production accepts at this position.
    UnexpectedCharacter(char),
    /// A malformed number: missing digits after `-`, `.`, or the exponent marker.
    InvalidNumber,
    /// A number whose exponent is too large to represent.
    NumberOutOfRange,
    /// An escape sequence other than the supported ones.
    InvalidEscape(char),
    /// A `\u` escape without four hex digits, or an unpaired surrogate.
    InvalidUnicodeEscape,
    /// A string without a closing quote.
    UnterminatedString,
    /// A comma directly before `]` or `}`.
    TrailingComma,
    /// An object key not followed by `:`.
    ExpectedColon,
    /// Something other than a string where an object key belongs.
    ExpectedKey,
    /// Arrays and objects nested deeper than the configured limit.
    DepthLimitExceeded(usize),
    /// Non-whitespace text after a complete value.
    TrailingCharacters,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Byte offset into the original input where the failure was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedEnd => f.write_str("unexpected end of input"),
            ParseErrorKind::UnexpectedCharacter(c) => write!(f, "unexpected character {c:?}"),
            ParseErrorKind::InvalidNumber => f.write_str("invalid number"),
            ParseErrorKind::NumberOutOfRange => f.write_str("number out of range"),
            ParseErrorKind::InvalidEscape(c) => write!(f, "invalid escape '\\{c}'"),
            ParseErrorKind::InvalidUnicodeEscape => f.write_str("invalid unicode escape"),
            ParseErrorKind::UnterminatedString => f.write_str("unterminated string"),
            ParseErrorKind::TrailingComma => f.write_str("trailing comma"),
            ParseErrorKind::ExpectedColon => f.write_str("expected ':' after object key"),
            ParseErrorKind::ExpectedKey => f.write_str("expected a string key"),
            ParseErrorKind::DepthLimitExceeded(limit) => {
                write!(f, "nesting deeper than {limit} levels")
            }
            ParseErrorKind::TrailingCharacters => f.write_str("trailing characters"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

impl std::error::Error for ParseError {}

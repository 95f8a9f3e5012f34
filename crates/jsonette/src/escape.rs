//! Escaping of string contents for JSON output.
//!
//! Unescaping happens inside the parser's string production.
use core::fmt::{self, Write};
use std::borrow::Cow;

/// The two-character escape for characters that have one.
fn short_escape(c: char) -> Option<&'static str> {
    match c {
        '\t' => Some("\\t"),
        '\u{8}' => Some("\\b"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\u{c}' => Some("\\f"),
        '\'' => Some("\\'"),
        '"' => Some("\\\""),
        '\\' => Some("\\\\"),
        _ => None,
    }
}

fn needs_escape(c: char) -> bool {
    short_escape(c).is_some() || (c.is_ascii_control() && c != '\u{7f}')
}

/// Escapes `text` for use inside a JSON string literal.
///
/// Tab, backspace, newline, carriage return, form feed, single quote, double quote and backslash
/// get their two-character escapes. Remaining control characters below U+0020 become `\u00XX`.
/// The text is processed in a single pass, so inserted backslashes are never escaped again.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_escape) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match short_escape(c) {
            Some(escape) => escaped.push_str(escape),
            None if needs_escape(c) => push_unicode_escape(&mut escaped, c),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Pushes `\u00XX` for a control character below U+0020.
fn push_unicode_escape(out: &mut String, c: char) {
    let code = u32::from(c);
    out.push_str("\\u00");
    for nibble in [(code >> 4) & 0xf, code & 0xf] {
        out.extend(char::from_digit(nibble, 16));
    }
}

/// Writes the escaped form of `text` into `out`.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn escape_into<W: Write + ?Sized>(out: &mut W, text: &str) -> fmt::Result {
    let mut start = 0;
    for (idx, c) in text.char_indices() {
        if !needs_escape(c) {
            continue;
        }
        out.write_str(&text[start..idx])?;
        match short_escape(c) {
            Some(escape) => out.write_str(escape)?,
            None => write!(out, "\\u{:04x}", u32::from(c))?,
        }
        start = idx + c.len_utf8();
    }
    out.write_str(&text[start..])
}

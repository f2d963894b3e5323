//! Writing text out as an identifier.
//!
//! These are the inverses of [`IdentifierMatch::decode`]: decoding the output
//! of any function here yields the original text, provided it is no longer
//! than 128 code points.
//!
//! [`IdentifierMatch::decode`]: crate::identifier::IdentifierMatch::decode

use std::borrow::Cow;
use std::fmt::Write;

use sqlident_util::{IdentifierError, IdentifierResult};

use crate::class::ESCAPE_CHARACTER;
use crate::grammar::{DEFAULT_ESCAPE, ISO_PG_JAVA_IDENTIFIER};

/// Wraps `text` in double quotes, doubling any quotes inside it.
///
/// # Example
///
/// ```
/// use sqlident_lex::encode::delimited;
///
/// assert_eq!(delimited(r#"ab"cd"#), r#""ab""cd""#);
/// ```
pub fn delimited(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Writes `text` as a Unicode delimited identifier using `escape`.
///
/// Printable ASCII is written as is; every other code point becomes a
/// 4-digit escape, or a `+` 6-digit escape above U+FFFF. The escape
/// character and `"` are doubled. A `UESCAPE` clause is appended unless
/// `escape` is the default `\`.
///
/// # Errors
///
/// [`IdentifierError::InvalidEscapeCharacter`] if `escape` is a hex digit,
/// `+`, a quote or white space.
///
/// # Example
///
/// ```
/// use sqlident_lex::encode::unicode_escaped;
///
/// assert_eq!(unicode_escaped("café", '\\').unwrap(), r#"U&"caf\00E9""#);
/// assert_eq!(unicode_escaped("😀!", '!').unwrap(), r#"U&"!+01F600!!" UESCAPE '!'"#);
/// assert!(unicode_escaped("x", '+').is_err());
/// ```
pub fn unicode_escaped(text: &str, escape: char) -> IdentifierResult<String> {
    if !ESCAPE_CHARACTER.contains(escape) {
        return Err(IdentifierError::InvalidEscapeCharacter { escape });
    }

    let mut out = String::with_capacity(text.len() + 4);
    out.push_str("U&\"");
    for c in text.chars() {
        match c {
            _ if c == escape => {
                out.push(escape);
                out.push(escape);
            }
            '"' => out.push_str("\"\""),
            ' '..='~' => out.push(c),
            _ if u32::from(c) <= 0xFFFF => {
                let _ = write!(out, "{}{:04X}", escape, u32::from(c));
            }
            _ => {
                let _ = write!(out, "{}+{:06X}", escape, u32::from(c));
            }
        }
    }
    out.push('"');
    if escape != DEFAULT_ESCAPE {
        let _ = write!(out, " UESCAPE '{}'", escape);
    }
    Ok(out)
}

/// Returns `text` unchanged if it is a regular identifier by ISO,
/// PostgreSQL and Java rules, otherwise its [`delimited`] form.
///
/// Regular identifiers are case-folded by SQL, so this is only correct for
/// text whose case the reader will not fold, such as a descriptor consumer
/// that compares identifiers verbatim.
///
/// # Example
///
/// ```
/// use sqlident_lex::encode::regular_or_delimited;
///
/// assert_eq!(regular_or_delimited("employee_id"), "employee_id");
/// assert_eq!(regular_or_delimited("two words"), r#""two words""#);
/// assert_eq!(regular_or_delimited("l\u{B7}l"), "\"l\u{B7}l\"");
/// ```
pub fn regular_or_delimited(text: &str) -> Cow<'_, str> {
    if ISO_PG_JAVA_IDENTIFIER.is_match(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(delimited(text))
    }
}

//! Reducing quoted identifier bodies to literal text.
//!
//! Two steps, applied in order to the body of a Unicode identifier and the
//! first alone to a plain delimited one:
//!
//! 1. [`undouble_quotes`] turns each `""` into `"`;
//! 2. [`decode_unicode_escapes`] resolves escapes introduced by the escape
//!    character `e`:
//!
//! | escape | meaning |
//! |--------|---------|
//! | `ee` | a literal `e` |
//! | `eXXXX` | the code point with 4-hex-digit value `XXXX` |
//! | `e+XXXXXX` | the code point with 6-hex-digit value `XXXXXX` |
//!
//! Any other use of `e` is an error, never passed through verbatim.

use std::borrow::Cow;

use sqlident_util::{IdentifierError, IdentifierResult};
use tracing::debug;

use crate::cursor::Cursor;
use crate::unicode::{codepoint_to_char, parse_hex_value};

/// Replaces every `""` in a delimited body with `"`.
///
/// Borrows the body unchanged when it holds no quotes.
///
/// # Example
///
/// ```
/// use sqlident_lex::escape::undouble_quotes;
///
/// assert_eq!(undouble_quotes(r#"ab""cd"#), r#"ab"cd"#);
/// assert_eq!(undouble_quotes("plain"), "plain");
/// ```
pub fn undouble_quotes(body: &str) -> Cow<'_, str> {
    if body.contains('"') {
        Cow::Owned(body.replace("\"\"", "\""))
    } else {
        Cow::Borrowed(body)
    }
}

/// Resolves the Unicode escapes in `text` using `escape` as the escape
/// character.
///
/// Scans once from left to right; the output never contains a partially
/// substituted escape. Error offsets are byte offsets into `text`.
///
/// # Errors
///
/// - [`IdentifierError::MalformedEscape`] when `escape` is followed by
///   neither `escape`, 4 hex digits, nor `+` and 6 hex digits;
/// - [`IdentifierError::InvalidCodePoint`] when the digits name a surrogate
///   or a value above U+10FFFF.
///
/// # Example
///
/// ```
/// use sqlident_lex::escape::decode_unicode_escapes;
/// use sqlident_util::IdentifierError;
///
/// assert_eq!(decode_unicode_escapes(r"d\0061ta", '\\').unwrap(), "data");
/// assert_eq!(decode_unicode_escapes("!+01F600!!", '!').unwrap(), "😀!");
/// assert!(matches!(
///     decode_unicode_escapes(r"x\00", '\\'),
///     Err(IdentifierError::MalformedEscape { offset: 1, .. })
/// ));
/// ```
pub fn decode_unicode_escapes(text: &str, escape: char) -> IdentifierResult<String> {
    let mut decoded = String::with_capacity(text.len());
    let mut cursor = Cursor::new(text);

    while let Some(c) = cursor.advance() {
        if c != escape {
            decoded.push(c);
            continue;
        }

        let offset = cursor.position() - c.len_utf8();
        if cursor.match_char(escape) {
            decoded.push(escape);
            continue;
        }

        let width = if cursor.match_char('+') { 6 } else { 4 };
        let value = cursor
            .take_hex_digits(width)
            .and_then(parse_hex_value)
            .ok_or_else(|| {
                debug!(offset, %escape, "malformed Unicode escape");
                IdentifierError::MalformedEscape { offset, escape }
            })?;
        let decoded_char = codepoint_to_char(value).ok_or_else(|| {
            debug!(offset, value, "Unicode escape names an invalid code point");
            IdentifierError::InvalidCodePoint { offset, value }
        })?;
        decoded.push(decoded_char);
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> IdentifierResult<String> {
        decode_unicode_escapes(text, '\\')
    }

    #[test]
    fn test_undouble_quotes() {
        assert_eq!(undouble_quotes("\"\""), "\"");
        assert_eq!(undouble_quotes("\"\"\"\""), "\"\"");
        assert_eq!(undouble_quotes("a\"\"b\"\"c"), "a\"b\"c");
        assert!(matches!(undouble_quotes("abc"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_no_escapes() {
        assert_eq!(decode("plain text").unwrap(), "plain text");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_four_digit_escape() {
        assert_eq!(decode(r"\0041").unwrap(), "A");
        assert_eq!(decode(r"caf\00e9").unwrap(), "café");
        assert_eq!(decode(r"caf\00E9").unwrap(), "café");
    }

    #[test]
    fn test_six_digit_escape() {
        assert_eq!(decode(r"\+01F600").unwrap(), "😀");
        assert_eq!(decode(r"\+10FFFF").unwrap(), "\u{10FFFF}");
    }

    #[test]
    fn test_doubled_escape() {
        assert_eq!(decode(r"a\\b").unwrap(), r"a\b");
        // A doubled escape does not start a new escape
        assert_eq!(decode(r"\\0041").unwrap(), r"\0041");
    }

    #[test]
    fn test_hex_digits_beyond_escape_are_literal() {
        assert_eq!(decode(r"\00410").unwrap(), "A0");
        assert_eq!(decode(r"\+0000410").unwrap(), "A0");
    }

    #[test]
    fn test_custom_escape() {
        assert_eq!(decode_unicode_escapes("d!0061ta", '!').unwrap(), "data");
        // The default escape is an ordinary character under a custom one
        assert_eq!(decode_unicode_escapes(r"\0061", '!').unwrap(), r"\0061");
    }

    #[test]
    fn test_non_ascii_escape() {
        assert_eq!(decode_unicode_escapes("é0062é+000063éé", 'é').unwrap(), "bcé");
    }

    #[test]
    fn test_malformed_short() {
        assert_eq!(
            decode(r"x\00"),
            Err(IdentifierError::MalformedEscape {
                offset: 1,
                escape: '\\'
            })
        );
        assert!(decode(r"\+01F60").is_err());
    }

    #[test]
    fn test_malformed_trailing_escape() {
        assert_eq!(
            decode(r"abc\"),
            Err(IdentifierError::MalformedEscape {
                offset: 3,
                escape: '\\'
            })
        );
    }

    #[test]
    fn test_malformed_non_hex() {
        assert!(matches!(
            decode(r"\00g1"),
            Err(IdentifierError::MalformedEscape { .. })
        ));
        assert!(matches!(
            decode(r"\A"),
            Err(IdentifierError::MalformedEscape { .. })
        ));
        assert!(matches!(
            decode(r"\+"),
            Err(IdentifierError::MalformedEscape { .. })
        ));
    }

    #[test]
    fn test_malformed_offset_is_bytes() {
        assert_eq!(
            decode(r"éé\x"),
            Err(IdentifierError::MalformedEscape {
                offset: 4,
                escape: '\\'
            })
        );
    }

    #[test]
    fn test_surrogate_rejected() {
        assert_eq!(
            decode(r"\D800"),
            Err(IdentifierError::InvalidCodePoint {
                offset: 0,
                value: 0xD800
            })
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            decode(r"a\+110000"),
            Err(IdentifierError::InvalidCodePoint {
                offset: 1,
                value: 0x110000
            })
        );
    }
}

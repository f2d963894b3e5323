//! sqlident-lex - Recognizer and Decoder for SQL Identifiers
//!
//! This crate recognizes SQL identifiers under ISO SQL rules, PostgreSQL
//! rules, and (for descriptor readers that used them) Java identifier rules,
//! and reduces a matched identifier to its literal text.
//!
//! It is not a SQL lexer: keywords, literals and operators are never
//! tokenized. Its whole surface is the identifier sub-grammar.
//!
//! # Example Usage
//!
//! ```
//! use sqlident_lex::grammar::{ISO_REGULAR_IDENTIFIER, PG_REGULAR_IDENTIFIER};
//! use sqlident_lex::identifier::{self, IdentifierKind};
//!
//! // Does the text match a regular-identifier grammar?
//! assert!(PG_REGULAR_IDENTIFIER.is_match("_tmp$1"));
//! assert!(!ISO_REGULAR_IDENTIFIER.is_match("_tmp$1"));
//!
//! // Which form of identifier starts here, and what does it say?
//! let m = identifier::match_at(r#"U&"d!0061ta" UESCAPE '!' AS x"#, 0).unwrap();
//! assert_eq!(m.kind(), IdentifierKind::UnicodeDelimited);
//! assert_eq!(m.decode().unwrap(), "data");
//! ```
//!
//! # Module Structure
//!
//! - [`class`] - character classes per dialect, composed as set operations
//! - [`pattern`] - the grammar combinators and matcher
//! - [`grammar`] - regular, delimited and Unicode identifier grammars
//! - [`identifier`] - the combined, tagged grammar and decoding
//! - [`escape`] - quote and Unicode escape decoding
//! - [`encode`] - writing text back out as an identifier
//! - [`cursor`] - code point cursor shared by the matcher and decoder
//! - [`unicode`] - general categories, Java identifier rules, hex parsing
//!
//! # Identifier Forms
//!
//! ## Regular
//!
//! A start code point then part code points, at most 128 in all under ISO.
//! See [`class`] for what each dialect allows.
//!
//! ## Delimited
//!
//! `"..."` with 1 to 128 units inside; `""` stands for `"`.
//!
//! ## Unicode delimited
//!
//! `U&"..."`, optionally followed by `UESCAPE 'c'`. Inside, `\XXXX` and
//! `\+XXXXXX` name code points in hex and `\\` is a literal `\` (with `c` in
//! place of `\` when a `UESCAPE` clause is given). At most 128 code points
//! after decoding.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod class;
pub mod cursor;
pub mod encode;
pub mod escape;
pub mod grammar;
pub mod identifier;
pub mod pattern;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use class::CharClass;
pub use cursor::Cursor;
pub use identifier::{IdentifierGrammar, IdentifierKind, IdentifierMatch, ISO_PG_IDENTIFIER};
pub use pattern::{Captures, Group, Pattern};
pub use sqlident_util::{IdentifierError, IdentifierResult, Span, MAX_IDENTIFIER_LENGTH};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{
        ISO_PG_JAVA_IDENTIFIER, ISO_PG_REGULAR_IDENTIFIER, ISO_REGULAR_IDENTIFIER,
        PG_REGULAR_IDENTIFIER,
    };

    /// Collects every identifier in a whitespace/punctuation separated list.
    fn scan_all(source: &str) -> Vec<(IdentifierKind, String)> {
        let mut found = Vec::new();
        let mut position = 0;
        while position < source.len() {
            match identifier::match_at(source, position) {
                Some(m) => {
                    found.push((m.kind(), m.decode().unwrap()));
                    position = m.span().end;
                }
                None => {
                    position += source[position..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                }
            }
        }
        found
    }

    #[test]
    fn test_scan_column_list() {
        let source = r#"id, "Full Name", U&"caf\00E9", U&"x!+01F600" UESCAPE '!', tax"#;
        let found = scan_all(source);
        assert_eq!(
            found,
            vec![
                (IdentifierKind::Regular, "id".to_string()),
                (IdentifierKind::Delimited, "Full Name".to_string()),
                (IdentifierKind::UnicodeDelimited, "café".to_string()),
                (IdentifierKind::UnicodeDelimited, "x😀".to_string()),
                (IdentifierKind::Regular, "tax".to_string()),
            ]
        );
    }

    #[test]
    fn test_delimited_example() {
        assert_eq!(identifier::parse(r#""ab""cd""#).unwrap(), "ab\"cd");
    }

    #[test]
    fn test_unicode_default_escape_example() {
        assert_eq!(identifier::parse(r#"U&"d\0061ta""#).unwrap(), "data");
    }

    #[test]
    fn test_unicode_custom_escape_example() {
        assert_eq!(
            identifier::parse(r#"U&"d!0061ta" UESCAPE '!'"#).unwrap(),
            "data"
        );
    }

    #[test]
    fn test_malformed_escape_example() {
        assert!(matches!(
            identifier::parse(r#"U&"x\00""#),
            Err(IdentifierError::MalformedEscape { .. })
        ));
    }

    #[test]
    fn test_four_and_six_digit_round_trip() {
        for c in ['\u{E9}', '\u{1F600}'] {
            let encoded = encode::unicode_escaped(&c.to_string(), '\\').unwrap();
            assert_eq!(identifier::parse(&encoded).unwrap(), c.to_string());
        }
        assert_eq!(identifier::parse(r#"U&"\00E9""#).unwrap(), "é");
        assert_eq!(identifier::parse(r#"U&"\+01F600""#).unwrap(), "😀");
    }

    #[test]
    fn test_length_boundaries() {
        let regular_max = "k".repeat(MAX_IDENTIFIER_LENGTH);
        let regular_over = "k".repeat(MAX_IDENTIFIER_LENGTH + 1);
        assert!(ISO_REGULAR_IDENTIFIER.is_match(&regular_max));
        assert!(!ISO_REGULAR_IDENTIFIER.is_match(&regular_over));

        assert_eq!(
            identifier::parse(&regular_over),
            Err(IdentifierError::LengthExceeded {
                length: 129,
                max: 128
            })
        );
        assert_eq!(
            identifier::parse(&format!("\"{}\"", regular_over)),
            Err(IdentifierError::LengthExceeded {
                length: 129,
                max: 128
            })
        );
        assert!(matches!(
            identifier::parse(&format!("U&\"{}\"", regular_over)),
            Err(IdentifierError::LengthExceeded { length: 129, .. })
        ));
    }

    #[test]
    fn test_scan_never_splits_over_long_identifier() {
        let source = format!("{} x", "a".repeat(129));
        let m = identifier::match_at(&source, 0).unwrap();
        assert_eq!(m.span(), Span::new(0, 129));
        assert!(matches!(
            m.decode(),
            Err(IdentifierError::LengthExceeded { length: 129, .. })
        ));
        let next = identifier::match_at(&source, 130).unwrap();
        assert_eq!(next.decode().unwrap(), "x");
    }

    #[test]
    fn test_grammars_are_nested() {
        for text in ["abc", "Straße", "x_1", "l\u{B7}l", "日本語"] {
            assert!(ISO_PG_REGULAR_IDENTIFIER.is_match(text), "{}", text);
            assert!(ISO_REGULAR_IDENTIFIER.is_match(text), "{}", text);
            assert!(PG_REGULAR_IDENTIFIER.is_match(text), "{}", text);
        }
        assert!(ISO_PG_JAVA_IDENTIFIER.is_match("Straße"));
    }

    #[test]
    fn test_grammars_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let text = format!("U&\"t\\{:04X}\"", 0x61 + i);
                    identifier::parse(&text).unwrap()
                })
            })
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec!["ta", "tb", "tc", "td"]);
    }
}

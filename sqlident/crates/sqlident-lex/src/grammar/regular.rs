//! Regular (unquoted) identifiers.
//!
//! One start code point followed by part code points. Where ISO rules apply
//! the whole identifier is at most [`MAX_IDENTIFIER_LENGTH`] code points;
//! PostgreSQL alone sets no limit at the lexical level.
//!
//! A capped grammar never matches a prefix of a longer run of part code
//! points: text that is too long does not match at all.

use sqlident_util::MAX_IDENTIFIER_LENGTH;

use crate::class::{
    ISO_PART, ISO_PG_JAVA_PART, ISO_PG_JAVA_START, ISO_PG_PART, ISO_PG_START, ISO_START, PG_PART,
    PG_START,
};
use crate::pattern::Pattern;

/// Part code points allowed after the start code point.
const MAX_PARTS: usize = MAX_IDENTIFIER_LENGTH - 1;

/// A complete regular identifier as allowed by ISO.
pub const ISO_REGULAR_IDENTIFIER: Pattern = Pattern::Seq(&[
    Pattern::Class(ISO_START),
    Pattern::Repeat {
        item: &Pattern::Class(ISO_PART),
        min: 0,
        max: Some(MAX_PARTS),
    },
    Pattern::NotFollowedBy(ISO_PART),
]);

/// A complete regular identifier as allowed by PostgreSQL.
pub const PG_REGULAR_IDENTIFIER: Pattern = Pattern::Seq(&[
    Pattern::Class(PG_START),
    Pattern::Repeat {
        item: &Pattern::Class(PG_PART),
        min: 0,
        max: None,
    },
]);

/// A regular identifier satisfying both ISO and PostgreSQL rules.
///
/// Both dialects are checked at every position, so a string one dialect
/// would cut short at a different length than the other never matches past
/// the shorter of the two.
///
/// ```
/// use sqlident_lex::grammar::ISO_PG_REGULAR_IDENTIFIER;
///
/// assert!(ISO_PG_REGULAR_IDENTIFIER.is_match("café_2"));
/// assert!(!ISO_PG_REGULAR_IDENTIFIER.is_match("_private")); // PG only
/// assert!(!ISO_PG_REGULAR_IDENTIFIER.is_match("price$"));   // PG only
/// assert!(!ISO_PG_REGULAR_IDENTIFIER.is_match("a\u{2003}")); // neither
/// ```
pub const ISO_PG_REGULAR_IDENTIFIER: Pattern = Pattern::Seq(&[
    Pattern::Class(ISO_PG_START),
    Pattern::Repeat {
        item: &Pattern::Class(ISO_PG_PART),
        min: 0,
        max: Some(MAX_PARTS),
    },
    Pattern::NotFollowedBy(ISO_PG_PART),
]);

/// An identifier by ISO SQL, PostgreSQL and Java rules.
///
/// Java allows no other form of identifier, so this is the safest form to
/// write into a deployment descriptor that an older reader, which used Java
/// identifier rules, might load.
pub const ISO_PG_JAVA_IDENTIFIER: Pattern = Pattern::Seq(&[
    Pattern::Class(ISO_PG_JAVA_START),
    Pattern::Repeat {
        item: &Pattern::Class(ISO_PG_JAVA_PART),
        min: 0,
        max: Some(MAX_PARTS),
    },
    Pattern::NotFollowedBy(ISO_PG_JAVA_PART),
]);

/// An ISO and PostgreSQL regular identifier of any length.
///
/// Takes the whole run of part code points so that an over-long identifier
/// is recognized as one token; its length is checked when it is decoded.
pub(crate) const ISO_PG_REGULAR_TOKEN: Pattern = Pattern::Seq(&[
    Pattern::Class(ISO_PG_START),
    Pattern::Repeat {
        item: &Pattern::Class(ISO_PG_PART),
        min: 0,
        max: None,
    },
]);

#[cfg(test)]
mod tests {
    use super::*;
    use sqlident_util::Span;

    #[test]
    fn test_iso_regular_simple() {
        assert!(ISO_REGULAR_IDENTIFIER.is_match("employee"));
        assert!(ISO_REGULAR_IDENTIFIER.is_match("Employee_2"));
        assert!(ISO_REGULAR_IDENTIFIER.is_match("naïve"));
        assert!(ISO_REGULAR_IDENTIFIER.is_match("l\u{B7}l"));
        assert!(!ISO_REGULAR_IDENTIFIER.is_match("2nd"));
        assert!(!ISO_REGULAR_IDENTIFIER.is_match("_x"));
        assert!(!ISO_REGULAR_IDENTIFIER.is_match("a$"));
        assert!(!ISO_REGULAR_IDENTIFIER.is_match(""));
    }

    #[test]
    fn test_iso_regular_length_boundary() {
        let max = "a".repeat(MAX_IDENTIFIER_LENGTH);
        let over = "a".repeat(MAX_IDENTIFIER_LENGTH + 1);
        assert!(ISO_REGULAR_IDENTIFIER.is_match(&max));
        assert!(!ISO_REGULAR_IDENTIFIER.is_match(&over));
        // No prefix of an over-long identifier matches either
        assert_eq!(ISO_REGULAR_IDENTIFIER.match_at(&over, 0), None);
        assert_eq!(
            ISO_REGULAR_IDENTIFIER.match_at(&format!("{} x", max), 0),
            Some(Span::new(0, MAX_IDENTIFIER_LENGTH))
        );
    }

    #[test]
    fn test_iso_regular_length_counts_code_points() {
        let max = "é".repeat(MAX_IDENTIFIER_LENGTH);
        assert!(ISO_REGULAR_IDENTIFIER.is_match(&max));
        assert!(!ISO_REGULAR_IDENTIFIER.is_match(&format!("{}é", max)));
    }

    #[test]
    fn test_pg_regular() {
        assert!(PG_REGULAR_IDENTIFIER.is_match("_private"));
        assert!(PG_REGULAR_IDENTIFIER.is_match("price$"));
        assert!(PG_REGULAR_IDENTIFIER.is_match("😀face"));
        assert!(!PG_REGULAR_IDENTIFIER.is_match("$price"));
        assert!(!PG_REGULAR_IDENTIFIER.is_match("9lives"));
        assert!(!PG_REGULAR_IDENTIFIER.is_match("a-b"));
    }

    #[test]
    fn test_pg_regular_has_no_length_cap() {
        let long = "a".repeat(1000);
        assert!(PG_REGULAR_IDENTIFIER.is_match(&long));
    }

    #[test]
    fn test_iso_pg_stops_where_either_dialect_stops() {
        // '$' ends the ISO identifier; PG would continue
        assert_eq!(
            ISO_PG_REGULAR_IDENTIFIER.match_at("ab$cd", 0),
            Some(Span::new(0, 2))
        );
        // U+1F600 ends the ISO identifier; PG would continue
        assert_eq!(
            ISO_PG_REGULAR_IDENTIFIER.match_at("ab😀", 0),
            Some(Span::new(0, 2))
        );
    }

    #[test]
    fn test_iso_pg_length_cap() {
        assert!(ISO_PG_REGULAR_IDENTIFIER.is_match(&"z".repeat(128)));
        assert!(!ISO_PG_REGULAR_IDENTIFIER.is_match(&"z".repeat(129)));
    }

    #[test]
    fn test_iso_pg_never_splits_long_run() {
        let text = format!("{} x", "a".repeat(129));
        assert_eq!(ISO_PG_REGULAR_IDENTIFIER.match_at(&text, 0), None);
        assert_eq!(ISO_PG_JAVA_IDENTIFIER.match_at(&text, 0), None);
        assert_eq!(ISO_PG_REGULAR_TOKEN.match_at(&text, 0), Some(Span::new(0, 129)));
    }

    #[test]
    fn test_iso_pg_java() {
        assert!(ISO_PG_JAVA_IDENTIFIER.is_match("employee_id"));
        assert!(ISO_PG_JAVA_IDENTIFIER.is_match("Ünïcödé"));
        // Middle dot is an ISO and PG part, but not a Java one
        assert!(ISO_PG_REGULAR_IDENTIFIER.is_match("l\u{B7}l"));
        assert!(!ISO_PG_JAVA_IDENTIFIER.is_match("l\u{B7}l"));
        assert!(!ISO_PG_JAVA_IDENTIFIER.is_match("_x"));
    }
}

//! Edge case tests for sqlident-lex

#[cfg(test)]
mod tests {
    use crate::grammar::{DELIMITED_IDENTIFIER, ISO_PG_REGULAR_IDENTIFIER};
    use crate::identifier::{self, IdentifierKind};
    use crate::{IdentifierError, Span};

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_text() {
        assert!(identifier::match_at("", 0).is_none());
        assert!(identifier::match_exact("").is_none());
    }

    #[test]
    fn test_edge_position_past_end() {
        assert!(identifier::match_at("abc", 4).is_none());
        assert!(identifier::match_at("abc", 3).is_none());
    }

    #[test]
    fn test_edge_position_inside_code_point() {
        assert!(identifier::match_at("é", 1).is_none());
    }

    #[test]
    fn test_edge_single_code_point() {
        let m = identifier::match_exact("x").unwrap();
        assert_eq!(m.kind(), IdentifierKind::Regular);
        let m = identifier::match_exact("\"x\"").unwrap();
        assert_eq!(m.decode().unwrap(), "x");
    }

    #[test]
    fn test_edge_quote_only_body() {
        // A body of one "" pair decodes to a single quote
        assert_eq!(identifier::parse("\"\"\"\"").unwrap(), "\"");
    }

    #[test]
    fn test_edge_u_alone_is_regular() {
        let m = identifier::match_exact("U").unwrap();
        assert_eq!(m.kind(), IdentifierKind::Regular);
        let m = identifier::match_exact("U&").map(|m| m.kind());
        assert_eq!(m, None);
    }

    #[test]
    fn test_edge_unicode_body_with_whitespace_and_newlines() {
        assert_eq!(identifier::parse("U&\"a b\nc\"").unwrap(), "a b\nc");
    }

    #[test]
    fn test_edge_escape_specifier_requires_quotes() {
        assert!(identifier::match_exact(r#"U&"x" UESCAPE !"#).is_none());
        assert!(identifier::match_exact(r#"U&"x" UESCAPE '!!'"#).is_none());
    }

    #[test]
    fn test_edge_escape_clause_without_leading_space() {
        assert_eq!(identifier::parse(r#"U&"!0041"UESCAPE'!'"#).unwrap(), "A");
    }

    #[test]
    fn test_edge_escape_character_may_be_the_default_explicitly() {
        assert_eq!(
            identifier::parse(r#"U&"\0041" UESCAPE '\'"#).unwrap(),
            "A"
        );
    }

    #[test]
    fn test_edge_custom_escape_leaves_backslash_alone() {
        assert_eq!(
            identifier::parse(r#"U&"a\b" UESCAPE '#'"#).unwrap(),
            r"a\b"
        );
    }

    #[test]
    fn test_edge_malformed_after_valid_escapes() {
        assert!(matches!(
            identifier::parse(r#"U&"\0041\0042\004""#),
            Err(IdentifierError::MalformedEscape { offset: 10, .. })
        ));
    }

    #[test]
    fn test_edge_surrogate_escape() {
        assert!(matches!(
            identifier::parse(r#"U&"\DC00""#),
            Err(IdentifierError::InvalidCodePoint { value: 0xDC00, .. })
        ));
    }

    #[test]
    fn test_edge_long_regular_run() {
        let text = "a".repeat(10_000);
        assert_eq!(ISO_PG_REGULAR_IDENTIFIER.match_at(&text, 0), None);
        let m = identifier::match_exact(&text).unwrap();
        assert_eq!(m.span(), Span::new(0, 10_000));
        assert_eq!(
            m.decode(),
            Err(IdentifierError::LengthExceeded {
                length: 10_000,
                max: 128
            })
        );
    }

    #[test]
    fn test_edge_long_unterminated_delimited() {
        let text = format!("\"{}", "a".repeat(10_000));
        assert_eq!(DELIMITED_IDENTIFIER.match_at(&text, 0), None);
        assert!(identifier::match_at(&text, 0).is_none());
    }

    #[test]
    fn test_edge_decoded_length_counts_code_points_not_bytes() {
        let text = format!("U&\"{}\"", r"\+01F600".repeat(128));
        assert_eq!(identifier::parse(&text).unwrap().chars().count(), 128);
    }
}

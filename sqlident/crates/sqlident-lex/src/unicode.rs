//! Unicode utilities for the identifier lexer.
//!
//! General categories come from `unicode-general-category`; everything here
//! is a pure function of a single code point or a short run of hex digits.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Returns the Unicode general category of a character.
///
/// # Example
///
/// ```
/// use sqlident_lex::unicode::category;
/// use unicode_general_category::GeneralCategory;
///
/// assert_eq!(category('A'), GeneralCategory::UppercaseLetter);
/// assert_eq!(category('_'), GeneralCategory::ConnectorPunctuation);
/// ```
#[inline]
pub fn category(c: char) -> GeneralCategory {
    get_general_category(c)
}

/// Checks if a character is Unicode `White_Space`.
#[inline]
pub fn is_white_space(c: char) -> bool {
    c.is_whitespace()
}

/// Checks if a character may start a Java identifier.
///
/// Java accepts letters, letter numbers, currency symbols and connector
/// punctuation in the first position.
///
/// # Example
///
/// ```
/// use sqlident_lex::unicode::is_java_identifier_start;
///
/// assert!(is_java_identifier_start('a'));
/// assert!(is_java_identifier_start('$'));
/// assert!(is_java_identifier_start('_'));
/// assert!(!is_java_identifier_start('1'));
/// ```
pub fn is_java_identifier_start(c: char) -> bool {
    matches!(
        category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::LetterNumber
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ConnectorPunctuation
    )
}

/// Checks if a character may continue a Java identifier.
///
/// # Example
///
/// ```
/// use sqlident_lex::unicode::is_java_identifier_part;
///
/// assert!(is_java_identifier_part('1'));
/// assert!(is_java_identifier_part('\u{0301}'));  // combining acute accent
/// assert!(!is_java_identifier_part('-'));
/// ```
pub fn is_java_identifier_part(c: char) -> bool {
    is_java_identifier_start(c)
        || matches!(
            category(c),
            GeneralCategory::DecimalNumber
                | GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
        )
        || is_identifier_ignorable(c)
}

/// Checks if a character is ignorable within a Java identifier.
///
/// These are the non-whitespace ISO control characters and the format
/// characters (category Cf).
pub fn is_identifier_ignorable(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{E}'..='\u{1B}' | '\u{7F}'..='\u{9F}')
        || category(c) == GeneralCategory::Format
}

/// Converts a hex character to its numeric value.
///
/// # Example
///
/// ```
/// use sqlident_lex::unicode::hex_digit_to_value;
///
/// assert_eq!(hex_digit_to_value('0'), Some(0));
/// assert_eq!(hex_digit_to_value('a'), Some(10));
/// assert_eq!(hex_digit_to_value('F'), Some(15));
/// assert_eq!(hex_digit_to_value('g'), None);
/// ```
pub fn hex_digit_to_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Parses a run of up to 8 hex digits into a u32.
///
/// Unlike a code point parser this does not range-check the result, so a
/// caller can tell a malformed escape from one naming an invalid value.
///
/// # Example
///
/// ```
/// use sqlident_lex::unicode::parse_hex_value;
///
/// assert_eq!(parse_hex_value("0061"), Some(0x61));
/// assert_eq!(parse_hex_value("01F600"), Some(0x1F600));
/// assert_eq!(parse_hex_value("110000"), Some(0x110000));
/// assert_eq!(parse_hex_value("00G1"), None);
/// assert_eq!(parse_hex_value(""), None);
/// ```
pub fn parse_hex_value(hex: &str) -> Option<u32> {
    if hex.is_empty() || hex.len() > 8 {
        return None;
    }
    hex.chars().try_fold(0u32, |value, c| {
        Some((value << 4) | u32::from(hex_digit_to_value(c)?))
    })
}

/// Checks if a codepoint is a valid Unicode scalar value.
///
/// Valid scalar values are 0x0000 to 0xD7FF and 0xE000 to 0x10FFFF.
///
/// # Example
///
/// ```
/// use sqlident_lex::unicode::is_valid_scalar;
///
/// assert!(is_valid_scalar(0x41));
/// assert!(is_valid_scalar(0x1F600));
/// assert!(!is_valid_scalar(0xD800));
/// assert!(!is_valid_scalar(0x110000));
/// ```
pub fn is_valid_scalar(codepoint: u32) -> bool {
    codepoint <= 0x10FFFF && !(0xD800..=0xDFFF).contains(&codepoint)
}

/// Converts a codepoint to a char if valid.
pub fn codepoint_to_char(codepoint: u32) -> Option<char> {
    if is_valid_scalar(codepoint) {
        char::from_u32(codepoint)
    } else {
        None
    }
}

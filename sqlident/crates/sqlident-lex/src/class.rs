//! Character classes for identifier positions.
//!
//! A [`CharClass`] is a membership test over one code point. Classes are
//! plain `const` data, composed with [`CharClass::Union`],
//! [`CharClass::Intersection`] and [`CharClass::Complement`], so combining
//! two dialects is a set operation on typed values rather than splicing
//! pattern text together.
//!
//! # Dialects
//!
//! | class | members |
//! |-------|---------|
//! | [`ISO_START`] | Lu, Ll, Lt, Lm, Lo, Nl |
//! | [`ISO_PART`] | [`ISO_START`], Mn, Mc, Nd, Pc, Cf, U+00B7 |
//! | [`PG_START`] | `A-Z`, `a-z`, `_`, any non-ASCII code point |
//! | [`PG_PART`] | [`PG_START`], `0-9`, `$` |
//! | [`JAVA_START`] | letters, Nl, Sc, Pc |
//! | [`JAVA_PART`] | [`JAVA_START`], Nd, Mn, Mc, identifier-ignorable |
//!
//! ```
//! use sqlident_lex::class::{ISO_PG_START, ISO_START, PG_START};
//!
//! // 'é' is a letter to ISO and non-ASCII to PostgreSQL
//! assert!(ISO_PG_START.contains('é'));
//! // '_' starts a PostgreSQL identifier but is punctuation to ISO
//! assert!(PG_START.contains('_'));
//! assert!(!ISO_START.contains('_'));
//! assert!(!ISO_PG_START.contains('_'));
//! ```

use unicode_general_category::GeneralCategory;

use crate::unicode::{category, is_java_identifier_part, is_java_identifier_start, is_white_space};

/// A set of code points.
#[derive(Clone, Copy, Debug)]
pub enum CharClass {
    /// Code points whose general category is listed.
    Categories(&'static [GeneralCategory]),
    /// Exactly the listed code points.
    Chars(&'static [char]),
    /// An inclusive code point range.
    Range(char, char),
    /// Every code point above U+007F.
    NonAscii,
    /// Unicode `White_Space`.
    WhiteSpace,
    /// Code points Java accepts first in an identifier.
    JavaIdentifierStart,
    /// Code points Java accepts after the first in an identifier.
    JavaIdentifierPart,
    /// Members of any listed class.
    Union(&'static [CharClass]),
    /// Members of every listed class.
    Intersection(&'static [CharClass]),
    /// Code points outside the class.
    Complement(&'static CharClass),
}

impl CharClass {
    /// Returns true if `c` is a member of this class.
    pub fn contains(&self, c: char) -> bool {
        match *self {
            CharClass::Categories(categories) => categories.contains(&category(c)),
            CharClass::Chars(chars) => chars.contains(&c),
            CharClass::Range(low, high) => (low..=high).contains(&c),
            CharClass::NonAscii => !c.is_ascii(),
            CharClass::WhiteSpace => is_white_space(c),
            CharClass::JavaIdentifierStart => is_java_identifier_start(c),
            CharClass::JavaIdentifierPart => is_java_identifier_part(c),
            CharClass::Union(classes) => classes.iter().any(|class| class.contains(c)),
            CharClass::Intersection(classes) => classes.iter().all(|class| class.contains(c)),
            CharClass::Complement(class) => !class.contains(c),
        }
    }
}

/// Allowed first in a regular identifier by ISO.
pub const ISO_START: CharClass = CharClass::Categories(&[
    GeneralCategory::UppercaseLetter,
    GeneralCategory::LowercaseLetter,
    GeneralCategory::TitlecaseLetter,
    GeneralCategory::ModifierLetter,
    GeneralCategory::OtherLetter,
    GeneralCategory::LetterNumber,
]);

/// Allowed after the first position of a regular identifier by ISO.
pub const ISO_PART: CharClass = CharClass::Union(&[
    ISO_START,
    CharClass::Categories(&[
        GeneralCategory::NonspacingMark,
        GeneralCategory::SpacingMark,
        GeneralCategory::DecimalNumber,
        GeneralCategory::ConnectorPunctuation,
        GeneralCategory::Format,
    ]),
    // MIDDLE DOT, kept by ISO for Catalan
    CharClass::Chars(&['\u{B7}']),
]);

/// Allowed first in a regular identifier by PostgreSQL (unchanged since 7.4).
pub const PG_START: CharClass = CharClass::Union(&[
    CharClass::Range('A', 'Z'),
    CharClass::Range('a', 'z'),
    CharClass::Chars(&['_']),
    CharClass::NonAscii,
]);

/// Allowed after the first position of a regular identifier by PostgreSQL.
pub const PG_PART: CharClass = CharClass::Union(&[
    PG_START,
    CharClass::Range('0', '9'),
    CharClass::Chars(&['$']),
]);

/// Allowed first in a Java identifier.
pub const JAVA_START: CharClass = CharClass::JavaIdentifierStart;

/// Allowed after the first position of a Java identifier.
pub const JAVA_PART: CharClass = CharClass::JavaIdentifierPart;

/// First position acceptable to both ISO and PostgreSQL.
pub const ISO_PG_START: CharClass = CharClass::Intersection(&[ISO_START, PG_START]);

/// Later positions acceptable to both ISO and PostgreSQL.
pub const ISO_PG_PART: CharClass = CharClass::Intersection(&[ISO_PART, PG_PART]);

/// First position acceptable to ISO, PostgreSQL and Java.
pub const ISO_PG_JAVA_START: CharClass =
    CharClass::Intersection(&[ISO_START, PG_START, JAVA_START]);

/// Later positions acceptable to ISO, PostgreSQL and Java.
pub const ISO_PG_JAVA_PART: CharClass = CharClass::Intersection(&[ISO_PART, PG_PART, JAVA_PART]);

/// ASCII hex digits.
pub const HEX_DIGIT: CharClass = CharClass::Union(&[
    CharClass::Range('0', '9'),
    CharClass::Range('A', 'F'),
    CharClass::Range('a', 'f'),
]);

/// Unicode white space.
pub const WHITE_SPACE: CharClass = CharClass::WhiteSpace;

/// Anything but a double quote.
pub const NOT_DOUBLE_QUOTE: CharClass = CharClass::Complement(&CharClass::Chars(&['"']));

/// Characters usable as a Unicode escape character.
///
/// Hex digits, `+`, quotes and white space would make escapes ambiguous.
pub const ESCAPE_CHARACTER: CharClass = CharClass::Complement(&CharClass::Union(&[
    HEX_DIGIT,
    CharClass::Chars(&['+', '\'', '"']),
    WHITE_SPACE,
]));

//! Unicode-escaped delimited identifiers.
//!
//! `U&"d\0061ta"` or, with a chosen escape character,
//! `U&"d!0061ta" UESCAPE '!'`. The grammar only recognizes the token; the
//! escapes are resolved by [`crate::escape`].

use crate::class::{CharClass, ESCAPE_CHARACTER, WHITE_SPACE};
use crate::grammar::delimited::QUOTED_UNIT;
use crate::pattern::{Group, Pattern};

/// Escape character used when no `UESCAPE` clause is given.
pub const DEFAULT_ESCAPE: char = '\\';

const OPTIONAL_WHITE_SPACE: Pattern = Pattern::Repeat {
    item: &Pattern::Class(WHITE_SPACE),
    min: 0,
    max: None,
};

/// The optional `UESCAPE 'c'` clause trailing a Unicode identifier.
///
/// The escape character is captured as [`Group::Escape`]. A clause naming a
/// character that is not allowed (a hex digit, `+`, a quote or white space)
/// does not match, so it is left unconsumed rather than rejected.
///
/// ```
/// use sqlident_lex::grammar::UNICODE_ESCAPE_SPECIFIER;
///
/// assert!(UNICODE_ESCAPE_SPECIFIER.is_match(" UESCAPE '!'"));
/// assert!(UNICODE_ESCAPE_SPECIFIER.is_match("uescape'#'"));
/// assert!(UNICODE_ESCAPE_SPECIFIER.is_match(""));
/// assert!(!UNICODE_ESCAPE_SPECIFIER.is_match(" UESCAPE '+'"));
/// ```
pub const UNICODE_ESCAPE_SPECIFIER: Pattern = Pattern::Repeat {
    item: &Pattern::Seq(&[
        OPTIONAL_WHITE_SPACE,
        Pattern::Keyword("UESCAPE"),
        OPTIONAL_WHITE_SPACE,
        Pattern::Char('\''),
        Pattern::Capture(Group::Escape, &Pattern::Class(ESCAPE_CHARACTER)),
        Pattern::Char('\''),
    ]),
    min: 0,
    max: Some(1),
};

/// A Unicode delimited identifier.
///
/// The body is captured as [`Group::Body`] and still needs `""` reduced and
/// escapes decoded. Its length is not limited here: the limit applies to
/// the decoded text.
pub const UNICODE_DELIMITED_IDENTIFIER: Pattern = Pattern::Seq(&[
    Pattern::Class(CharClass::Chars(&['U', 'u'])),
    Pattern::Char('&'),
    Pattern::Char('"'),
    Pattern::Capture(
        Group::Body,
        &Pattern::Repeat {
            item: &QUOTED_UNIT,
            min: 1,
            max: None,
        },
    ),
    Pattern::Char('"'),
    UNICODE_ESCAPE_SPECIFIER,
]);

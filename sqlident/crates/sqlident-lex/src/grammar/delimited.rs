//! Delimited (quoted) identifiers.

use sqlident_util::MAX_IDENTIFIER_LENGTH;

use crate::class::NOT_DOUBLE_QUOTE;
use crate::pattern::{Group, Pattern};

/// One unit of a quoted body: any code point but `"`, or `""` standing for a
/// single `"`.
pub(super) const QUOTED_UNIT: Pattern = Pattern::Choice(&[
    Pattern::Class(NOT_DOUBLE_QUOTE),
    Pattern::Literal("\"\""),
]);

/// A complete delimited identifier as allowed by ISO.
///
/// The body, captured as [`Group::Body`], is 1 to 128 units long before
/// `""` pairs are reduced; the decoded text may be shorter. PostgreSQL uses
/// the same form for elements of a list-quoted setting.
///
/// ```
/// use sqlident_lex::grammar::DELIMITED_IDENTIFIER;
///
/// assert!(DELIMITED_IDENTIFIER.is_match(r#""My ""quoted"" name""#));
/// assert!(!DELIMITED_IDENTIFIER.is_match(r#""""#));
/// ```
pub const DELIMITED_IDENTIFIER: Pattern = Pattern::Seq(&[
    Pattern::Char('"'),
    Pattern::Capture(
        Group::Body,
        &Pattern::Repeat {
            item: &QUOTED_UNIT,
            min: 1,
            max: Some(MAX_IDENTIFIER_LENGTH),
        },
    ),
    Pattern::Char('"'),
]);

/// A delimited identifier with a body of any length.
///
/// Used where an over-long body must still be recognized as one token; the
/// length is checked when it is decoded. Decoding turns each unit into one
/// code point, so the decoded length equals the unit count.
pub(crate) const DELIMITED_TOKEN: Pattern = Pattern::Seq(&[
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
]);

//! Recognizing and decoding identifiers of any form.
//!
//! [`ISO_PG_IDENTIFIER`] accepts any identifier valid under both ISO and
//! PostgreSQL rules: a regular identifier, a delimited identifier, or a
//! Unicode delimited identifier. A successful match is an
//! [`IdentifierMatch`] saying which of the three it was, and
//! [`IdentifierMatch::decode`] reduces it to the identifier's literal text.
//!
//! ```
//! use sqlident_lex::identifier::{self, IdentifierKind};
//!
//! let m = identifier::match_exact(r#"U&"d\0061ta""#).unwrap();
//! assert_eq!(m.kind(), IdentifierKind::UnicodeDelimited);
//! assert_eq!(m.decode().unwrap(), "data");
//!
//! assert_eq!(identifier::parse(r#""ab""cd""#).unwrap(), r#"ab"cd"#);
//! assert_eq!(identifier::parse("MixedCase").unwrap(), "MixedCase");
//! ```

use std::fmt;

use sqlident_util::{IdentifierError, IdentifierResult, Span, MAX_IDENTIFIER_LENGTH};
use tracing::{debug, trace};

use crate::escape::{decode_unicode_escapes, undouble_quotes};
use crate::grammar::{
    DEFAULT_ESCAPE, DELIMITED_TOKEN, ISO_PG_REGULAR_TOKEN, UNICODE_DELIMITED_IDENTIFIER,
};
use crate::pattern::{Captures, Group, Pattern};

/// The syntactic form of an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Unquoted.
    Regular,
    /// Quoted, `""` standing for `"`.
    Delimited,
    /// `U&"..."`, with Unicode escapes.
    UnicodeDelimited,
}

impl IdentifierKind {
    /// Short lowercase name of the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Regular => "regular",
            IdentifierKind::Delimited => "delimited",
            IdentifierKind::UnicodeDelimited => "unicode-delimited",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tagged alternative of an [`IdentifierGrammar`].
#[derive(Clone, Copy, Debug)]
pub struct Alternative {
    /// The form a match of `pattern` represents.
    pub kind: IdentifierKind,
    /// The grammar for that form.
    pub pattern: &'static Pattern,
}

/// An alternation of identifier forms, each tagged with its kind.
#[derive(Clone, Copy, Debug)]
pub struct IdentifierGrammar {
    alternatives: &'static [Alternative],
}

/// Any identifier valid by both ISO and PostgreSQL rules.
///
/// The alternatives take identifiers of any length, so an over-long one is
/// still matched as a single token. [`IdentifierMatch::decode`] rejects it
/// with [`IdentifierError::LengthExceeded`].
pub const ISO_PG_IDENTIFIER: IdentifierGrammar = IdentifierGrammar {
    alternatives: &[
        Alternative {
            kind: IdentifierKind::Regular,
            pattern: &ISO_PG_REGULAR_TOKEN,
        },
        Alternative {
            kind: IdentifierKind::Delimited,
            pattern: &DELIMITED_TOKEN,
        },
        Alternative {
            kind: IdentifierKind::UnicodeDelimited,
            pattern: &UNICODE_DELIMITED_IDENTIFIER,
        },
    ],
};

/// A matched identifier, tagged with its form.
///
/// Borrows the text it was matched in; spans are byte offsets into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierMatch<'a> {
    /// A regular identifier.
    Regular {
        /// Span of the identifier.
        span: Span,
        /// The identifier text.
        text: &'a str,
    },
    /// A delimited identifier.
    Delimited {
        /// Span of the whole token, quotes included.
        span: Span,
        /// Text between the quotes, `""` not yet reduced.
        body: &'a str,
    },
    /// A Unicode delimited identifier.
    UnicodeDelimited {
        /// Span of the whole token, `UESCAPE` clause included.
        span: Span,
        /// Text between the quotes, `""` and escapes not yet resolved.
        body: &'a str,
        /// The escape character from a `UESCAPE` clause, if one was given.
        escape: Option<char>,
    },
}

impl<'a> IdentifierMatch<'a> {
    fn from_captures(
        kind: IdentifierKind,
        text: &'a str,
        span: Span,
        captures: &Captures,
    ) -> Option<Self> {
        let body = || captures.get(Group::Body)?.slice(text);
        Some(match kind {
            IdentifierKind::Regular => IdentifierMatch::Regular {
                span,
                text: span.slice(text)?,
            },
            IdentifierKind::Delimited => IdentifierMatch::Delimited { span, body: body()? },
            IdentifierKind::UnicodeDelimited => IdentifierMatch::UnicodeDelimited {
                span,
                body: body()?,
                escape: captures
                    .get(Group::Escape)
                    .and_then(|escape| escape.slice(text))
                    .and_then(|escape| escape.chars().next()),
            },
        })
    }

    /// Which form matched.
    pub fn kind(&self) -> IdentifierKind {
        match self {
            IdentifierMatch::Regular { .. } => IdentifierKind::Regular,
            IdentifierMatch::Delimited { .. } => IdentifierKind::Delimited,
            IdentifierMatch::UnicodeDelimited { .. } => IdentifierKind::UnicodeDelimited,
        }
    }

    /// Span of the whole matched token.
    pub fn span(&self) -> Span {
        match *self {
            IdentifierMatch::Regular { span, .. }
            | IdentifierMatch::Delimited { span, .. }
            | IdentifierMatch::UnicodeDelimited { span, .. } => span,
        }
    }

    /// The escape character in effect, for a Unicode delimited identifier.
    pub fn escape(&self) -> Option<char> {
        match *self {
            IdentifierMatch::UnicodeDelimited { escape, .. } => {
                Some(escape.unwrap_or(DEFAULT_ESCAPE))
            }
            _ => None,
        }
    }

    /// Reduces the match to the identifier's literal text.
    ///
    /// Regular identifiers come back verbatim, with case preserved. Quoted
    /// ones have `""` reduced to `"`, and Unicode ones also have their
    /// escapes resolved.
    ///
    /// # Errors
    ///
    /// - [`IdentifierError::MalformedEscape`] or
    ///   [`IdentifierError::InvalidCodePoint`] for a bad Unicode escape;
    /// - [`IdentifierError::LengthExceeded`] when the decoded text is longer
    ///   than 128 code points. For regular and delimited identifiers this is
    ///   the same as the length of the token as written, `""` counting once.
    pub fn decode(&self) -> IdentifierResult<String> {
        let decoded = match *self {
            IdentifierMatch::Regular { text, .. } => text.to_owned(),
            IdentifierMatch::Delimited { body, .. } => undouble_quotes(body).into_owned(),
            IdentifierMatch::UnicodeDelimited { body, escape, .. } => decode_unicode_escapes(
                &undouble_quotes(body),
                escape.unwrap_or(DEFAULT_ESCAPE),
            )?,
        };
        check_length(decoded)
    }
}

fn check_length(decoded: String) -> IdentifierResult<String> {
    let length = decoded.chars().count();
    if length > MAX_IDENTIFIER_LENGTH {
        debug!(length, "decoded identifier too long");
        return Err(IdentifierError::LengthExceeded {
            length,
            max: MAX_IDENTIFIER_LENGTH,
        });
    }
    Ok(decoded)
}

impl IdentifierGrammar {
    /// The tagged alternatives, in priority order.
    pub fn alternatives(&self) -> &'static [Alternative] {
        self.alternatives
    }

    /// Matches an identifier anchored at byte offset `position`.
    ///
    /// When several alternatives match, the longest match wins, so
    /// `U&"x"` is a Unicode identifier rather than the regular identifier
    /// `U`. Ties go to the earlier alternative.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlident_lex::identifier::{IdentifierKind, ISO_PG_IDENTIFIER};
    ///
    /// let text = r#"SELECT "col" FROM t"#;
    /// let m = ISO_PG_IDENTIFIER.match_at(text, 7).unwrap();
    /// assert_eq!(m.kind(), IdentifierKind::Delimited);
    /// assert_eq!(m.span().end, 12);
    /// ```
    pub fn match_at<'a>(&self, text: &'a str, position: usize) -> Option<IdentifierMatch<'a>> {
        let mut best: Option<(IdentifierKind, Span, Captures)> = None;
        for alternative in self.alternatives {
            let Some((span, captures)) = alternative.pattern.captures_at(text, position) else {
                continue;
            };
            if best.map_or(true, |(_, best_span, _)| span.len() > best_span.len()) {
                best = Some((alternative.kind, span, captures));
            }
        }
        let (kind, span, captures) = best?;
        trace!(%kind, start = span.start, end = span.end, "identifier matched");
        IdentifierMatch::from_captures(kind, text, span, &captures)
    }

    /// Matches an identifier covering the whole of `text`.
    ///
    /// The first alternative that covers all of it wins.
    pub fn match_exact<'a>(&self, text: &'a str) -> Option<IdentifierMatch<'a>> {
        self.alternatives.iter().find_map(|alternative| {
            let (span, captures) = alternative.pattern.captures_at(text, 0)?;
            if span.end != text.len() {
                return None;
            }
            trace!(kind = %alternative.kind, "identifier matched whole text");
            IdentifierMatch::from_captures(alternative.kind, text, span, &captures)
        })
    }

    /// Matches `text` as a whole identifier and decodes it.
    ///
    /// # Errors
    ///
    /// [`IdentifierError::NoMatch`] if `text` is not an identifier, or any
    /// error from [`IdentifierMatch::decode`].
    pub fn parse(&self, text: &str) -> IdentifierResult<String> {
        self.match_exact(text)
            .ok_or(IdentifierError::NoMatch { position: 0 })?
            .decode()
    }
}

/// [`IdentifierGrammar::match_at`] with [`ISO_PG_IDENTIFIER`].
pub fn match_at(text: &str, position: usize) -> Option<IdentifierMatch<'_>> {
    ISO_PG_IDENTIFIER.match_at(text, position)
}

/// [`IdentifierGrammar::match_exact`] with [`ISO_PG_IDENTIFIER`].
pub fn match_exact(text: &str) -> Option<IdentifierMatch<'_>> {
    ISO_PG_IDENTIFIER.match_exact(text)
}

/// [`IdentifierGrammar::parse`] with [`ISO_PG_IDENTIFIER`].
pub fn parse(text: &str) -> IdentifierResult<String> {
    ISO_PG_IDENTIFIER.parse(text)
}

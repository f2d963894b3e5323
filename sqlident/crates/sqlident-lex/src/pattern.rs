//! Composable token grammars.
//!
//! A [`Pattern`] is built from [`CharClass`]es and other patterns with
//! sequence, ordered choice and bounded repetition. All patterns are `const`
//! data and matching is deterministic:
//!
//! - [`Pattern::Choice`] commits to the first alternative that matches;
//! - [`Pattern::Repeat`] is possessive, it takes as many repetitions as it
//!   can (up to `max`) and never gives any back.
//!
//! Apart from the zero-width [`Pattern::NotFollowedBy`], every step
//! consumes at least one code point or fails, so a match costs time linear
//! in the length of the text it covers.
//!
//! ```
//! use sqlident_lex::class::{ISO_PART, ISO_START};
//! use sqlident_lex::pattern::Pattern;
//!
//! const WORD: Pattern = Pattern::Seq(&[
//!     Pattern::Class(ISO_START),
//!     Pattern::Repeat { item: &Pattern::Class(ISO_PART), min: 0, max: Some(3) },
//! ]);
//!
//! assert!(WORD.is_match("abcd"));
//! assert!(!WORD.is_match("abcde"));
//! assert_eq!(WORD.match_at("abcde", 0).map(|s| s.end), Some(4));
//! ```

use sqlident_util::Span;

use crate::class::CharClass;
use crate::cursor::Cursor;

/// Sub-matches a pattern can record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    /// The text between the quotes of a delimited identifier.
    Body,
    /// The escape character named by a `UESCAPE` clause.
    Escape,
}

/// Spans recorded by [`Pattern::Capture`] during a successful match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Captures {
    body: Option<Span>,
    escape: Option<Span>,
}

impl Captures {
    /// The span recorded for `group`, if the group took part in the match.
    pub fn get(&self, group: Group) -> Option<Span> {
        match group {
            Group::Body => self.body,
            Group::Escape => self.escape,
        }
    }

    fn set(&mut self, group: Group, span: Span) {
        match group {
            Group::Body => self.body = Some(span),
            Group::Escape => self.escape = Some(span),
        }
    }
}

/// A token grammar.
#[derive(Clone, Copy, Debug)]
pub enum Pattern {
    /// One code point in the class.
    Class(CharClass),
    /// Exactly this code point.
    Char(char),
    /// Exactly this text.
    Literal(&'static str),
    /// This text, ignoring ASCII case.
    Keyword(&'static str),
    /// Each pattern in turn.
    Seq(&'static [Pattern]),
    /// The first pattern that matches.
    Choice(&'static [Pattern]),
    /// Possessive repetition, `min..=max` times (`max: None` is unbounded).
    Repeat {
        /// The repeated pattern.
        item: &'static Pattern,
        /// Fewest repetitions accepted.
        min: usize,
        /// Most repetitions taken.
        max: Option<usize>,
    },
    /// Records the span matched by the inner pattern.
    Capture(Group, &'static Pattern),
    /// Succeeds without consuming if the next code point is not in the
    /// class (or there is none).
    NotFollowedBy(CharClass),
}

static_assertions::assert_impl_all!(Pattern: Copy, Send, Sync);

impl Pattern {
    /// Matches this pattern anchored at byte offset `position`.
    ///
    /// Returns the matched span, which may stop short of the end of `text`.
    /// Returns `None` if the pattern does not match there, or if `position`
    /// is out of bounds or not on a `char` boundary.
    pub fn match_at(&self, text: &str, position: usize) -> Option<Span> {
        self.captures_at(text, position).map(|(span, _)| span)
    }

    /// Like [`Pattern::match_at`], also returning the recorded captures.
    pub fn captures_at(&self, text: &str, position: usize) -> Option<(Span, Captures)> {
        let mut cursor = Cursor::at(text, position)?;
        let mut captures = Captures::default();
        self.run(&mut cursor, &mut captures)
            .then(|| (Span::new(position, cursor.position()), captures))
    }

    /// Returns true if this pattern matches the whole of `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.match_at(text, 0)
            .is_some_and(|span| span.end == text.len())
    }

    /// Finds the first position in `text` where this pattern matches.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlident_lex::grammar::DELIMITED_IDENTIFIER;
    /// use sqlident_util::Span;
    ///
    /// let text = r#"SELECT "My Col" FROM t"#;
    /// assert_eq!(DELIMITED_IDENTIFIER.find(text), Some(Span::new(7, 15)));
    /// ```
    pub fn find(&self, text: &str) -> Option<Span> {
        text.char_indices()
            .map(|(position, _)| position)
            .chain(std::iter::once(text.len()))
            .find_map(|position| self.match_at(text, position))
    }

    /// Runs the pattern at the cursor.
    ///
    /// On success the cursor is left after the match. On failure the cursor
    /// and captures are left where they were.
    fn run(&self, cursor: &mut Cursor<'_>, captures: &mut Captures) -> bool {
        match *self {
            Pattern::Class(class) => cursor.advance_if(|c| class.contains(c)).is_some(),
            Pattern::Char(expected) => cursor.match_char(expected),
            Pattern::Literal(text) => {
                if cursor.remaining().starts_with(text) {
                    cursor.advance_n(text.chars().count());
                    true
                } else {
                    false
                }
            }
            Pattern::Keyword(keyword) => cursor.match_ignore_ascii_case(keyword),
            Pattern::Seq(items) => {
                let snapshot = cursor.snapshot();
                let saved = *captures;
                for item in items {
                    if !item.run(cursor, captures) {
                        cursor.restore(snapshot);
                        *captures = saved;
                        return false;
                    }
                }
                true
            }
            Pattern::Choice(alternatives) => alternatives
                .iter()
                .any(|alternative| alternative.run(cursor, captures)),
            Pattern::Repeat { item, min, max } => {
                let snapshot = cursor.snapshot();
                let saved = *captures;
                let mut count = 0;
                while max.map_or(true, |max| count < max) {
                    let before = cursor.position();
                    if !item.run(cursor, captures) || cursor.position() == before {
                        break;
                    }
                    count += 1;
                }
                if count < min {
                    cursor.restore(snapshot);
                    *captures = saved;
                    return false;
                }
                true
            }
            Pattern::Capture(group, inner) => {
                let start = cursor.position();
                if !inner.run(cursor, captures) {
                    return false;
                }
                captures.set(group, Span::new(start, cursor.position()));
                true
            }
            Pattern::NotFollowedBy(class) => !cursor
                .current_char()
                .is_some_and(|c| class.contains(c)),
        }
    }
}

//! Character cursor for traversing candidate text.
//!
//! This module provides the `Cursor` struct which maintains a byte position
//! while stepping through text one code point at a time. Grammars and the
//! escape decoder both drive a cursor; neither ever indexes into the middle
//! of a multi-byte character.

/// A cursor for traversing text code point by code point.
///
/// # Example
///
/// ```
/// use sqlident_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.current_char(), Some('a'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('b'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The text being traversed.
    source: &'a str,

    /// Current byte position in the text.
    position: usize,
}

/// A saved cursor position, see [`Cursor::snapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Creates a cursor positioned at byte offset `position`.
    ///
    /// Returns `None` when `position` is past the end of `source` or not on
    /// a `char` boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlident_lex::cursor::Cursor;
    ///
    /// assert!(Cursor::at("aé", 1).is_some());
    /// assert!(Cursor::at("aé", 2).is_none());
    /// ```
    pub fn at(source: &'a str, position: usize) -> Option<Self> {
        source
            .is_char_boundary(position)
            .then_some(Self { source, position })
    }

    /// Returns the character at the cursor, or `None` at the end.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes and returns the current character.
    ///
    /// Does nothing and returns `None` if already at the end.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Advances the cursor by up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consumes the current character if it satisfies `predicate`.
    #[inline]
    pub fn advance_if(&mut self, predicate: impl FnOnce(char) -> bool) -> Option<char> {
        match self.current_char() {
            Some(c) if predicate(c) => {
                self.position += c.len_utf8();
                Some(c)
            }
            _ => None,
        }
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlident_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("\"\"x");
    /// assert!(cursor.match_char('"'));
    /// assert!(cursor.match_char('"'));
    /// assert!(!cursor.match_char('"'));
    /// ```
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        self.advance_if(|c| c == expected).is_some()
    }

    /// Consumes `expected` if the text continues with it, ignoring ASCII case.
    pub fn match_ignore_ascii_case(&mut self, expected: &str) -> bool {
        let end = self.position + expected.len();
        match self.source.get(self.position..end) {
            Some(ahead) if ahead.eq_ignore_ascii_case(expected) => {
                self.position = end;
                true
            }
            _ => false,
        }
    }

    /// Consumes exactly `count` ASCII hex digits and returns them.
    ///
    /// Consumes nothing and returns `None` if fewer than `count` hex digits
    /// follow.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlident_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("0061ta");
    /// assert_eq!(cursor.take_hex_digits(4), Some("0061"));
    /// assert_eq!(cursor.take_hex_digits(4), None);
    /// assert_eq!(cursor.current_char(), Some('t'));
    /// ```
    pub fn take_hex_digits(&mut self, count: usize) -> Option<&'a str> {
        let remaining = self.remaining();
        let digits = remaining.get(..count)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        self.position += count;
        Some(digits)
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Saves the current position.
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
        }
    }

    /// Returns to a saved position.
    #[inline]
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
    }
}

//! Span module - Match location tracking.
//!
//! A [`Span`] is a half-open byte range into the text a grammar was run
//! against. Spans always fall on `char` boundaries because every grammar
//! advances one code point at a time.
//!
//! # Examples
//!
//! ```
//! use sqlident_util::span::Span;
//!
//! let text = r#"U&"d\0061ta""#;
//! let span = Span::new(0, text.len());
//! assert_eq!(span.slice(text), Some(text));
//! ```

/// Byte range of a match
///
/// # Examples
///
/// ```
/// use sqlident_util::span::Span;
///
/// let span = Span::new(2, 7);
/// assert_eq!(span.len(), 5);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The text covered by this span
    ///
    /// Returns `None` when the span is out of bounds for `text` or does not
    /// fall on `char` boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlident_util::span::Span;
    ///
    /// assert_eq!(Span::new(1, 3).slice("abcd"), Some("bc"));
    /// assert_eq!(Span::new(1, 9).slice("abcd"), None);
    /// ```
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

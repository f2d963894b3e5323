//! Core error types for sqlident
//!
//! Matching never fails with an error: a grammar either matches or returns
//! `None`. Errors arise only when a matched identifier is reduced to its
//! literal text, or when text has to be encoded as an identifier.

use thiserror::Error;

/// Error type for identifier decoding and encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The text is not an identifier in any recognized form
    #[error("No identifier at byte {position}")]
    NoMatch {
        /// Byte offset where matching was attempted
        position: usize,
    },

    /// An escape character is not followed by a recognized escape form
    #[error("Malformed Unicode escape at byte {offset}: '{escape}' must be followed by '{escape}', 4 hex digits, or '+' and 6 hex digits")]
    MalformedEscape {
        /// Byte offset of the escape character within the unquoted body
        offset: usize,
        /// The escape character in effect
        escape: char,
    },

    /// A well-formed escape names a surrogate or a value beyond U+10FFFF
    #[error("Invalid code point U+{value:04X} at byte {offset}")]
    InvalidCodePoint {
        /// Byte offset of the escape character within the unquoted body
        offset: usize,
        /// The value named by the escape
        value: u32,
    },

    /// The identifier is longer than the permitted number of code points
    #[error("Identifier is {length} code points long, maximum is {max}")]
    LengthExceeded {
        /// Length in code points
        length: usize,
        /// Permitted maximum
        max: usize,
    },

    /// The character cannot serve as a Unicode escape character
    #[error("Invalid escape character: {escape:?}")]
    InvalidEscapeCharacter {
        /// The rejected character
        escape: char,
    },
}

/// Result type alias for identifier operations
pub type IdentifierResult<T> = std::result::Result<T, IdentifierError>;

//! sqlident-util - Foundation Types for the sqlident Workspace
//!
//! This crate holds the small set of types shared by the identifier lexer
//! and its consumers:
//!
//! - [`span`] - byte ranges locating a match inside candidate text
//! - [`error`] - the identifier error taxonomy and its result alias
//!
//! # Examples
//!
//! ```
//! use sqlident_util::{IdentifierError, Span};
//!
//! let span = Span::new(3, 8);
//! assert_eq!(span.slice("my identifier"), Some("ident"));
//!
//! let err = IdentifierError::LengthExceeded { length: 129, max: 128 };
//! assert!(err.to_string().contains("129"));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod span;

pub use error::{IdentifierError, IdentifierResult};
pub use span::Span;

/// Maximum length, in code points, of an identifier under ISO SQL rules.
///
/// Applies to regular identifiers, to the encoded body of a delimited
/// identifier, and to the decoded text of a Unicode-escaped identifier.
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

//! Identifier grammars.
//!
//! This module composes the character classes into token-level grammars:
//! - `regular` - unquoted identifiers, per dialect and as intersections
//! - `delimited` - `"quoted"` identifiers
//! - `uescape` - `U&"..."` identifiers and the `UESCAPE` clause
//!
//! Each grammar is a `const` [`Pattern`](crate::pattern::Pattern).

mod delimited;
mod regular;
mod uescape;

pub use delimited::DELIMITED_IDENTIFIER;
pub use regular::{
    ISO_PG_JAVA_IDENTIFIER, ISO_PG_REGULAR_IDENTIFIER, ISO_REGULAR_IDENTIFIER,
    PG_REGULAR_IDENTIFIER,
};
pub use uescape::{DEFAULT_ESCAPE, UNICODE_DELIMITED_IDENTIFIER, UNICODE_ESCAPE_SPECIFIER};

pub(crate) use delimited::DELIMITED_TOKEN;
pub(crate) use regular::ISO_PG_REGULAR_TOKEN;

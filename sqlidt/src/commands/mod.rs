//! Command modules for the sqlidt CLI.
//!
//! Each subcommand is implemented in its own file and dispatched through
//! [`traits::Command`].

pub mod common;
pub mod traits;

pub mod check;
pub mod decode;
pub mod quote;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use decode::{DecodeArgs, DecodeCommand};
pub use quote::{QuoteArgs, QuoteCommand};

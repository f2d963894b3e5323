//! Common types and utilities for sqlidt commands.
//!
//! This module provides shared types and output helpers used across all
//! command implementations.

use std::fmt::Display;
use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sqlident_lex::grammar::{
    ISO_PG_JAVA_IDENTIFIER, ISO_PG_REGULAR_IDENTIFIER, ISO_REGULAR_IDENTIFIER,
    PG_REGULAR_IDENTIFIER,
};
use sqlident_lex::Pattern;

use crate::error::{Result, SqlidtError};

// ============================================================================
// Grammar Choice
// ============================================================================

/// Regular-identifier grammar selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GrammarChoice {
    /// ISO SQL rules
    Iso,
    /// PostgreSQL rules
    Pg,
    /// Valid under both ISO and PostgreSQL rules
    #[default]
    IsoPg,
    /// Valid under ISO, PostgreSQL and Java rules
    IsoPgJava,
}

impl GrammarChoice {
    /// The grammar this choice names.
    pub fn pattern(self) -> &'static Pattern {
        match self {
            Self::Iso => &ISO_REGULAR_IDENTIFIER,
            Self::Pg => &PG_REGULAR_IDENTIFIER,
            Self::IsoPg => &ISO_PG_REGULAR_IDENTIFIER,
            Self::IsoPgJava => &ISO_PG_JAVA_IDENTIFIER,
        }
    }

    /// Name as written on the command line and in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iso => "iso",
            Self::Pg => "pg",
            Self::IsoPg => "iso-pg",
            Self::IsoPgJava => "iso-pg-java",
        }
    }
}

// ============================================================================
// Output Format
// ============================================================================

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per argument
    #[default]
    Text,
    /// A JSON array of reports
    Json,
}

/// Writes one report per argument to `out` in the chosen format.
pub fn write_reports<T, W>(out: &mut W, reports: &[T], format: OutputFormat) -> Result<()>
where
    T: Serialize + Display,
    W: Write,
{
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(out, "{}", report)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Prints reports to stdout.
pub fn print_reports<T: Serialize + Display>(reports: &[T], format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_reports(&mut out, reports, format)
}

/// Fails when any argument failed, so the exit status reflects it.
pub fn check_for_failures(failed: usize) -> Result<()> {
    if failed > 0 {
        return Err(SqlidtError::Validation(format!(
            "{} {}",
            failed,
            error_messages::ARGUMENTS_FAILED
        )));
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no arguments are given.
    pub const NO_ARGUMENTS: &str = "No identifiers specified";

    /// Error when some arguments failed.
    pub const ARGUMENTS_FAILED: &str = "argument(s) failed";
}

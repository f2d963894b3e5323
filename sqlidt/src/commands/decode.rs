//! Decode command implementation.
//!
//! Matches each argument as a whole identifier of any form and prints its
//! literal text.

use std::fmt;

use serde::{Serialize, Serializer};
use sqlident_lex::{identifier, IdentifierError, IdentifierKind};

use crate::commands::common::{check_for_failures, error_messages, print_reports, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{Result, SqlidtError};

/// Arguments for the decode command.
#[derive(Debug, Clone, Default)]
pub struct DecodeArgs {
    /// Identifiers to decode.
    pub texts: Vec<String>,
    /// Output format override (default: from config).
    pub format: Option<OutputFormat>,
}

/// Outcome of decoding one argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DecodeOutcome {
    /// The argument is an identifier.
    Decoded {
        /// Which form it has.
        #[serde(serialize_with = "serialize_kind")]
        kind: IdentifierKind,
        /// Its literal text.
        value: String,
    },
    /// The argument is not an identifier, or does not decode.
    Failed {
        /// Why.
        error: String,
    },
}

fn serialize_kind<S: Serializer>(
    kind: &IdentifierKind,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.as_str())
}

/// Result of decoding one argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    /// The argument.
    pub text: String,
    /// What came of it.
    #[serde(flatten)]
    pub outcome: DecodeOutcome,
}

impl DecodeReport {
    /// Whether the argument decoded.
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, DecodeOutcome::Decoded { .. })
    }
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            DecodeOutcome::Decoded { kind, value } => write!(f, "{}\t{}", kind, value),
            DecodeOutcome::Failed { error } => write!(f, "error\t{}: {}", self.text, error),
        }
    }
}

/// Decode one argument.
pub fn decode_text(text: &str) -> DecodeReport {
    let outcome = match decode_identifier(text) {
        Ok((kind, value)) => DecodeOutcome::Decoded { kind, value },
        Err(error) => {
            tracing::debug!(text, %error, "decode failed");
            DecodeOutcome::Failed {
                error: error.to_string(),
            }
        }
    };
    DecodeReport {
        text: text.to_owned(),
        outcome,
    }
}

fn decode_identifier(
    text: &str,
) -> std::result::Result<(IdentifierKind, String), IdentifierError> {
    let m = identifier::match_exact(text).ok_or(IdentifierError::NoMatch { position: 0 })?;
    Ok((m.kind(), m.decode()?))
}

/// Decode command handler.
pub struct DecodeCommand {
    args: DecodeArgs,
    config: Config,
}

impl Command for DecodeCommand {
    type Args = DecodeArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<()> {
        if self.args.texts.is_empty() {
            return Err(SqlidtError::Validation(
                error_messages::NO_ARGUMENTS.to_string(),
            ));
        }

        let reports: Vec<DecodeReport> = self.args.texts.iter().map(|t| decode_text(t)).collect();
        let format = self.args.format.unwrap_or(self.config.output.format);
        print_reports(&reports, format)?;
        check_for_failures(reports.iter().filter(|report| !report.is_ok()).count())
    }

    fn name() -> &'static str {
        "decode"
    }
}

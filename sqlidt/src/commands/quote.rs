//! Quote command implementation.
//!
//! Writes each argument out as a delimited identifier, or as a Unicode
//! delimited identifier with `--unicode`.

use std::fmt;

use serde::Serialize;
use sqlident_lex::{encode, IdentifierError};

use crate::commands::common::{check_for_failures, error_messages, print_reports, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{Result, SqlidtError};

/// Arguments for the quote command.
#[derive(Debug, Clone, Default)]
pub struct QuoteArgs {
    /// Texts to quote.
    pub texts: Vec<String>,
    /// Produce `U&"..."` with escapes instead of plain `"..."`.
    pub unicode: bool,
    /// Escape character override (default: from config).
    pub escape: Option<char>,
    /// Output format override (default: from config).
    pub format: Option<OutputFormat>,
}

/// Outcome of quoting one argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum QuoteOutcome {
    /// The argument was quoted.
    Quoted {
        /// The quoted identifier.
        quoted: String,
    },
    /// The argument cannot be written with the escape character in effect.
    Failed {
        /// Why.
        error: String,
    },
}

/// Result of quoting one argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteReport {
    /// The argument.
    pub text: String,
    /// What came of it.
    #[serde(flatten)]
    pub outcome: QuoteOutcome,
}

impl QuoteReport {
    /// Whether the argument was quoted.
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, QuoteOutcome::Quoted { .. })
    }
}

impl fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            QuoteOutcome::Quoted { quoted } => f.write_str(quoted),
            QuoteOutcome::Failed { error } => write!(f, "error\t{}: {}", self.text, error),
        }
    }
}

/// Quote command handler.
pub struct QuoteCommand {
    args: QuoteArgs,
    config: Config,
}

impl QuoteCommand {
    /// The escape character in effect.
    pub fn escape(&self) -> char {
        self.args.escape.unwrap_or(self.config.quote.escape)
    }

    /// Quote one argument.
    pub fn quote_text(&self, text: &str) -> QuoteReport {
        let outcome = match self.quote_identifier(text) {
            Ok(quoted) => QuoteOutcome::Quoted { quoted },
            Err(error) => {
                tracing::debug!(text, %error, "quote failed");
                QuoteOutcome::Failed {
                    error: error.to_string(),
                }
            }
        };
        QuoteReport {
            text: text.to_owned(),
            outcome,
        }
    }

    fn quote_identifier(&self, text: &str) -> std::result::Result<String, IdentifierError> {
        if self.args.unicode {
            encode::unicode_escaped(text, self.escape())
        } else {
            Ok(encode::delimited(text))
        }
    }
}

impl Command for QuoteCommand {
    type Args = QuoteArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<()> {
        if self.args.texts.is_empty() {
            return Err(SqlidtError::Validation(
                error_messages::NO_ARGUMENTS.to_string(),
            ));
        }

        let reports: Vec<QuoteReport> = self
            .args
            .texts
            .iter()
            .map(|text| self.quote_text(text))
            .collect();
        let format = self.args.format.unwrap_or(self.config.output.format);
        print_reports(&reports, format)?;
        check_for_failures(reports.iter().filter(|report| !report.is_ok()).count())
    }

    fn name() -> &'static str {
        "quote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(unicode: bool, escape: Option<char>) -> QuoteCommand {
        QuoteCommand::new(
            QuoteArgs {
                unicode,
                escape,
                ..QuoteArgs::default()
            },
            Config::default(),
        )
    }

    fn quoted(report: QuoteReport) -> String {
        match report.outcome {
            QuoteOutcome::Quoted { quoted } => quoted,
            QuoteOutcome::Failed { error } => panic!("quote failed: {}", error),
        }
    }

    #[test]
    fn test_quote_delimited() {
        let report = command(false, None).quote_text("Full \"Name\"");
        assert_eq!(quoted(report), "\"Full \"\"Name\"\"\"");
    }

    #[test]
    fn test_quote_unicode_default_escape() {
        let report = command(true, None).quote_text("café");
        assert_eq!(quoted(report), r#"U&"caf\00E9""#);
    }

    #[test]
    fn test_quote_unicode_escape_from_config() {
        let mut config = Config::default();
        config.quote.escape = '!';
        let command = QuoteCommand::new(
            QuoteArgs {
                unicode: true,
                ..QuoteArgs::default()
            },
            config,
        );
        assert_eq!(command.escape(), '!');
        assert_eq!(
            quoted(command.quote_text("é")),
            r#"U&"!00E9" UESCAPE '!'"#
        );
    }

    #[test]
    fn test_quote_rejects_bad_escape() {
        let report = command(true, Some('a')).quote_text("x");
        assert!(!report.is_ok());
        assert!(matches!(report.outcome, QuoteOutcome::Failed { .. }));
        assert!(report.to_string().starts_with("error\tx: "));
        // Plain quoting ignores the escape character
        assert!(command(false, Some('a')).quote_text("x").is_ok());
    }

    #[test]
    fn test_quote_reports_line_up_with_arguments() {
        // '+' introduces six-digit escapes, so it cannot be the escape character
        let plus = command(true, Some('+'));
        let reports: Vec<QuoteReport> = ["a", "b"].iter().map(|t| plus.quote_text(t)).collect();
        let value = serde_json::to_value(&reports).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        for (entry, text) in entries.iter().zip(["a", "b"]) {
            assert_eq!(entry["text"], text);
            assert_eq!(entry["status"], "failed");
            assert!(entry.get("quoted").is_none());
        }

        let value = serde_json::to_value(command(false, None).quote_text("A b")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "text": "A b",
                "status": "quoted",
                "quoted": "\"A b\"",
            })
        );
    }
}

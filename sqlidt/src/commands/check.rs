//! Check command implementation.
//!
//! Reports whether each argument is a regular identifier under the chosen
//! grammar, and how much of it matched when it is not.

use std::fmt;

use serde::Serialize;
use sqlident_lex::Span;

use crate::commands::common::{
    check_for_failures, error_messages, print_reports, GrammarChoice, OutputFormat,
};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{Result, SqlidtError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Texts to check.
    pub texts: Vec<String>,
    /// Grammar override (default: from config).
    pub grammar: Option<GrammarChoice>,
    /// Output format override (default: from config).
    pub format: Option<OutputFormat>,
}

/// Result of checking one argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The argument.
    pub text: String,
    /// Grammar it was checked against.
    pub grammar: GrammarChoice,
    /// Whether the whole argument matched.
    pub matches: bool,
    /// Longest matching prefix, as byte offsets.
    pub span: Option<Span>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.text)?;
        match (self.matches, self.span) {
            (true, _) => write!(f, "match ({})", self.grammar.as_str()),
            (false, Some(span)) => write!(
                f,
                "no match ({}, prefix {}..{})",
                self.grammar.as_str(),
                span.start,
                span.end
            ),
            (false, None) => write!(f, "no match ({})", self.grammar.as_str()),
        }
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// The grammar in effect.
    pub fn grammar(&self) -> GrammarChoice {
        self.args.grammar.unwrap_or(self.config.grammar)
    }

    /// Check every argument.
    pub fn reports(&self) -> Vec<CheckReport> {
        let grammar = self.grammar();
        self.args
            .texts
            .iter()
            .map(|text| check_text(text, grammar))
            .collect()
    }
}

/// Check one text against `grammar`.
pub fn check_text(text: &str, grammar: GrammarChoice) -> CheckReport {
    let span = grammar.pattern().match_at(text, 0);
    let matches = span.is_some_and(|span| span.end == text.len());
    tracing::debug!(text, grammar = grammar.as_str(), matches, "checked");
    CheckReport {
        text: text.to_owned(),
        grammar,
        matches,
        span,
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<()> {
        if self.args.texts.is_empty() {
            return Err(SqlidtError::Validation(
                error_messages::NO_ARGUMENTS.to_string(),
            ));
        }

        let reports = self.reports();
        let format = self.args.format.unwrap_or(self.config.output.format);
        print_reports(&reports, format)?;
        check_for_failures(reports.iter().filter(|report| !report.matches).count())
    }

    fn name() -> &'static str {
        "check"
    }
}

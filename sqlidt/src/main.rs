//! sqlidt - Check, decode and quote SQL identifiers.
//!
//! This is the main entry point for the sqlidt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{GrammarChoice, OutputFormat};
use commands::traits::Command;
use commands::{
    CheckArgs, CheckCommand, DecodeArgs, DecodeCommand, QuoteArgs, QuoteCommand,
};
use config::Config;
use error::{Result, SqlidtError};

/// sqlidt - Check, decode and quote SQL identifiers
///
/// Recognizes regular, delimited and Unicode delimited identifiers under
/// ISO SQL and PostgreSQL rules.
#[derive(Parser, Debug)]
#[command(name = "sqlidt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check, decode and quote SQL identifiers", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SQLIDT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SQLIDT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SQLIDT_NO_COLOR")]
    no_color: bool,

    /// Output format (default: from config)
    #[arg(short = 'F', long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the sqlidt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check texts against a regular-identifier grammar
    ///
    /// Reports whether each text matches as a whole, and the matching
    /// prefix when it does not.
    Check(CheckCommandArgs),

    /// Decode identifiers to their literal text
    ///
    /// Accepts regular, delimited ("...") and Unicode delimited
    /// (U&"..." [UESCAPE 'c']) identifiers.
    Decode(DecodeCommandArgs),

    /// Quote texts as delimited identifiers
    Quote(QuoteCommandArgs),
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Texts to check
    #[arg(required = true)]
    texts: Vec<String>,

    /// Grammar to check against (default: from config)
    #[arg(short, long, value_enum)]
    grammar: Option<GrammarChoice>,
}

/// Arguments for the decode subcommand.
#[derive(Parser, Debug)]
struct DecodeCommandArgs {
    /// Identifiers to decode
    #[arg(required = true)]
    texts: Vec<String>,
}

/// Arguments for the quote subcommand.
#[derive(Parser, Debug)]
struct QuoteCommandArgs {
    /// Texts to quote
    #[arg(required = true)]
    texts: Vec<String>,

    /// Write U&"..." with Unicode escapes outside printable ASCII
    #[arg(short, long)]
    unicode: bool,

    /// Escape character for --unicode (default: from config)
    #[arg(short, long)]
    escape: Option<char>,
}

/// Main entry point for the sqlidt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, cli.format, config)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so that results on stdout stay parseable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SqlidtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, format: Option<OutputFormat>, config: Config) -> Result<()> {
    match command {
        Commands::Check(args) => CheckCommand::run(
            CheckArgs {
                texts: args.texts,
                grammar: args.grammar,
                format,
            },
            config,
        ),
        Commands::Decode(args) => DecodeCommand::run(
            DecodeArgs {
                texts: args.texts,
                format,
            },
            config,
        ),
        Commands::Quote(args) => QuoteCommand::run(
            QuoteArgs {
                texts: args.texts,
                unicode: args.unicode,
                escape: args.escape,
                format,
            },
            config,
        ),
    }
}

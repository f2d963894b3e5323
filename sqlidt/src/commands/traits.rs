//! Command trait for the sqlidt CLI.
//!
//! Every subcommand implements [`Command`] so that `main` dispatches them
//! the same way.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all sqlidt commands implement.
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// Create a new command from its arguments and the loaded configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<()>;

    /// The command name, as typed on the command line.
    fn name() -> &'static str;

    /// Build and execute the command inside a tracing span named after it.
    fn run(args: Self::Args, config: Config) -> Result<()> {
        let span = tracing::debug_span!("command", name = Self::name());
        let _guard = span.enter();
        Self::new(args, config).execute()
    }
}

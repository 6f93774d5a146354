//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod completions;
pub mod print;
pub mod schema;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::EnvGateError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), EnvGateError> {
    match cli.command {
        Commands::Check(args) => check::run(&args),
        Commands::Print(args) => print::run(&args),
        Commands::Schema(args) => schema::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => version::run(&args),
    }
}

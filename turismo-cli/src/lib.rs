//! Command-line interface for the Turismo recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_RECOMMEND_REQUEST: &str = "request-path";
pub(crate) const ARG_RECOMMEND_CATALOG: &str = "catalog";
pub(crate) const ARG_RECOMMEND_BUILTIN_CATALOG: &str = "builtin-catalog";
pub(crate) const ARG_RECOMMEND_LIMIT: &str = "limit";
pub(crate) const ENV_RECOMMEND_REQUEST: &str = "TURISMO_CMDS_RECOMMEND_REQUEST_PATH";

/// Run the Turismo CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when
/// the request or catalog cannot be loaded, or when nothing could be
/// recommended.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "turismo",
    about = "Recommend tourist activities that match a visitor's preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank activities for a JSON-encoded recommendation request.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;

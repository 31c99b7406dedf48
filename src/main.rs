#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]
//! ohinfo — print info (JSON) about an OpenHub (Ohloh) project or account.

mod api;
mod cli;
mod commands;
mod config;
mod xml;

use clap::{CommandFactory, Parser};

use api::ApiError;
use cli::{Cli, OutputCtx};

fn main() -> anyhow::Result<()> {
    // The API key is required for every subcommand; bail before parsing
    // anything else so no request can ever be attempted without it.
    let api_key = match config::api_key_from_env() {
        Ok(key) => key,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();

    // No subcommand: print help and exit cleanly.
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = OutputCtx::new(cli.indent, cli.debug);

    match commands::dispatch(&command, &api_key, &ctx) {
        Ok(()) => Ok(()),
        Err(err) => fail_outcome(err, cli.debug),
    }
}

/// Decide the fate of a dispatch failure: propagate the full error chain
/// (non-zero exit) under `--debug`, otherwise print a one-line diagnostic and
/// exit cleanly. Transient API errors should not look like crashes to an
/// interactive user.
fn fail_outcome(err: ApiError, debug: bool) -> anyhow::Result<()> {
    if debug {
        return Err(err.into());
    }
    eprintln!("error: {err}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forced_failure() -> ApiError {
        ApiError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://www.openhub.net/p/x.xml?api_key=k".to_owned(),
        }
    }

    #[test]
    fn test_debug_propagates_failure() {
        assert!(fail_outcome(forced_failure(), true).is_err());
    }

    #[test]
    fn test_no_debug_swallows_failure() {
        assert!(fail_outcome(forced_failure(), false).is_ok());
    }

    #[test]
    fn test_diagnostic_is_one_line() {
        let msg = format!("error: {}", forced_failure());
        assert!(!msg.contains('\n'));
    }
}

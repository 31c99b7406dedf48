/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand};

/// ohinfo — print info (JSON) about an OpenHub (Ohloh) project or account.
#[derive(Debug, Parser)]
#[command(
    name = "ohinfo",
    about = "Print info (JSON) about an OpenHub (Ohloh) project or account",
    version
)]
pub struct Cli {
    /// Pretty-print the output JSON.
    #[arg(short, long, global = true)]
    pub indent: bool,

    /// On failure, propagate the full error chain and exit non-zero.
    /// Also prints request timing to stderr.
    #[arg(short, long, global = true)]
    pub debug: bool,

    // Optional so a bare invocation is not a usage error; `main` prints
    // help and exits 0 when this is `None`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get info about a project.
    Project(ProjectArgs),
    /// Get info about an account (user).
    Account(AccountArgs),
}

/// Arguments for `ohinfo project`.
#[derive(Debug, Parser)]
pub struct ProjectArgs {
    /// Unique id (name) of the project to get info about.
    pub project_id: String,
}

/// Arguments for `ohinfo account`.
#[derive(Debug, Parser)]
pub struct AccountArgs {
    /// Unique id (name) of the account to get info about.
    pub account_id: String,
}

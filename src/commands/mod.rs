/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod account;
pub mod project;

use crate::api::ApiError;
use crate::cli::OutputCtx;
use crate::cli::args::Command;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `ApiError` on any lookup failure.
pub fn dispatch(command: &Command, api_key: &str, ctx: &OutputCtx) -> Result<(), ApiError> {
    match command {
        Command::Project(args) => project::run(args, api_key, ctx),
        Command::Account(args) => account::run(args, api_key, ctx),
    }
}

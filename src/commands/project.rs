/// `project` command: dump info about an OpenHub project.
use crate::api::{ApiError, InfoClient};
use crate::cli::OutputCtx;
use crate::cli::args::ProjectArgs;
use crate::cli::output::write_value;

/// Run `ohinfo project`.
///
/// # Errors
///
/// Returns `ApiError` on network failure, a non-success HTTP status, or a
/// malformed response body.
pub fn run(args: &ProjectArgs, api_key: &str, ctx: &OutputCtx) -> Result<(), ApiError> {
    let client = InfoClient::new(api_key)?;

    let _t_fetch = ctx.timer("project_info");
    let info = client.project_info(&args.project_id)?;
    drop(_t_fetch);

    write_value(&info, ctx);
    Ok(())
}

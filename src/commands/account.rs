/// `account` command: dump info about an OpenHub account (user).
use crate::api::{ApiError, InfoClient};
use crate::cli::OutputCtx;
use crate::cli::args::AccountArgs;
use crate::cli::output::write_value;

/// Run `ohinfo account`.
///
/// # Errors
///
/// Returns `ApiError` on network failure, a non-success HTTP status, or a
/// malformed response body.
pub fn run(args: &AccountArgs, api_key: &str, ctx: &OutputCtx) -> Result<(), ApiError> {
    let client = InfoClient::new(api_key)?;

    let _t_fetch = ctx.timer("account_info");
    let info = client.account_info(&args.account_id)?;
    drop(_t_fetch);

    write_value(&info, ctx);
    Ok(())
}

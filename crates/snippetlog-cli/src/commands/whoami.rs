//! Whoami command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use snippetlog_client::Route;

use super::ApiResultExt;
use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Ask the server instead of reading the stored session
    #[arg(long)]
    pub remote: bool,
}

pub async fn run(args: WhoamiArgs, ctx: &Context) -> Result<()> {
    if args.remote {
        ctx.require_login(Route::Dashboard)?;
        let profile = ctx
            .client()
            .auth()
            .me()
            .await
            .or_fallback("Failed to load profile")?;

        output::field("Email", &profile.email);
        if let Some(id) = &profile.id {
            output::field("ID", id);
        }
        if let Some(name) = &profile.name {
            output::field("Name", name);
        }
        return Ok(());
    }

    let user = ctx
        .client()
        .session()
        .current_user()
        .context("No active session. Run 'snippetlog login' first.")?;

    output::field("Email", &user.email);
    output::field("API", ctx.client().transport().config().base_url.as_str());

    Ok(())
}

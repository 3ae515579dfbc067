//! Refresh token command implementation.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct RefreshTokenArgs {}

pub async fn run(_args: RefreshTokenArgs, ctx: &Context) -> Result<()> {
    eprintln!("{}", "Refreshing session...".dimmed());

    ctx.client()
        .auth()
        .refresh()
        .await
        .context("Failed to refresh session")?;

    output::success("Session refreshed successfully");
    if let Some(user) = ctx.client().session().current_user() {
        output::field("Email", &user.email);
    }

    Ok(())
}

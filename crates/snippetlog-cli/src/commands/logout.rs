//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, ctx: &Context) -> Result<()> {
    ctx.client().auth().logout().await;
    ctx.discard_session_events();
    output::success("Logged out");
    Ok(())
}

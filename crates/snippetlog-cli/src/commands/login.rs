//! Login command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use snippetlog_core::Credentials;

use super::ApiResultExt;
use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "SNIPPETLOG_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let profile = ctx
        .client()
        .auth()
        .login(&credentials)
        .await
        .or_fallback("Login failed")?;

    output::success("Logged in successfully");
    println!();
    output::field("Email", &profile.email);
    output::field("API", ctx.client().transport().config().base_url.as_str());

    Ok(())
}

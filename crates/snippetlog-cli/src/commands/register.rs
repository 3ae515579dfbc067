//! Register command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use snippetlog_core::Credentials;

use super::ApiResultExt;
use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "SNIPPETLOG_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Display name
    #[arg(long)]
    pub name: Option<String>,
}

pub async fn run(args: RegisterArgs, ctx: &Context) -> Result<()> {
    if args.email.trim().is_empty() || args.password.is_empty() {
        bail!("Email and password are required");
    }

    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Creating account...".dimmed());

    let profile = ctx
        .client()
        .auth()
        .register(&credentials, args.name.as_deref())
        .await
        .or_fallback("Registration failed")?;

    output::success("Account created");
    println!();
    output::field("Email", &profile.email);
    if let Some(name) = &profile.name {
        output::field("Name", name);
    }

    Ok(())
}

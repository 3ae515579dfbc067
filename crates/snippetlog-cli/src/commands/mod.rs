//! Subcommand implementations.

mod create;
mod delete;
mod get;
mod list;
mod login;
mod logout;
mod refresh_token;
mod register;
mod update;
mod whoami;

use std::io::{self, Read};

use anyhow::{Context as _, Result};
use clap::Subcommand;

use crate::context::Context;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and log in
    Register(register::RegisterArgs),

    /// Log in with email and password
    Login(login::LoginArgs),

    /// Log out and forget the stored session
    Logout(logout::LogoutArgs),

    /// Display the logged-in user
    Whoami(whoami::WhoamiArgs),

    /// Exchange the refresh token for a new access token
    RefreshToken(refresh_token::RefreshTokenArgs),

    /// List your snippets
    List(list::ListArgs),

    /// Show a single snippet
    Get(get::GetArgs),

    /// Create a snippet
    Create(create::CreateArgs),

    /// Edit a snippet
    Update(update::UpdateArgs),

    /// Delete a snippet
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: Commands, ctx: &Context) -> Result<()> {
    match cmd {
        Commands::Register(args) => register::run(args, ctx).await,
        Commands::Login(args) => login::run(args, ctx).await,
        Commands::Logout(args) => logout::run(args, ctx).await,
        Commands::Whoami(args) => whoami::run(args, ctx).await,
        Commands::RefreshToken(args) => refresh_token::run(args, ctx).await,
        Commands::List(args) => list::run(args, ctx).await,
        Commands::Get(args) => get::run(args, ctx).await,
        Commands::Create(args) => create::run(args, ctx).await,
        Commands::Update(args) => update::run(args, ctx).await,
        Commands::Delete(args) => delete::run(args, ctx).await,
    }
}

/// Attach the message a user should see to an API error.
///
/// That is the server's message when it sent one, else `fallback`.
pub(crate) trait ApiResultExt<T> {
    fn or_fallback(self, fallback: &str) -> Result<T>;
}

impl<T> ApiResultExt<T> for snippetlog_core::Result<T> {
    fn or_fallback(self, fallback: &str) -> Result<T> {
        self.map_err(|e| {
            let message = e.user_message(fallback);
            anyhow::Error::new(e).context(message)
        })
    }
}

/// Read snippet code from a file, or from stdin when `path` is `-`.
pub(crate) fn read_code(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read code from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    }
}

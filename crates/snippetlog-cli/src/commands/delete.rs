//! Delete command implementation.

use std::io::{self, Write};

use anyhow::{Context as _, Result};
use clap::Args;

use snippetlog_client::Route;
use snippetlog_core::SnippetId;

use super::ApiResultExt;
use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Snippet ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(args: DeleteArgs, ctx: &Context) -> Result<()> {
    let id = SnippetId::new(&args.id).context("Invalid snippet ID")?;
    ctx.require_login(Route::Dashboard)?;

    if !args.force {
        eprint!("Are you sure you want to delete snippet {}? [y/N] ", id);
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    ctx.client()
        .snippets()
        .delete(&id)
        .await
        .or_fallback("Failed to delete snippet")?;

    output::success(&format!("Snippet {} deleted", id));

    Ok(())
}

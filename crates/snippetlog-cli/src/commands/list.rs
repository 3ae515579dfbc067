//! List command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use snippetlog_client::Route;

use super::ApiResultExt;
use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the snippets as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    ctx.require_login(Route::Dashboard)?;

    let snippets = ctx
        .client()
        .snippets()
        .list()
        .await
        .or_fallback("Failed to load snippets")?;

    if args.json {
        return output::json_pretty(&snippets);
    }

    if snippets.is_empty() {
        eprintln!(
            "{}",
            "No snippets yet. Create one with 'snippetlog create'.".dimmed()
        );
        return Ok(());
    }

    for (i, snippet) in snippets.iter().enumerate() {
        if i > 0 {
            println!();
        }
        output::snippet_card(snippet);
    }

    Ok(())
}

//! Get command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use snippetlog_client::Route;
use snippetlog_core::SnippetId;

use super::ApiResultExt;
use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Snippet ID
    pub id: String,

    /// Print the snippet as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: GetArgs, ctx: &Context) -> Result<()> {
    ctx.require_login(Route::Dashboard)?;

    let id = SnippetId::new(&args.id).context("Invalid snippet ID")?;

    let snippet = ctx
        .client()
        .snippets()
        .get(&id)
        .await
        .or_fallback("Failed to load snippet")?;

    if args.json {
        return output::json_pretty(&snippet);
    }

    output::field("ID", snippet.id.as_str());
    output::field("Title", &snippet.title);
    output::field("Language", snippet.language.display_name());
    output::field("Created", &output::created_date(&snippet));
    println!();
    println!("{}", snippet.code);

    Ok(())
}

//! Update command implementation.
//!
//! Fields left out keep the values the server currently has.

use anyhow::{Context as _, Result};
use clap::Args;

use snippetlog_client::Route;
use snippetlog_core::{Language, SnippetId};

use super::{ApiResultExt, read_code};
use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Snippet ID
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New language label
    #[arg(long, short = 'l')]
    pub language: Option<Language>,

    /// New code
    #[arg(long, conflicts_with = "file")]
    pub code: Option<String>,

    /// File holding the new code (use - for stdin)
    #[arg(long)]
    pub file: Option<String>,
}

pub async fn run(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let id = SnippetId::new(&args.id).context("Invalid snippet ID")?;
    ctx.require_login(Route::EditSnippet(id.clone()))?;

    let current = ctx
        .client()
        .snippets()
        .get(&id)
        .await
        .or_fallback("Failed to load snippet")?;

    let mut draft = current.to_draft();
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(language) = args.language {
        draft.language = language;
    }
    if let Some(code) = args.code {
        draft.code = code;
    } else if let Some(path) = args.file {
        draft.code = read_code(&path)?;
    }

    let snippet = ctx
        .client()
        .snippets()
        .update(&id, &draft)
        .await
        .or_fallback("Failed to update snippet")?;

    output::success(&format!("Updated snippet: {}", snippet.title));

    Ok(())
}

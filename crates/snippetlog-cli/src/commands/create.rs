//! Create command implementation.

use anyhow::Result;
use clap::Args;

use snippetlog_client::Route;
use snippetlog_core::{Language, SnippetDraft};

use super::{ApiResultExt, read_code};
use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Snippet title
    #[arg(long)]
    pub title: String,

    /// Language label (javascript, python, java, cpp, html, css, sql, bash, other)
    #[arg(long, short = 'l', default_value_t = Language::default())]
    pub language: Language,

    /// Snippet code
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub code: Option<String>,

    /// File holding the code (use - for stdin)
    #[arg(long)]
    pub file: Option<String>,
}

pub async fn run(args: CreateArgs, ctx: &Context) -> Result<()> {
    ctx.require_login(Route::AddSnippet)?;

    // clap requires one of --code and --file.
    let code = if let Some(code) = args.code {
        code
    } else {
        read_code(args.file.as_deref().unwrap_or("-"))?
    };

    let draft = SnippetDraft::new(args.title, code, args.language);

    let snippet = ctx
        .client()
        .snippets()
        .create(&draft)
        .await
        .or_fallback("Failed to create snippet")?;

    println!("{}", snippet.id);
    output::success(&format!("Created snippet: {}", snippet.title));

    Ok(())
}

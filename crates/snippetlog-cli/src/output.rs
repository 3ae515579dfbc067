//! Output formatting helpers.

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use serde::Serialize;

use snippetlog_core::Snippet;
use snippetlog_core::models::PREVIEW_CHARS;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Local calendar date a snippet was created.
pub fn created_date(snippet: &Snippet) -> String {
    snippet
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d")
        .to_string()
}

/// Print one dashboard card: header line, then the indented code preview.
pub fn snippet_card(snippet: &Snippet) {
    println!(
        "{}  {}  {}  {}",
        snippet.title.bold(),
        snippet.language.display_name().cyan(),
        created_date(snippet).dimmed(),
        snippet.id.as_str().dimmed()
    );
    for line in snippet.preview(PREVIEW_CHARS).lines() {
        println!("    {}", line);
    }
}

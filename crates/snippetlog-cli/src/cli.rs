//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser};

use snippetlog_core::ApiUrl;

use crate::commands::Commands;

/// Manage your code snippets from the terminal.
#[derive(Parser, Debug)]
#[command(name = "snippetlog")]
#[command(author, version = env!("SNIPPETLOG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the API lives and where the session is kept.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// API base URL
    #[arg(long, env = "SNIPPETLOG_API_URL", default_value = ApiUrl::DEFAULT, global = true)]
    pub api_url: ApiUrl,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    /// Directory holding the stored session (defaults to the platform data directory)
    #[arg(long, env = "SNIPPETLOG_STORE_DIR", global = true)]
    pub store_dir: Option<PathBuf>,

    /// Keep the session in the OS keychain instead of a file
    #[cfg(feature = "keyring")]
    #[arg(long, global = true)]
    pub keyring: bool,
}

//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Sync ad-server domain feeds into Cloudflare Zero Trust Gateway
///
/// Deletes the lists and rule created by a previous run, uploads the current
/// feed contents as new lists, and creates a rule that blocks them. Lists and
/// rules created by anyone else are left alone.
///
/// The API token needs Zero Trust read and edit permissions.
#[derive(Parser, Debug)]
#[command(name = "adblock-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Cloudflare account id (or set CLOUDFLARE_ACCOUNT_ID env var)
    #[arg(short = 'a', long, env = "CLOUDFLARE_ACCOUNT_ID", hide_env_values = true)]
    pub account_id: Option<String>,

    /// Cloudflare API token (or set CLOUDFLARE_TOKEN env var)
    #[arg(short = 't', long, env = "CLOUDFLARE_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Path to the TOML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

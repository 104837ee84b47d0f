//! CLI argument parsing and run dispatch.

pub mod args;

use adblock::{GatewayClient, Reconciler};
use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Credentials from CLI or env win over the config file
    let account_id = cli
        .account_id
        .or_else(|| config.account_id.clone())
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Cloudflare account id required.\n\n\
                 Set it with one of:\n  \
                 1. --account-id <ID>\n  \
                 2. CLOUDFLARE_ACCOUNT_ID environment variable\n  \
                 3. account_id in the config file"
            )
        })?;
    let api_token = cli
        .api_token
        .or_else(|| config.api_token.clone())
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Cloudflare API token required.\n\n\
                 Set it with one of:\n  \
                 1. --api-token <TOKEN>\n  \
                 2. CLOUDFLARE_TOKEN environment variable\n  \
                 3. api_token in the config file"
            )
        })?;

    let client = GatewayClient::new(account_id, api_token)?;
    let feeds = config.aggregator()?;
    info!(feeds = feeds.len(), account = client.account_id(), "Starting sync");

    let report = Reconciler::new(client, feeds)
        .reconcile()
        .await
        .context("Sync failed")?;

    println!("{}", output::summary(&report));

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

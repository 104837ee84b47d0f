//! adblock-sync - Cloudflare Gateway ad blocking
//!
//! Replaces the managed Gateway lists and blocking rule with the current feeds.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    adblock_cli::run().await
}

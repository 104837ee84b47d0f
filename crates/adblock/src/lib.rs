//! Sync ad-server domain feeds into Cloudflare Zero Trust Gateway.
//!
//! Each run replaces everything this tool previously created: the blocking
//! rule is deleted, then the managed lists, then fresh lists are created from
//! the feeds and a new rule is pointed at them. Resources created by anyone
//! else in the account are never touched.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use adblock::feeds::{FeedAggregator, HttpFeed, ADGUARD_DNS_FILTER_URL};
//! use adblock::{GatewayClient, Reconciler};
//!
//! #[tokio::main]
//! async fn main() -> adblock::Result<()> {
//!     let client = GatewayClient::new("account-id", "api-token")?;
//!     let feeds = FeedAggregator::new().source(HttpFeed::new("adguard-dns", ADGUARD_DNS_FILTER_URL)?);
//!
//!     let report = Reconciler::new(client, feeds).reconcile().await?;
//!     println!("{report}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/adblock/0.3.0")]

pub mod chunk;
pub mod ownership;
mod reconcile;
pub mod runner;
pub mod traffic;

pub use chunk::chunk;
pub use ownership::{managed_lists, managed_rules, LIST_MARKER, RULE_MARKER};
pub use reconcile::{
    list_name, ReconcileReport, Reconciler, DOMAIN_CAP, LIST_ITEM_LIMIT, LIST_NAME_PREFIX,
    RULE_NAME,
};
pub use runner::{task, SequentialRunner, Task, REQUEST_DELAY};
pub use traffic::traffic_expression;

// Re-export core types
pub use adblock_core::*;

// Re-export client
pub use adblock_client::{GatewayClient, GatewayClientBuilder, RateLimitConfig};

// Re-export feed sources
pub use adblock_feeds as feeds;

// Re-export runtime for convenience
pub use tokio;

//! Domain feed fetching for the ad-blocking sync.
//!
//! Feeds are plain-text lists in hosts-file, adblock-filter or one-domain-per-
//! line format. [`FeedAggregator`] fetches them concurrently, parses each line
//! with [`parse_line`], and merges the result into a deduplicated
//! [`adblock_core::DomainSet`].

#![doc(html_root_url = "https://docs.rs/adblock-feeds/0.3.0")]

mod aggregator;
mod error;
mod parse;
mod source;

pub use aggregator::{FeedAggregator, BUILTIN_OVERRIDES};
pub use error::{FeedError, FeedResult};
pub use parse::{parse_feed, parse_line};
pub use source::{
    FeedSource, HttpFeed, StaticFeed, ADGUARD_DNS_FILTER_URL, ANUDEEPND_ADSERVERS_URL, DEFAULT_FEEDS,
};

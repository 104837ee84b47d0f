//! Configuration management.

use adblock::feeds::{FeedAggregator, FeedSource, HttpFeed, BUILTIN_OVERRIDES, DEFAULT_FEEDS};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cloudflare account id.
    pub account_id: Option<String>,

    /// Cloudflare API token.
    pub api_token: Option<String>,

    /// Feeds to fetch. Empty means the built-in default feeds.
    pub feeds: Vec<FeedConfig>,

    /// Domains always blocked, after the built-in overrides and ahead of feed
    /// content.
    pub extra_domains: Vec<String>,
}

/// One feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Name used in logs and errors.
    pub name: String,

    /// Feed URL.
    pub url: String,
}

impl FeedConfig {
    /// The built-in feed set.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_FEEDS
            .iter()
            .map(|(name, url)| Self {
                name: (*name).to_string(),
                url: (*url).to_string(),
            })
            .collect()
    }
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "adblock-sync")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Configured feeds, falling back to the default feeds.
    pub fn feeds(&self) -> Vec<FeedConfig> {
        if self.feeds.is_empty() {
            FeedConfig::defaults()
        } else {
            self.feeds.clone()
        }
    }

    /// Build the feed aggregator for this configuration.
    pub fn aggregator(&self) -> Result<FeedAggregator> {
        let sources = self
            .feeds()
            .into_iter()
            .map(|feed| {
                HttpFeed::new(feed.name, &feed.url).map(|f| Box::new(f) as Box<dyn FeedSource>)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeedAggregator::new()
            .overrides(BUILTIN_OVERRIDES)
            .overrides(self.extra_domains.iter().cloned())
            .sources(sources))
    }
}

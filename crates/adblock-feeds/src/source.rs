//! Feed sources.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{FeedError, FeedResult};

/// AdGuard DNS filter (adblock filter syntax)
pub const ADGUARD_DNS_FILTER_URL: &str =
    "https://adguardteam.github.io/HostlistsRegistry/assets/filter_1.txt";

/// anudeepND ad server list (hosts file syntax)
pub const ANUDEEPND_ADSERVERS_URL: &str =
    "https://raw.githubusercontent.com/anudeepND/blacklist/master/adservers.txt";

/// Feeds used when none are configured, as `(name, url)`
pub const DEFAULT_FEEDS: [(&str, &str); 2] = [
    ("adguard-dns", ADGUARD_DNS_FILTER_URL),
    ("anudeepnd-adservers", ANUDEEPND_ADSERVERS_URL),
];

const TIMEOUT: Duration = Duration::from_secs(30);

/// Something that yields the raw text of a domain feed
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Fetch the full feed body
    async fn fetch(&self) -> FeedResult<String>;
}

/// Plain-text feed served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpFeed {
    name: String,
    url: Url,
    client: Client,
}

impl HttpFeed {
    /// Create a feed with its own HTTP client
    pub fn new(name: impl Into<String>, url: &str) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(format!("adblock-sync/{}", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .map_err(|e| FeedError::Request {
                source_name: url.to_string(),
                message: e.to_string(),
            })?;

        Self::with_client(name, url, client)
    }

    /// Create a feed sharing an existing HTTP client
    pub fn with_client(name: impl Into<String>, url: &str, client: Client) -> FeedResult<Self> {
        let url = Url::parse(url).map_err(|e| FeedError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            name: name.into(),
            url,
            client,
        })
    }

    /// The feed URL
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> FeedResult<String> {
        debug!(feed = %self.name, url = %self.url, "Fetching feed");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FeedError::Request {
                source_name: self.name.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                source_name: self.name.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FeedError::Request {
            source_name: self.name.clone(),
            message: e.to_string(),
        })
    }
}

/// Feed with a fixed body, for overrides and tests
#[derive(Debug, Clone)]
pub struct StaticFeed {
    name: String,
    body: String,
}

impl StaticFeed {
    /// Create a feed that always returns `body`
    #[must_use]
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> FeedResult<String> {
        Ok(self.body.clone())
    }
}

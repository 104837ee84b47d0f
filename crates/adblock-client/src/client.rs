//! Main Cloudflare Gateway API client implementation.

use crate::api::{ListsApi, RulesApi};
use crate::config::RateLimitConfig;
use adblock_core::{AdblockError, ApiResponse, Result};
use governor::RateLimiter;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// The Cloudflare API base URL
const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloudflare Zero Trust Gateway client bound to one account
#[derive(Clone)]
pub struct GatewayClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    account_id: String,
    api_token: String,
    base_url: Url,
    rate_limiter: RateLimiter<
        governor::state::NotKeyed,
        governor::state::InMemoryState,
        governor::clock::DefaultClock,
    >,
}

impl GatewayClient {
    /// Create a new client with default settings
    pub fn new(account_id: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        GatewayClientBuilder::new(account_id, api_token).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(
        account_id: impl Into<String>,
        api_token: impl Into<String>,
    ) -> GatewayClientBuilder {
        GatewayClientBuilder::new(account_id, api_token)
    }

    /// The account this client is scoped to
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.inner.account_id
    }

    /// Access Gateway list endpoints
    #[must_use]
    pub fn lists(&self) -> ListsApi<'_> {
        ListsApi::new(self)
    }

    /// Access Gateway rule endpoints
    #[must_use]
    pub fn rules(&self) -> RulesApi<'_> {
        RulesApi::new(self)
    }

    /// Perform a GET request against an account-scoped path
    #[instrument(skip(self), fields(account = %self.inner.account_id))]
    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>> {
        let url = self.account_url(segments)?;
        debug!(url = %url, "GET request");

        let request = self.inner.http.get(url);
        self.send(request).await
    }

    /// Perform a POST request with JSON body
    #[instrument(skip(self, body), fields(account = %self.inner.account_id))]
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Option<T>> {
        let url = self.account_url(segments)?;
        debug!(url = %url, "POST request");

        let request = self.inner.http.post(url).json(body);
        self.send(request).await
    }

    /// Perform a DELETE request
    #[instrument(skip(self), fields(account = %self.inner.account_id))]
    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<()> {
        let url = self.account_url(segments)?;
        debug!(url = %url, "DELETE request");

        let request = self.inner.http.delete(url);
        self.send::<serde_json::Value>(request).await.map(|_| ())
    }

    /// Build `{base}/accounts/{account}/{segments...}` with each segment escaped
    fn account_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AdblockError::Config(format!("invalid base URL: {}", self.inner.base_url)))?
            .pop_if_empty()
            .push("accounts")
            .push(&self.inner.account_id)
            .extend(segments);
        Ok(url)
    }

    /// Wait for the rate limiter, send, and unwrap the response envelope
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Option<T>> {
        self.inner.rate_limiter.until_ready().await;

        let response = request
            .bearer_auth(&self.inner.api_token)
            .send()
            .await
            .map_err(|e| AdblockError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Handle an API response wrapped in the Cloudflare envelope
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Option<T>> {
        let status = response.status();

        if !status.is_success() {
            return self.handle_error(status.as_u16(), response).await;
        }

        let body = response
            .text()
            .await
            .map_err(|e| AdblockError::Http(e.to_string()))?;
        let envelope: ApiResponse<T> = serde_json::from_str(&body)?;

        if envelope.success {
            Ok(envelope.result)
        } else {
            Err(AdblockError::Api {
                code: status.as_u16(),
                message: envelope.error_message(),
            })
        }
    }

    /// Convert an error response to an [`AdblockError`]
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let body = response.text().await.unwrap_or_default();

        // Prefer the envelope's error list over the raw body
        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
            .ok()
            .filter(|envelope| !envelope.errors.is_empty())
            .map_or(body, |envelope| envelope.error_message());

        match status {
            401 | 403 => Err(AdblockError::Unauthorized),
            404 => Err(AdblockError::NotFound { resource: message }),
            429 => {
                warn!(retry_after = ?retry_after, "Rate limited by Cloudflare API");
                Err(AdblockError::RateLimited { retry_after })
            }
            _ => Err(AdblockError::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Builder for configuring a [`GatewayClient`]
pub struct GatewayClientBuilder {
    account_id: String,
    api_token: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    rate_limit: RateLimitConfig,
}

impl GatewayClientBuilder {
    /// Create a new builder for the given account and API token
    #[must_use]
    pub fn new(account_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("adblock-sync/{}", env!("CARGO_PKG_VERSION")),
            rate_limit: RateLimitConfig::default(),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the client-side rate limit
    #[must_use]
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.rate_limit = config;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<GatewayClient> {
        if self.account_id.trim().is_empty() {
            return Err(AdblockError::Config("account id is empty".into()));
        }
        if self.api_token.trim().is_empty() {
            return Err(AdblockError::Config("API token is empty".into()));
        }

        let base_url = Url::parse(&self.base_url)
            .map_err(|e| AdblockError::Config(format!("invalid base URL {}: {e}", self.base_url)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| AdblockError::Http(e.to_string()))?;

        Ok(GatewayClient {
            inner: Arc::new(ClientInner {
                http,
                account_id: self.account_id,
                api_token: self.api_token,
                base_url,
                rate_limiter: RateLimiter::direct(self.rate_limit.quota()),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_url_escapes_segments() {
        let client = GatewayClient::builder("acc 1", "token")
            .base_url("https://api.example.com/client/v4")
            .build()
            .unwrap();

        let url = client.account_url(&["gateway", "lists", "a/b"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/client/v4/accounts/acc%201/gateway/lists/a%2Fb"
        );
    }

    #[test]
    fn test_account_url_with_trailing_slash() {
        let client = GatewayClient::builder("acc", "token")
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();

        let url = client.account_url(&["gateway", "rules"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/accounts/acc/gateway/rules");
    }

    #[test]
    fn test_build_rejects_missing_credentials() {
        assert!(matches!(
            GatewayClient::new("", "token"),
            Err(AdblockError::Config(_))
        ));
        assert!(matches!(
            GatewayClient::new("acc", "  "),
            Err(AdblockError::Config(_))
        ));
    }
}

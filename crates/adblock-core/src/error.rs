use thiserror::Error;

/// Result type alias for ad-blocking sync operations
pub type Result<T> = std::result::Result<T, AdblockError>;

/// Errors that can occur while syncing feeds into Cloudflare Gateway
#[derive(Error, Debug)]
pub enum AdblockError {
    /// Authentication failed - invalid or missing API token
    #[error("authentication failed: invalid API token or insufficient permissions")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("rate limit exceeded, retry after {retry_after:?} seconds")]
    RateLimited {
        /// Seconds to wait before retrying
        retry_after: Option<u64>,
    },

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message(s) from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A domain feed could not be fetched
    #[error("feed {source_name} failed: {message}")]
    Feed {
        /// Feed name or URL
        source_name: String,
        /// What went wrong
        message: String,
    },

    /// Chunk size must be positive
    #[error("invalid chunk size: must be greater than zero")]
    InvalidChunkSize,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AdblockError {
    /// Returns true if the error is transient
    ///
    /// Advisory for library callers that schedule their own reruns; the
    /// reconciler itself never retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Http(_))
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RateLimited { .. } => Some(429),
            Self::NotFound { .. } => Some(404),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

use thiserror::Error;

/// Result type alias for feed operations
pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// Errors from fetching domain feeds
#[derive(Error, Debug)]
pub enum FeedError {
    /// The request could not be sent or the body could not be read
    #[error("{source_name}: request failed: {message}")]
    Request {
        /// Feed name
        source_name: String,
        /// Underlying transport error
        message: String,
    },

    /// The feed answered with a non-success status
    #[error("{source_name}: HTTP status {status}")]
    Status {
        /// Feed name
        source_name: String,
        /// HTTP status code
        status: u16,
    },

    /// The feed URL does not parse
    #[error("invalid feed URL {url}: {message}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser message
        message: String,
    },

    /// No feeds were configured
    #[error("no feed sources configured")]
    NoSources,
}

impl From<FeedError> for adblock_core::AdblockError {
    fn from(err: FeedError) -> Self {
        match err {
            FeedError::Request {
                source_name,
                message,
            } => Self::Feed {
                source_name,
                message,
            },
            FeedError::Status {
                source_name,
                status,
            } => Self::Feed {
                source_name,
                message: format!("HTTP status {status}"),
            },
            FeedError::InvalidUrl { url, message } => {
                Self::Config(format!("invalid feed URL {url}: {message}"))
            }
            FeedError::NoSources => Self::Config("no feed sources configured".into()),
        }
    }
}

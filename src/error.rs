use thiserror::Error;

/// Main error type for the playlist merger
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Failed to fetch playlist from URL: {url}: {source}")]
    Retrieval {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch playlist from URL: {url} (HTTP {status})")]
    RetrievalStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Group '{group}' not found in special source")]
    GroupNotFound { group: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MergeError {
    /// URL of the playlist that could not be retrieved, if this is a retrieval error.
    pub fn url(&self) -> Option<&str> {
        match self {
            MergeError::Retrieval { url, .. } | MergeError::RetrievalStatus { url, .. } => {
                Some(url)
            }
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MergeError>;

//! Playlist retrieval over HTTP

use reqwest::Client;
use std::time::Duration;

use crate::config::MergeConfig;
use crate::error::{MergeError, Result};

/// HTTP client used to download playlists.
pub struct PlaylistFetcher {
    client: Client,
}

impl PlaylistFetcher {
    /// Create a fetcher from the merge configuration
    pub fn from_config(config: &MergeConfig) -> Result<Self> {
        Self::new(&config.user_agent, config.timeout_secs.map(Duration::from_secs))
    }

    /// Create a fetcher with a user agent and optional request timeout
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| MergeError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Download the playlist at `url` and return its body as text.
    ///
    /// Any non-2xx status is an error.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching playlist {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| MergeError::Retrieval {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MergeError::RetrievalStatus {
                url: url.to_string(),
                status,
            });
        }

        let text = response.text().await.map_err(|source| MergeError::Retrieval {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!("Fetched {} bytes from {}", text.len(), url);

        Ok(text)
    }
}

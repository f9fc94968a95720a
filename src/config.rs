//! Merge configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{MergeError, Result};

/// Default primary source playlist
pub const DEFAULT_PRIMARY_SOURCE: &str =
    "https://raw.githubusercontent.com/IPTVSHARED/iptv/refs/heads/main/IPTV_SHARED.m3u";

/// Default source for the special group
pub const DEFAULT_SPECIAL_SOURCE: &str =
    "https://raw.githubusercontent.com/Dimonovich/TV/Dimonovich/FREE/TV";

/// Default target playlist
pub const DEFAULT_TARGET: &str =
    "https://raw.githubusercontent.com/dikai669/playlist/refs/heads/main/mpll.m3u";

/// Default output file
pub const DEFAULT_OUTPUT: &str = "mpll.m3u";

/// Default special group
pub const DEFAULT_SPECIAL_GROUP: &str = "Lime (VPN 🇷🇺)";

/// Runtime configuration of a merge run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Source playlists. The first one is the primary source.
    pub source_urls: Vec<String>,

    /// Playlist to update
    pub target_url: String,

    /// Where the merged playlist is written
    pub output_file: PathBuf,

    /// Group taken from `special_source` instead of the primary source
    pub special_group: Option<String>,

    pub special_source: Option<String>,

    /// HTTP User-Agent header
    pub user_agent: String,

    /// Request timeout in seconds (none: transport default)
    pub timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            source_urls: vec![
                DEFAULT_PRIMARY_SOURCE.to_string(),
                DEFAULT_SPECIAL_SOURCE.to_string(),
            ],
            target_url: DEFAULT_TARGET.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT),
            special_group: Some(DEFAULT_SPECIAL_GROUP.to_string()),
            special_source: Some(DEFAULT_SPECIAL_SOURCE.to_string()),
            user_agent: default_user_agent(),
            timeout_secs: None,
            log_level: "info".to_string(),
        }
    }
}

/// `m3u-group-merge/<version>`
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl MergeConfig {
    /// The primary source URL.
    pub fn primary_source(&self) -> Option<&str> {
        self.source_urls.first().map(String::as_str)
    }

    /// Special group name and source, when both are set and non-empty.
    pub fn special(&self) -> Option<(&str, &str)> {
        match (non_empty(&self.special_group), non_empty(&self.special_source)) {
            (Some(group), Some(source)) => Some((group, source)),
            _ => None,
        }
    }

    /// Only one of the special group and its source is set.
    pub fn special_is_partial(&self) -> bool {
        non_empty(&self.special_group).is_some() != non_empty(&self.special_source).is_some()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.source_urls.is_empty() {
            return Err(MergeError::Config(
                "at least one source URL is required".to_string(),
            ));
        }
        // Further sources are never fetched.
        check_url(&self.source_urls[0])?;
        check_url(&self.target_url)?;
        if let Some((_, source)) = self.special() {
            check_url(source)?;
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(MergeError::Config("output file must not be empty".to_string()));
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn check_url(url: &str) -> Result<()> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(MergeError::Config(format!(
            "URL must start with http:// or https://: {}",
            url
        )));
    }
    Ok(())
}

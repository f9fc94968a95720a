//! Configuration file support
//!
//! Loads merge configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{self, MergeConfig};
use crate::error::{MergeError, Result};

/// Configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Playlist settings
    pub playlist: PlaylistSettings,
    /// Special group settings
    pub special: Option<SpecialSettings>,
    /// HTTP client settings
    pub http: Option<HttpSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSettings {
    /// Source playlist URLs, primary first
    pub sources: Vec<String>,
    /// Target playlist URL
    pub target: String,
    /// Output file path
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialSettings {
    /// Group name
    pub group: String,
    /// Playlist the group is taken from
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// User-Agent header
    pub user_agent: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MergeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| MergeError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MergeError::Config(format!("cannot serialize config: {}", e)))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            playlist: PlaylistSettings {
                sources: vec![
                    config::DEFAULT_PRIMARY_SOURCE.to_string(),
                    config::DEFAULT_SPECIAL_SOURCE.to_string(),
                ],
                target: config::DEFAULT_TARGET.to_string(),
                output: PathBuf::from(config::DEFAULT_OUTPUT),
            },
            special: Some(SpecialSettings {
                group: config::DEFAULT_SPECIAL_GROUP.to_string(),
                source: config::DEFAULT_SPECIAL_SOURCE.to_string(),
            }),
            http: Some(HttpSettings {
                user_agent: None,
                timeout_secs: Some(30),
            }),
            logging: Some(LoggingSettings {
                level: "info".to_string(),
            }),
        }
    }

    /// Convert to MergeConfig
    pub fn into_merge_config(self) -> MergeConfig {
        let (special_group, special_source) = match self.special {
            Some(s) => (Some(s.group), Some(s.source)),
            None => (None, None),
        };
        let http = self.http.unwrap_or(HttpSettings {
            user_agent: None,
            timeout_secs: None,
        });

        MergeConfig {
            source_urls: self.playlist.sources,
            target_url: self.playlist.target,
            output_file: self.playlist.output,
            special_group,
            special_source,
            user_agent: http.user_agent.unwrap_or_else(config::default_user_agent),
            timeout_secs: http.timeout_secs,
            log_level: self
                .logging
                .map(|l| l.level)
                .unwrap_or_else(|| "info".to_string()),
        }
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    ConfigFile::default_config().to_file(path)
}

//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::MergeConfig;
use crate::config_file::ConfigFile;
use crate::error::Result;

/// Merge group-title groups from source M3U playlists into a target playlist.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "m3u-group-merge")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source playlist URL; repeat for more sources, the first is the primary.
    #[arg(short, long = "source")]
    pub sources: Vec<String>,

    /// Target playlist URL.
    #[arg(short, long)]
    pub target: Option<String>,

    /// Output file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Group to take from the special source.
    #[arg(long)]
    pub special_group: Option<String>,

    /// Playlist the special group is taken from.
    #[arg(long)]
    pub special_source: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Logging level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write a default configuration file to this path and exit.
    #[arg(long)]
    pub write_default_config: Option<PathBuf>,
}

impl Args {
    /// Build the merge configuration: defaults, then the config file, then
    /// command line values.
    pub fn into_merge_config(self) -> Result<MergeConfig> {
        let mut config = match &self.config {
            Some(path) => ConfigFile::from_file(path)?.into_merge_config(),
            None => MergeConfig::default(),
        };

        if !self.sources.is_empty() {
            config.source_urls = self.sources;
        }
        if let Some(target) = self.target {
            config.target_url = target;
        }
        if let Some(output) = self.output {
            config.output_file = output;
        }
        if self.special_group.is_some() {
            config.special_group = self.special_group;
        }
        if self.special_source.is_some() {
            config.special_source = self.special_source;
        }
        if self.timeout.is_some() {
            config.timeout_secs = self.timeout;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }

        Ok(config)
    }
}

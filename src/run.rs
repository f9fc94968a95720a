//! A single merge run: fetch, merge, write.

use std::path::PathBuf;

use crate::config::MergeConfig;
use crate::error::{MergeError, Result};
use crate::fetch::PlaylistFetcher;
use crate::merge::{self, MergeReport, MergeSpec, SpecialGroup};
use crate::playlist::{extract_metadata, parse_groups};

/// Fetch all playlists named by `config`, merge them and write the output file.
///
/// Returns the output path and the merge report. Nothing is written if any
/// playlist cannot be fetched.
pub async fn run(config: &MergeConfig) -> Result<(PathBuf, MergeReport)> {
    config.validate()?;
    let fetcher = PlaylistFetcher::from_config(config)?;

    let primary_url = config
        .primary_source()
        .ok_or_else(|| MergeError::Config("no source URL".to_string()))?;
    if config.source_urls.len() > 1 {
        tracing::debug!(
            "Only the primary source is merged, ignoring {} more",
            config.source_urls.len() - 1
        );
    }
    if config.special_is_partial() {
        tracing::warn!("special_group and special_source must be set together, skipping special group");
    }

    let target_text = fetcher.fetch(&config.target_url).await?;
    let target = parse_groups(&target_text);
    let metadata = extract_metadata(&target_text);

    let primary = parse_groups(&fetcher.fetch(primary_url).await?);

    let special = match config.special() {
        Some((name, url)) => Some(SpecialGroup {
            name: name.to_string(),
            groups: parse_groups(&fetcher.fetch(url).await?),
        }),
        None => None,
    };

    let (merged, report) = merge::merge(MergeSpec {
        target,
        primary,
        special,
    });

    merge::write_playlist(&config.output_file, &metadata, &merged)?;
    tracing::info!(
        "Playlist updated and saved to {}",
        config.output_file.display()
    );

    Ok((config.output_file.clone(), report))
}

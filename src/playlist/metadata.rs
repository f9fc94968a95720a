//! Playlist header extraction

use super::split_lines;

/// Playlist header marker.
pub const EXTM3U: &str = "#EXTM3U";
/// Separator comment prefix used by hand-maintained playlists.
pub const SEPARATOR: &str = "#---";

/// Collect the header and separator lines of a playlist, in order.
pub fn extract_metadata(text: &str) -> Vec<String> {
    split_lines(text)
        .filter(|line| line.starts_with(EXTM3U) || line.starts_with(SEPARATOR))
        .map(str::to_string)
        .collect()
}

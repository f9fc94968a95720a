//! Group parser
//!
//! Splits an M3U playlist into runs of lines keyed by `group-title`.

use super::{split_lines, GroupMap};

/// Entry info line.
pub const EXTINF: &str = "#EXTINF";
/// Player option line, kept with the entry it follows.
pub const EXTVLCOPT: &str = "#EXTVLCOPT";
/// Stream URL prefix.
pub const STREAM_URL: &str = "http";

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// Extract the trimmed `group-title` value of an `#EXTINF` line.
pub fn group_title(line: &str) -> Option<&str> {
    regex!(r#"group-title="([^"]+)""#)
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Parse playlist text into groups.
///
/// Only `#EXTINF`, `#EXTVLCOPT` and `http...` lines are kept. An `#EXTINF`
/// line whose `group-title` differs from the current one closes the current
/// run and opens a new one. If a group name shows up again later in the
/// playlist, its last run replaces the earlier one.
pub fn parse_groups(text: &str) -> GroupMap {
    let mut groups = GroupMap::new();
    let mut current: Option<String> = None;
    let mut buffer: Vec<String> = Vec::new();

    for line in split_lines(text) {
        if line.starts_with(EXTINF) {
            if let Some(title) = group_title(line) {
                if current.as_deref() != Some(title) {
                    flush(&mut groups, current.as_deref(), &mut buffer);
                    current = Some(title.to_string());
                }
            }
            buffer.push(line.to_string());
        } else if line.starts_with(EXTVLCOPT) || line.starts_with(STREAM_URL) {
            buffer.push(line.to_string());
        }
    }
    flush(&mut groups, current.as_deref(), &mut buffer);

    tracing::debug!("parsed {} groups", groups.len());
    groups
}

// Store the buffered run under `name`. Runs without a (non-empty) group
// name are dropped.
fn flush(groups: &mut GroupMap, name: Option<&str>, buffer: &mut Vec<String>) {
    let lines = std::mem::take(buffer);
    match name {
        Some(name) if !name.is_empty() && !lines.is_empty() => {
            groups.insert(name, lines);
        }
        _ => {}
    }
}

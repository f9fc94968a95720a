//! Group merger
//!
//! Replaces target groups with the same-named groups of a source playlist
//! and writes the result out.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MergeError, Result};
use crate::playlist::GroupMap;

/// A group taken from its own playlist.
#[derive(Debug, Clone)]
pub struct SpecialGroup {
    pub name: String,
    pub groups: GroupMap,
}

/// Input of a merge.
#[derive(Debug, Clone)]
pub struct MergeSpec {
    pub target: GroupMap,
    pub primary: GroupMap,
    pub special: Option<SpecialGroup>,
}

/// What a merge changed.
#[derive(Debug, Default)]
pub struct MergeReport {
    /// Groups replaced from the primary source, in the order they were replaced.
    pub replaced: Vec<String>,
    /// The special group was taken from the special source.
    pub special_replaced: bool,
    /// Non-fatal problems.
    pub warnings: Vec<MergeError>,
}

/// Merge the sources of `spec` into its target.
///
/// Every target group that also exists in the primary source gets the
/// primary's lines; groups only found in the primary are not added. The
/// special group, if any, is applied last and may add a group.
pub fn merge(spec: MergeSpec) -> (GroupMap, MergeReport) {
    let MergeSpec {
        mut target,
        primary,
        special,
    } = spec;
    let mut report = MergeReport::default();

    for (name, lines) in primary.iter() {
        if target.contains(name) {
            tracing::info!("Updating group '{}' from primary source", name);
            target.insert(name, lines.to_vec());
            report.replaced.push(name.to_string());
        }
    }

    if let Some(SpecialGroup { name, groups }) = special {
        match groups.get(&name) {
            Some(lines) => {
                tracing::info!("Updating group '{}' from special source", name);
                target.insert(name, lines.to_vec());
                report.special_replaced = true;
            }
            None => {
                let err = MergeError::GroupNotFound { group: name };
                tracing::warn!("{}", err);
                report.warnings.push(err);
            }
        }
    }

    (target, report)
}

/// Render the merged playlist: metadata lines, then every group's lines.
pub fn render(metadata: &[String], groups: &GroupMap) -> String {
    let mut output = String::new();
    for line in metadata.iter().map(String::as_str).chain(groups.lines()) {
        output.push_str(line);
        output.push('\n');
    }
    output
}

/// Write the merged playlist to `path`.
pub fn write_playlist(path: &Path, metadata: &[String], groups: &GroupMap) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(render(metadata, groups).as_bytes())?;
    writer.flush()?;
    Ok(())
}

//! M3U playlist handling
//!
//! This module handles the playlist side of a merge:
//! - Grouping `#EXTINF` entries by their `group-title` attribute
//! - Extracting the header / separator lines of a target playlist
//! - The ordered `GroupMap` both of them feed into the merger

pub mod metadata;
pub mod parser;

pub use metadata::extract_metadata;
pub use parser::parse_groups;

/// Split playlist text into lines.
///
/// Any of `\n`, `\r\n`, a lone `\r` and the other Unicode line boundaries
/// end a line. Empty lines are skipped.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        matches!(
            c,
            '\n' | '\r'
                | '\x0b'
                | '\x0c'
                | '\x1c'
                | '\x1d'
                | '\x1e'
                | '\u{85}'
                | '\u{2028}'
                | '\u{2029}'
        )
    })
    .filter(|line| !line.is_empty())
}

/// Ordered mapping from group name to the raw playlist lines of that group.
///
/// Iteration order is the order in which names were first inserted.
/// Inserting an existing name replaces its lines but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMap {
    entries: Vec<(String, Vec<String>)>,
}

impl GroupMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Lines stored for `name`, if the group exists.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.position(name).map(|i| self.entries[i].1.as_slice())
    }

    /// Store `lines` under `name`, returning the lines previously stored there.
    pub fn insert(&mut self, name: impl Into<String>, lines: Vec<String>) -> Option<Vec<String>> {
        let name = name.into();
        match self.position(&name) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, lines)),
            None => {
                self.entries.push((name, lines));
                None
            }
        }
    }

    /// Group names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.as_slice()))
    }

    /// All lines of all groups, group after group.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, lines)| lines.iter().map(String::as_str))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for GroupMap {
    fn from_iter<I: IntoIterator<Item = (N, Vec<String>)>>(iter: I) -> Self {
        let mut map = GroupMap::new();
        for (name, lines) in iter {
            map.insert(name, lines);
        }
        map
    }
}

//! In-memory result of a listing run.
//!
//! Keeps one [`ListingSummary`] per processed directory, keyed by path, so a
//! dry run can report exactly what a real run would have written.

use super::IndexFault;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    time::SystemTime,
};

/// A file row, derived from filesystem metadata on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Display name (lossy for names that are not valid UTF-8).
    pub name: String,
    /// Percent-encoded href built from the raw filename.
    pub href: String,
    pub timestamp: SystemTime,
    pub size: u64,
}

/// Rows of one listing document, in emitted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// Subdirectory names, alphabetical.
    pub subdirs: Vec<String>,
    /// File entries, most recent first.
    pub files: Vec<FileEntry>,
    /// Whether the document was actually written to disk.
    pub written: bool,
}

impl ListingSummary {
    #[cfg(test)]
    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Everything a run visited, plus the faults it reported.
#[derive(Debug, Default)]
pub struct IndexReport {
    pub listings: BTreeMap<PathBuf, ListingSummary>,
    pub faults: Vec<IndexFault>,
}

impl IndexReport {
    pub fn get(&self, dir: &Path) -> Option<&ListingSummary> {
        self.listings.get(dir)
    }

    /// Number of listing documents written to disk.
    pub fn written(&self) -> usize {
        self.listings.values().filter(|l| l.written).count()
    }

    /// Number of file rows across all listings.
    pub fn files(&self) -> usize {
        self.listings.values().map(|l| l.files.len()).sum()
    }
}

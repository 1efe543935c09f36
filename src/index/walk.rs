//! Depth-first traversal that writes one listing per directory.
//!
//! Each call to [`Walker::visit`] owns the listing of its directory. The
//! listing is opened before any child is processed, receives a row for a
//! subdirectory right before that subdirectory is entered, and is closed
//! only after all children are done. The recursion therefore holds one
//! open listing per depth and releases them in reverse order.

use super::{FileEntry, IndexFault, IndexReport, ListingSummary, ListingWriter};
use crate::{
    config::{TimestampSource, TreeConfig},
    debug, log,
    utils::path::{contains_marker, encode_segment},
};
use std::{
    ffi::OsString,
    fs::{self, Metadata},
    io,
    path::{Component, Path},
    time::SystemTime,
};

/// An immediate child of a directory, classified without following links.
struct Child {
    name: String,
    /// Encoded href segment, built from the raw name.
    href: String,
    os_name: OsString,
    /// Symlink to a directory: listed, never entered.
    symlink: bool,
}

impl Child {
    fn new(os_name: OsString, symlink: bool) -> Self {
        Self {
            name: os_name.to_string_lossy().into_owned(),
            href: encode_segment(&os_name),
            os_name,
            symlink,
        }
    }
}

/// Immediate children of one directory.
#[derive(Default)]
struct Children {
    dirs: Vec<Child>,
    files: Vec<Child>,
}

/// Traversal state for one run.
pub struct Walker<'a> {
    config: &'a TreeConfig,
    filter: Option<glob::Pattern>,
    report: IndexReport,
}

impl<'a> Walker<'a> {
    pub fn new(config: &'a TreeConfig) -> Self {
        Self {
            config,
            filter: config.index.filter_pattern(),
            report: IndexReport::default(),
        }
    }

    /// Process the whole tree below the configured root.
    pub fn run(mut self) -> IndexReport {
        let root = self.config.get_root().to_path_buf();

        let excluded = root.components().any(|c| match c {
            Component::Normal(segment) => self.is_excluded(&segment.to_string_lossy()),
            _ => false,
        });
        if excluded {
            debug!("skip"; "{} (excluded)", root.display());
            return self.report;
        }

        self.visit(&root);
        self.report
    }

    fn visit(&mut self, dir: &Path) {
        let config = self.config;
        let index_name = config.index.filename.as_str();
        let mut listing = self.open_listing(dir);

        let parent = (!config.is_root(dir) || config.index.root_parent_link).then_some(index_name);
        listing.header(&self.heading(dir), parent);

        let mut children = self.read_children(dir);
        children.dirs.sort_by(|a, b| a.name.cmp(&b.name));

        let mut summary = ListingSummary::default();

        for child in children.dirs {
            if self.is_excluded(&child.name) {
                debug!("skip"; "{} (excluded)", dir.join(&child.os_name).display());
                continue;
            }

            let path = dir.join(&child.os_name);
            if !is_writable(&path) {
                self.fault(IndexFault::Unwritable(path));
                continue;
            }
            debug!("dir"; "{}", dir_line(&path));

            listing.dir_row(&child.name, &child.href, index_name);
            summary.subdirs.push(child.name);

            if child.symlink {
                debug!("skip"; "{} (symlink, not followed)", path.display());
                continue;
            }
            self.visit(&path);
        }

        let mut entries = Vec::with_capacity(children.files.len());
        for child in children.files {
            if let Some(filter) = &self.filter
                && !filter.matches(&child.name)
            {
                debug!("skip"; "{}", skip_line(dir, &child.name));
                continue;
            }
            debug!("file"; "{}", file_line(dir, &child.name));

            if is_listing_name(&child.name, index_name) {
                continue;
            }

            let path = dir.join(&child.os_name);
            match self.file_entry(&path, child) {
                Ok(entry) => entries.push(entry),
                Err(e) => self.fault(IndexFault::Metadata(path, e)),
            }
        }

        // Newest first; ties by name so output is stable
        entries.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| a.name.cmp(&b.name))
        });
        for entry in &entries {
            listing.file_row(entry);
        }
        summary.files = entries;

        let listing_path = listing.path().to_path_buf();
        summary.written = match listing.finish() {
            Ok(written) => written,
            Err(e) => {
                self.fault(IndexFault::Write(listing_path, e));
                false
            }
        };

        self.report.listings.insert(dir.to_path_buf(), summary);
    }

    /// Open the listing for `dir`, or a discarding writer in dry-run mode
    /// or when the file cannot be created.
    fn open_listing(&mut self, dir: &Path) -> ListingWriter {
        let path = dir.join(&self.config.index.filename);
        if self.config.dry_run {
            return ListingWriter::discard(&path);
        }

        match ListingWriter::create(&path) {
            Ok(writer) => writer,
            Err(e) => {
                let writer = ListingWriter::discard(&path);
                self.fault(IndexFault::CreateListing(path, e));
                writer
            }
        }
    }

    /// Read and classify the immediate children of `dir`.
    fn read_children(&mut self, dir: &Path) -> Children {
        let mut children = Children::default();

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                self.fault(IndexFault::ReadDir(dir.to_path_buf(), e));
                return children;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.fault(IndexFault::ReadDir(dir.to_path_buf(), e));
                    continue;
                }
            };

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    self.fault(IndexFault::Metadata(entry.path(), e));
                    continue;
                }
            };

            if file_type.is_dir() {
                children.dirs.push(Child::new(entry.file_name(), false));
            } else if file_type.is_symlink() && entry.path().is_dir() {
                children.dirs.push(Child::new(entry.file_name(), true));
            } else {
                children.files.push(Child::new(entry.file_name(), false));
            }
        }

        children
    }

    fn file_entry(&self, path: &Path, child: Child) -> io::Result<FileEntry> {
        // Follows symlinks, so a dangling link is reported here
        let metadata = fs::metadata(path)?;
        Ok(FileEntry {
            name: child.name,
            href: child.href,
            timestamp: timestamp(&metadata, self.config.index.timestamp)?,
            size: metadata.len(),
        })
    }

    fn heading(&self, dir: &Path) -> String {
        if self.config.is_root(dir)
            && let Some(title) = &self.config.index.title
        {
            return title.clone();
        }
        dir.file_name().map_or_else(
            || dir.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    fn is_excluded(&self, name: &str) -> bool {
        contains_marker(name, &self.config.index.exclude)
    }

    fn fault(&mut self, fault: IndexFault) {
        log!("error"; "{}", fault.describe());
        self.report.faults.push(fault);
    }
}

/// Whether `name` is the listing's own filename (trimmed, case-insensitive).
pub fn is_listing_name(name: &str, index_name: &str) -> bool {
    name.trim().to_lowercase() == index_name.to_lowercase()
}

fn dir_line(path: &Path) -> String {
    format!("DIR:{}", path.display())
}

fn file_line(dir: &Path, name: &str) -> String {
    format!("{}/{name}", dir.display())
}

fn skip_line(dir: &Path, name: &str) -> String {
    format!("SKIP: {}", file_line(dir, name))
}

/// Whether this process may create files in `path`.
#[cfg(unix)]
fn is_writable(path: &Path) -> bool {
    use std::{ffi::CString, os::unix::ffi::OsStrExt};

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
fn is_writable(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| !m.permissions().readonly())
}

fn timestamp(metadata: &Metadata, source: TimestampSource) -> io::Result<SystemTime> {
    match source {
        TimestampSource::Modified => metadata.modified(),
        TimestampSource::Created => metadata.created().or_else(|_| metadata.modified()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;

    #[test]
    fn test_verbose_lines() {
        let dir = Path::new("/srv/files");
        assert_eq!(dir_line(&dir.join("docs")), "DIR:/srv/files/docs");
        assert_eq!(file_line(dir, "a.txt"), "/srv/files/a.txt");
        assert_eq!(skip_line(dir, "a.png"), "SKIP: /srv/files/a.png");
    }

    #[test]
    fn test_read_children_of_file_is_fault() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let config = test_config_at(dir.path());
        let mut walker = Walker::new(&config);
        let children = walker.read_children(&file);

        assert!(children.dirs.is_empty() && children.files.is_empty());
        assert!(matches!(
            walker.report.faults.as_slice(),
            [IndexFault::ReadDir(path, _)] if path == &file
        ));
    }

    #[test]
    fn test_read_children_classifies_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a b.txt"), "x").unwrap();

        let config = test_config_at(dir.path());
        let mut walker = Walker::new(&config);
        let children = walker.read_children(dir.path());

        assert_eq!(children.dirs.len(), 1);
        assert_eq!(children.dirs[0].name, "sub");
        assert_eq!(children.files[0].href, "a%20b.txt");
        assert!(walker.report.faults.is_empty());
    }

    #[test]
    fn test_tempdir_is_writable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_writable(dir.path()));
        assert!(!is_writable(&dir.path().join("missing")));
    }
}

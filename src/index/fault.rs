//! Recoverable faults reported during a listing run.
//!
//! None of these stop the run: the affected directory or file is left out
//! and traversal continues with the rest of the tree.

use std::{
    error::Error as _,
    io,
    path::PathBuf,
};
use thiserror::Error;

/// A per-directory or per-file problem, reported and skipped.
#[derive(Debug, Error)]
pub enum IndexFault {
    /// The listing document could not be created; its rows are dropped
    /// but subdirectories are still processed.
    #[error("cannot create listing `{}`", .0.display())]
    CreateListing(PathBuf, #[source] io::Error),

    /// The directory is not writable; it is neither listed nor entered.
    #[error("folder `{}` is not writable, skipping", .0.display())]
    Unwritable(PathBuf),

    /// The file's metadata could not be read (vanished, dangling link).
    #[error("cannot read metadata of `{}`", .0.display())]
    Metadata(PathBuf, #[source] io::Error),

    /// The directory (or one of its entries) could not be read.
    #[error("cannot read directory `{}`", .0.display())]
    ReadDir(PathBuf, #[source] io::Error),

    /// Writing into an open listing failed; the rest of it is abandoned.
    #[error("cannot write listing `{}`", .0.display())]
    Write(PathBuf, #[source] io::Error),
}

impl IndexFault {
    /// Path of the directory or file the fault refers to.
    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::CreateListing(path, _)
            | Self::Unwritable(path)
            | Self::Metadata(path, _)
            | Self::ReadDir(path, _)
            | Self::Write(path, _) => path,
        }
    }

    /// Message including the underlying I/O error, for logging.
    pub fn describe(&self) -> String {
        match self.source() {
            Some(source) => format!("{self}: {source}"),
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_describe_includes_source() {
        let fault = IndexFault::CreateListing(
            PathBuf::from("/srv/files/index.html"),
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let message = fault.describe();
        assert!(message.contains("/srv/files/index.html"));
        assert!(message.ends_with("permission denied"));
    }

    #[test]
    fn test_describe_without_source() {
        let fault = IndexFault::Unwritable(PathBuf::from("/srv/files/locked"));
        assert_eq!(
            fault.describe(),
            "folder `/srv/files/locked` is not writable, skipping"
        );
        assert_eq!(fault.path(), Path::new("/srv/files/locked"));
    }
}

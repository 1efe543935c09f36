//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `contains_marker` - exclusion check for version-control directories

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Relative paths are joined onto `base` first, then `canonicalize()`
/// resolves symlinks, `.` and `..`. Paths that do not exist are returned
/// joined but otherwise untouched.
#[inline]
pub fn normalize_path(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    joined.canonicalize().unwrap_or(joined)
}

/// Check whether a path segment contains any of the given markers.
///
/// Matching is by substring, so the `.git` marker also excludes `.github`.
#[inline]
pub fn contains_marker(segment: &str, markers: &[String]) -> bool {
    markers
        .iter()
        .any(|marker| !marker.is_empty() && segment.contains(marker.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path, Path::new("/base"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative_missing() {
        let path = Path::new("does-not-exist/file.txt");
        let normalized = normalize_path(path, Path::new("/base"));
        assert_eq!(normalized, PathBuf::from("/base/does-not-exist/file.txt"));
    }

    #[test]
    fn test_normalize_path_existing() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();

        let normalized = normalize_path(&nested.join(".."), Path::new("/base"));
        assert_eq!(normalized, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_contains_marker() {
        let markers = vec![".git".to_string()];
        assert!(contains_marker(".git", &markers));
        assert!(contains_marker(".github", &markers));
        assert!(!contains_marker("src", &markers));
        assert!(!contains_marker("git", &markers));
    }

    #[test]
    fn test_contains_marker_ignores_empty() {
        let markers = vec![String::new()];
        assert!(!contains_marker("anything", &markers));
        assert!(!contains_marker("anything", &[]));
    }
}

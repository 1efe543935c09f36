//! `[index]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [index]
//! filename = "index.html"
//! filter = "*.pdf"
//! exclude = [".git", ".svn"]
//! root_parent_link = false
//! timestamp = "modified"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Which filesystem timestamp a file row shows and is sorted by.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimestampSource {
    /// Last modification time (default).
    #[default]
    Modified,
    /// Creation time, falling back to modification time where unsupported.
    Created,
}

/// Directory listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSectionConfig {
    /// Reserved filename of the listing written into every directory.
    pub filename: String,

    /// Only list files whose name matches this glob.
    pub filter: Option<String>,

    /// Directory name markers; a directory whose name contains one is skipped.
    pub exclude: Vec<String>,

    /// Emit a `..` row in the root listing as well.
    pub root_parent_link: bool,

    /// Timestamp shown in the date column.
    pub timestamp: TimestampSource,

    /// Heading of the root listing (defaults to the root directory name).
    pub title: Option<String>,
}

impl Default for IndexSectionConfig {
    fn default() -> Self {
        Self {
            filename: "index.html".into(),
            filter: None,
            exclude: vec![".git".into()],
            root_parent_link: false,
            timestamp: TimestampSource::Modified,
            title: None,
        }
    }
}

impl IndexSectionConfig {
    pub const FILENAME: FieldPath = FieldPath::new("index.filename");
    pub const FILTER: FieldPath = FieldPath::new("index.filter");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let name = self.filename.trim();
        if name.is_empty() {
            diag.error(Self::FILENAME, "listing filename must not be empty");
        } else if name.contains(['/', '\\']) || name == "." || name == ".." {
            diag.error_with_hint(
                Self::FILENAME,
                format!("`{name}` is not a plain filename"),
                "use a bare name such as \"index.html\"",
            );
        }

        if let Some(filter) = &self.filter
            && let Err(e) = glob::Pattern::new(filter)
        {
            diag.error(Self::FILTER, format!("invalid glob `{filter}`: {e}"));
        }
    }

    /// Compile the filter glob, if any.
    ///
    /// Only call after `validate()` succeeded; an invalid glob yields `None`.
    pub fn filter_pattern(&self) -> Option<glob::Pattern> {
        self.filter
            .as_deref()
            .and_then(|f| glob::Pattern::new(f).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.index.filename, "index.html");
        assert_eq!(config.index.filter, None);
        assert_eq!(config.index.exclude, vec![".git".to_string()]);
        assert!(!config.index.root_parent_link);
        assert_eq!(config.index.timestamp, TimestampSource::Modified);
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[index]\nfilename = \"README.html\"\nfilter = \"*.pdf\"\nexclude = [\".svn\"]\nroot_parent_link = true\ntimestamp = \"created\"",
        );
        assert_eq!(config.index.filename, "README.html");
        assert_eq!(config.index.filter.as_deref(), Some("*.pdf"));
        assert_eq!(config.index.exclude, vec![".svn".to_string()]);
        assert!(config.index.root_parent_link);
        assert_eq!(config.index.timestamp, TimestampSource::Created);
    }

    #[test]
    fn test_validate_rejects_bad_filename() {
        for bad in ["", "  ", "sub/index.html", "..", "a\\b.html"] {
            let section = IndexSectionConfig {
                filename: bad.into(),
                ..Default::default()
            };
            let mut diag = ConfigDiagnostics::new();
            section.validate(&mut diag);
            assert!(diag.has_errors(), "`{bad}` should be rejected");
        }
    }

    #[test]
    fn test_validate_rejects_bad_glob() {
        let section = IndexSectionConfig {
            filter: Some("[unclosed".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        section.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, IndexSectionConfig::FILTER);
    }

    #[test]
    fn test_filter_pattern() {
        let section = IndexSectionConfig {
            filter: Some("*.txt".into()),
            ..Default::default()
        };
        let pattern = section.filter_pattern().unwrap();
        assert!(pattern.matches("notes.txt"));
        assert!(!pattern.matches("notes.md"));
        assert!(IndexSectionConfig::default().filter_pattern().is_none());
    }
}

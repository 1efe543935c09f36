//! `[feed]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [feed]
//! base_url = "https://example.github.io"
//! title = "example.github.io"
//! description = "A collection of thoughts."
//! output = "rss.xml"
//! format = "rss"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

/// Feed generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSectionConfig {
    /// Site URL that page paths are appended to.
    pub base_url: Option<String>,

    /// Channel title (defaults to the root directory name).
    pub title: Option<String>,

    /// Channel description.
    pub description: String,

    /// Feed file, relative to the root.
    pub output: PathBuf,

    pub format: FeedFormat,

    /// Strip indentation and newlines from the written XML.
    pub minify: bool,
}

impl Default for FeedSectionConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            title: None,
            description: "Directory listings".into(),
            output: "rss.xml".into(),
            format: FeedFormat::Rss,
            minify: false,
        }
    }
}

impl FeedSectionConfig {
    pub const BASE_URL: FieldPath = FieldPath::new("feed.base_url");
    pub const OUTPUT: FieldPath = FieldPath::new("feed.output");

    /// Validate feed settings. `required` is set when the feed command runs.
    pub fn validate(&self, required: bool, diag: &mut ConfigDiagnostics) {
        match self.base_url.as_deref() {
            None if required => diag.error_with_hint(
                Self::BASE_URL,
                "a base URL is required to build the feed",
                "set [feed] base_url or pass --base-url",
            ),
            None => {}
            Some(url) => match url::Url::parse(url) {
                Ok(parsed) if parsed.cannot_be_a_base() => {
                    diag.error(Self::BASE_URL, format!("`{url}` cannot be used as a base URL"));
                }
                Ok(_) => {}
                Err(e) => diag.error(Self::BASE_URL, format!("invalid URL `{url}`: {e}")),
            },
        }

        if self.output.as_os_str().is_empty() {
            diag.error(Self::OUTPUT, "feed output path must not be empty");
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.feed.base_url, None);
        assert_eq!(config.feed.output, PathBuf::from("rss.xml"));
        assert_eq!(config.feed.format, FeedFormat::Rss);
        assert!(!config.feed.minify);
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[feed]\nbase_url = \"https://example.com/\"\noutput = \"atom.xml\"\nformat = \"atom\"\nminify = true",
        );
        assert_eq!(config.feed.base_url(), "https://example.com");
        assert_eq!(config.feed.output, PathBuf::from("atom.xml"));
        assert_eq!(config.feed.format, FeedFormat::Atom);
        assert!(config.feed.minify);
    }

    #[test]
    fn test_base_url_required_only_for_feed() {
        let section = FeedSectionConfig::default();

        let mut diag = ConfigDiagnostics::new();
        section.validate(false, &mut diag);
        assert!(diag.is_empty());

        let mut diag = ConfigDiagnostics::new();
        section.validate(true, &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_invalid_base_url() {
        for bad in ["not a url", "mailto:someone@example.com"] {
            let section = FeedSectionConfig {
                base_url: Some(bad.into()),
                ..Default::default()
            };
            let mut diag = ConfigDiagnostics::new();
            section.validate(false, &mut diag);
            assert!(diag.has_errors(), "`{bad}` should be rejected");
        }
    }
}

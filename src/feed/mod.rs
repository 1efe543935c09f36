//! Feed generation (RSS, Atom).
//!
//! Scans the tree for generated pages and writes one syndication feed:
//!
//! - **RSS 2.0**: default format (`rss.xml`)
//! - **Atom 1.0**: selected with `format = "atom"`

use crate::{
    config::{FeedFormat, TreeConfig},
    log,
    utils::{html::minify_xml, plural::plural_count},
};
use anyhow::{Context, Result};
use std::fs;

pub mod atom;
mod common;
pub mod rss;

use common::collect_pages;

/// Build the feed described by `config`. Returns the number of items.
///
/// In dry-run mode the feed is rendered (and validated) but not written.
pub fn build_feed(config: &TreeConfig) -> Result<usize> {
    let pages = collect_pages(config);
    let xml = match config.feed.format {
        FeedFormat::Rss => rss::render_rss(config, &pages)?,
        FeedFormat::Atom => atom::render_atom(config, &pages),
    };

    let output = &config.feed.output;
    let items = plural_count(pages.len(), "item");

    if config.dry_run {
        log!("dry-run"; "would write {} ({items})", output.display());
        return Ok(pages.len());
    }

    let xml = minify_xml(xml.as_bytes(), config.feed.minify);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(output, &*xml).with_context(|| format!("failed to write {}", output.display()))?;

    log!("feed"; "{} ({items})", config.root_relative(output).display());
    Ok(pages.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;

    fn setup() -> (tempfile::TempDir, TreeConfig) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("docs")).unwrap();
        fs::write(root.join("index.html"), "").unwrap();
        fs::write(root.join("docs/index.html"), "").unwrap();
        fs::write(root.join("docs/readme.txt"), "").unwrap();

        let mut config = test_config_at(root);
        config.feed.base_url = Some("https://example.com".into());
        config.feed.output = root.join("out/rss.xml");
        (dir, config)
    }

    #[test]
    fn test_build_rss_feed() {
        let (_dir, config) = setup();

        assert_eq!(build_feed(&config).unwrap(), 2);
        let xml = fs::read_to_string(&config.feed.output).unwrap();
        assert!(xml.contains("<link>https://example.com/docs/index.html</link>"));
        assert!(xml.contains("<link>https://example.com/index.html</link>"));
        assert!(xml.contains("<title>Index</title>"));
    }

    #[test]
    fn test_build_atom_feed_minified() {
        let (_dir, mut config) = setup();
        config.feed.format = FeedFormat::Atom;
        config.feed.minify = true;

        assert_eq!(build_feed(&config).unwrap(), 2);
        let xml = fs::read_to_string(&config.feed.output).unwrap();
        assert!(xml.contains("<feed"));
        assert!(!xml.contains('\n'));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (_dir, mut config) = setup();
        config.dry_run = true;

        assert_eq!(build_feed(&config).unwrap(), 2);
        assert!(!config.feed.output.exists());
    }

    #[test]
    fn test_feed_is_not_listed_in_itself() {
        let (_dir, config) = setup();
        build_feed(&config).unwrap();
        assert_eq!(build_feed(&config).unwrap(), 2);
    }
}

//! Page discovery shared by both feed formats.

use crate::{
    config::TreeConfig,
    debug,
    utils::{date::DateTimeUtc, path::relative_url},
};
use jwalk::{Parallelism, WalkDir};
use std::path::Path;

/// A generated page included in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage {
    pub title: String,
    /// Absolute URL: base URL plus the encoded relative path.
    pub link: String,
    /// Relative path with `/` separators, used for ordering.
    pub rel: String,
    pub updated: Option<DateTimeUtc>,
}

impl FeedPage {
    fn from_path(path: &Path, config: &TreeConfig) -> Self {
        let rel = relative_url(&config.root_relative(path));
        let updated = path
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .map(DateTimeUtc::from_system_time)
            .filter(|dt| dt.validate().is_ok());

        Self {
            title: page_title(path),
            link: format!("{}/{}", config.feed.base_url(), rel),
            rel,
            updated,
        }
    }
}

/// Collect every `*.html` page below the root, skipping hidden entries.
pub fn collect_pages(config: &TreeConfig) -> Vec<FeedPage> {
    let mut pages: Vec<FeedPage> = WalkDir::new(config.get_root())
        .skip_hidden(true)
        .parallelism(Parallelism::Serial)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .map(|path| {
            debug!("feed"; "{}", path.display());
            FeedPage::from_path(&path, config)
        })
        .collect();

    pages.sort_by(|a, b| a.rel.cmp(&b.rel));
    pages
}

/// Channel title: configured value or the root directory name.
pub fn channel_title(config: &TreeConfig) -> String {
    config.feed.title.clone().unwrap_or_else(|| {
        config
            .get_root()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    })
}

/// Title for a page: file stem, dashes as spaces, title-cased.
///
/// `my-first-post.html` becomes `My First Post`.
pub fn page_title(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    title_case(&stem.replace('-', " "))
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use std::fs;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("HELLO wORLD"), "Hello World");
        assert_eq!(title_case("it's 2nd"), "It'S 2Nd");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title(Path::new("docs/my-first-post.html")), "My First Post");
        assert_eq!(page_title(Path::new("index.html")), "Index");
    }

    #[test]
    fn test_collect_pages() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs/sub dir")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("index.html"), "").unwrap();
        fs::write(root.join("docs/sub dir/release-notes.html"), "").unwrap();
        fs::write(root.join("docs/notes.txt"), "").unwrap();
        fs::write(root.join(".hidden/secret.html"), "").unwrap();
        fs::write(root.join(".draft.html"), "").unwrap();

        let mut config = test_config_at(root);
        config.feed.base_url = Some("https://example.com/".into());
        let pages = collect_pages(&config);

        let rels: Vec<_> = pages.iter().map(|p| p.rel.as_str()).collect();
        assert_eq!(rels, vec!["docs/sub%20dir/release-notes.html", "index.html"]);
        assert_eq!(pages[0].title, "Release Notes");
        assert_eq!(
            pages[0].link,
            "https://example.com/docs/sub%20dir/release-notes.html"
        );
        assert!(pages.iter().all(|p| p.updated.is_some()));
    }

    #[test]
    fn test_channel_title() {
        let mut config = test_config_at(Path::new("/srv/public"));
        assert_eq!(channel_title(&config), "public");
        config.feed.title = Some("Files".into());
        assert_eq!(channel_title(&config), "Files");
    }
}

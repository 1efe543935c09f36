//! Atom 1.0 feed rendering.

use super::common::{FeedPage, channel_title};
use crate::{config::TreeConfig, utils::date::DateTimeUtc};
use atom_syndication::{
    Entry, EntryBuilder, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder, Text,
};

/// Render the Atom feed for `pages`.
pub fn render_atom(config: &TreeConfig, pages: &[FeedPage]) -> String {
    let base_url = config.feed.base_url();

    // Feed-level updated is the newest page
    let updated = pages
        .iter()
        .filter_map(|p| p.updated)
        .map(DateTimeUtc::to_rfc3339)
        .max()
        .map_or_else(FixedDateTime::default, |s| parse_datetime(&s));

    let self_link: Link = LinkBuilder::default()
        .href(format!("{base_url}/{}", self_href(config)))
        .rel("self".to_string())
        .mime_type(Some("application/atom+xml".to_string()))
        .build();

    let alternate_link: Link = LinkBuilder::default()
        .href(base_url.to_string())
        .rel("alternate".to_string())
        .build();

    FeedBuilder::default()
        .title(Text::plain(channel_title(config)))
        .id(base_url)
        .updated(updated)
        .links(vec![self_link, alternate_link])
        .subtitle(Some(Text::plain(config.feed.description.clone())))
        .generator(Some(GeneratorBuilder::default().value("dirlist").build()))
        .entries(pages.iter().map(page_to_atom_entry).collect::<Vec<_>>())
        .build()
        .to_string()
}

fn page_to_atom_entry(page: &FeedPage) -> Entry {
    let updated = page
        .updated
        .map_or_else(FixedDateTime::default, |dt| parse_datetime(&dt.to_rfc3339()));

    let link: Link = LinkBuilder::default()
        .href(&page.link)
        .rel("alternate".to_string())
        .build();

    EntryBuilder::default()
        .title(Text::plain(page.title.clone()))
        .id(&page.link)
        .updated(updated)
        .links(vec![link])
        .build()
}

fn parse_datetime(s: &str) -> FixedDateTime {
    s.parse().unwrap_or_default()
}

/// Feed file path relative to the root, URL-encoded.
fn self_href(config: &TreeConfig) -> String {
    crate::utils::path::relative_url(&config.root_relative(&config.feed.output))
}

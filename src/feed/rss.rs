//! RSS 2.0 feed rendering.

use super::common::{FeedPage, channel_title};
use crate::{config::TreeConfig, utils::date::DateTimeUtc};
use anyhow::{Result, anyhow};
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};

/// Render and validate the RSS channel for `pages`.
pub fn render_rss(config: &TreeConfig, pages: &[FeedPage]) -> Result<String> {
    let items: Vec<_> = pages.iter().map(page_to_rss_item).collect();

    let channel = ChannelBuilder::default()
        .title(channel_title(config))
        .link(config.feed.base_url())
        .description(config.feed.description.clone())
        .generator("dirlist".to_string())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn page_to_rss_item(page: &FeedPage) -> rss::Item {
    ItemBuilder::default()
        .title(page.title.clone())
        .link(Some(page.link.clone()))
        .guid(
            GuidBuilder::default()
                .permalink(true)
                .value(page.link.clone())
                .build(),
        )
        .pub_date(page.updated.map(DateTimeUtc::to_rfc2822))
        .build()
}

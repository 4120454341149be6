use feed_rs::model::{Entry, Link, Text};
use feed_rs::parser;

use super::types::{Feed, FeedItem, MediaDescription};

pub use feed_rs::parser::ParseFeedError;

pub fn parse_feed(bytes: &[u8]) -> Result<Feed, ParseFeedError> {
    let feed = parser::parse(bytes)?;

    let items: Vec<FeedItem> = feed.entries.into_iter().map(parse_entry).collect();

    Ok(Feed {
        title: feed.title.map(|t| t.content),
        link: pick_link(&feed.links, "alternate", 0),
        feed_url: pick_link(&feed.links, "self", 1),
        items,
    })
}

fn parse_entry(entry: Entry) -> FeedItem {
    let link = pick_link(&entry.links, "alternate", 0);
    let description = entry
        .media
        .into_iter()
        .find_map(|m| m.description)
        .map(media_description)
        .unwrap_or_default();

    FeedItem {
        title: entry.title.map(|t| t.content),
        link,
        published: entry.published,
        updated: entry.updated,
        description,
    }
}

fn media_description(text: Text) -> MediaDescription {
    let content_type = text.content_type.essence().to_string();
    if content_type == "text/plain" {
        MediaDescription::Plain(text.content)
    } else {
        MediaDescription::Typed {
            content_type,
            text: text.content,
        }
    }
}

/// Picks the link with relation `rel`, else the link at `fallback`.
///
/// Atom links without a `rel` attribute count as `alternate`.
fn pick_link(links: &[Link], rel: &str, fallback: usize) -> Option<String> {
    links
        .iter()
        .find(|l| l.rel.as_deref().unwrap_or("alternate") == rel)
        .or_else(|| links.get(fallback))
        .map(|l| l.href.clone())
}

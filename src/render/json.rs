use chrono::SecondsFormat;
use serde::Serialize;
use std::io::Write;

use crate::feed::{Feed, FeedItem};

/// JSON envelope for a whole feed. Every field is a string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFeed<'a> {
    title: &'a str,
    link: &'a str,
    feed_url: &'a str,
    items: Vec<JsonItem<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonItem<'a> {
    title: &'a str,
    link: &'a str,
    pub_date: String,
    description: &'a str,
}

impl<'a> From<&'a Feed> for JsonFeed<'a> {
    fn from(feed: &'a Feed) -> Self {
        Self {
            title: feed.title.as_deref().unwrap_or_default(),
            link: feed.link.as_deref().unwrap_or_default(),
            feed_url: feed.feed_url.as_deref().unwrap_or_default(),
            items: feed.items.iter().map(JsonItem::from).collect(),
        }
    }
}

impl<'a> From<&'a FeedItem> for JsonItem<'a> {
    fn from(item: &'a FeedItem) -> Self {
        Self {
            title: item.title.as_deref().unwrap_or_default(),
            link: item.link.as_deref().unwrap_or_default(),
            pub_date: item
                .timestamp()
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_default(),
            description: item.description.text(),
        }
    }
}

/// Writes the feed as one pretty-printed JSON object (two-space indent).
///
/// No trailing newline is written after the closing brace.
pub fn render_json<W: Write>(feed: &Feed, out: &mut W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(out, &JsonFeed::from(feed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::MediaDescription;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn render(feed: &Feed) -> String {
        let mut out = Vec::new();
        render_json(feed, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_feed() -> Feed {
        Feed {
            title: Some("Channel".into()),
            link: Some("https://www.youtube.com/channel/UC2D2CMWXMOVWx7giW1n3LIg".into()),
            feed_url: Some(
                "https://www.youtube.com/feeds/videos.xml?channel_id=UC2D2CMWXMOVWx7giW1n3LIg"
                    .into(),
            ),
            items: vec![
                FeedItem {
                    title: Some("Video".into()),
                    link: Some("https://www.youtube.com/watch?v=aaaaaaaaaaa".into()),
                    published: Some(Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap()),
                    updated: None,
                    description: MediaDescription::Plain("00:00 Intro".into()),
                },
                FeedItem::default(),
            ],
        }
    }

    #[test]
    fn test_exact_layout() {
        let feed = Feed {
            title: Some("T".into()),
            link: None,
            feed_url: None,
            items: vec![],
        };
        let expected = "{\n  \"title\": \"T\",\n  \"link\": \"\",\n  \"feedUrl\": \"\",\n  \"items\": []\n}";
        assert_eq!(render(&feed), expected);
    }

    #[test]
    fn test_empty_feed_keeps_envelope() {
        let json: Value = serde_json::from_str(&render(&Feed::default())).unwrap();
        assert_eq!(json["title"], "");
        assert_eq!(json["link"], "");
        assert_eq!(json["feedUrl"], "");
        assert_eq!(json["items"], Value::Array(vec![]));
    }

    #[test]
    fn test_item_fields() {
        let json: Value = serde_json::from_str(&render(&sample_feed())).unwrap();
        let item = &json["items"][0];
        assert_eq!(item["title"], "Video");
        assert_eq!(item["link"], "https://www.youtube.com/watch?v=aaaaaaaaaaa");
        assert_eq!(item["pubDate"], "2024-03-05T00:00:00Z");
        assert_eq!(item["description"], "00:00 Intro");
    }

    #[test]
    fn test_item_fields_are_always_strings() {
        let json: Value = serde_json::from_str(&render(&sample_feed())).unwrap();
        for item in json["items"].as_array().unwrap() {
            for key in ["title", "link", "pubDate", "description"] {
                assert!(item[key].is_string(), "{} should be a string in {}", key, item);
            }
        }
        assert_eq!(json["items"][1]["pubDate"], "");
        assert_eq!(json["items"][1]["description"], "");
    }

    #[test]
    fn test_typed_description_text() {
        let feed = Feed {
            items: vec![FeedItem {
                description: MediaDescription::Typed {
                    content_type: "text/html".into(),
                    text: "<b>chapters</b>".into(),
                },
                ..Default::default()
            }],
            ..Default::default()
        };
        let json: Value = serde_json::from_str(&render(&feed)).unwrap();
        assert_eq!(json["items"][0]["description"], "<b>chapters</b>");
    }

    #[test]
    fn test_no_trailing_newline() {
        let out = render(&sample_feed());
        assert!(out.ends_with('}'));
    }
}

use chrono::{DateTime, Utc};

// ============================================================================
// Feed Model
// ============================================================================

/// A parsed channel feed.
///
/// Items keep the order the upstream service returned them in
/// (newest first by convention); nothing here re-sorts them.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    /// Channel title
    pub title: Option<String>,
    /// Channel page (the `alternate` link)
    pub link: Option<String>,
    /// Feed retrieval URL (the `self` link)
    pub feed_url: Option<String>,
    pub items: Vec<FeedItem>,
}

/// A single video entry in the feed.
#[derive(Debug, Clone, Default)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
    /// Used when `published` is missing
    pub updated: Option<DateTime<Utc>>,
    pub description: MediaDescription,
}

impl FeedItem {
    /// Publish timestamp, falling back to the last-updated timestamp.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.published.or(self.updated)
    }
}

// ============================================================================
// Media Description
// ============================================================================

/// Description text carried in the item's `media:group` extension.
///
/// YouTube puts the video description (often a chapter list) there rather
/// than in the Atom `summary`. The value arrives either as bare text or
/// wrapped with a declared media type; both are resolved once at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MediaDescription {
    #[default]
    Absent,
    /// Bare `text/plain` content
    Plain(String),
    /// Content declared with another media type (e.g. `text/html`)
    Typed { content_type: String, text: String },
}

impl MediaDescription {
    /// The description text, or `""` when absent.
    pub fn text(&self) -> &str {
        match self {
            MediaDescription::Absent => "",
            MediaDescription::Plain(text) => text,
            MediaDescription::Typed { text, .. } => text,
        }
    }
}

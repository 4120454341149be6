//! Channel feed retrieval and parsing.
//!
//! - [`parser`] - Atom/RSS bytes to [`Feed`] using the `feed-rs` crate
//! - [`fetcher`] - Feed URL construction and the single HTTP GET
//! - [`types`] - The [`Feed`] / [`FeedItem`] model
//!
//! # Example
//!
//! ```ignore
//! use ytfeed::feed::{feed_url, fetch_feed};
//!
//! let url = feed_url("UC2D2CMWXMOVWx7giW1n3LIg")?;
//! let feed = fetch_feed(&reqwest::Client::new(), &url).await?;
//! ```

mod fetcher;
mod parser;
mod types;

pub use fetcher::{feed_url, feed_url_from, fetch_feed, FetchError, FEED_ENDPOINT};
pub use parser::{parse_feed, ParseFeedError};
pub use types::{Feed, FeedItem, MediaDescription};

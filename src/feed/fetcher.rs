use futures::StreamExt;
use thiserror::Error;
use url::Url;

use super::parser::parse_feed;
use super::types::Feed;

/// Per-channel Atom feed endpoint.
pub const FEED_ENDPOINT: &str = "https://www.youtube.com/feeds/videos.xml";

const MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur while fetching and parsing a channel feed.
///
/// None of these are retried: the first failure is returned to the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Feed URL could not be built
    #[error("Invalid feed URL: {0}")]
    Url(#[from] url::ParseError),
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Feed XML could not be parsed as Atom or RSS
    #[error("Parse error: {0}")]
    Parse(String),
    /// Response body exceeded the 10MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Response was incomplete (received fewer bytes than Content-Length)
    #[error("Incomplete response: expected {expected} bytes, received {received}")]
    IncompleteResponse { expected: u64, received: usize },
}

/// Builds the feed URL for a channel identifier.
///
/// # Examples
///
/// ```
/// use ytfeed::feed::feed_url;
///
/// let url = feed_url("UC2D2CMWXMOVWx7giW1n3LIg").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://www.youtube.com/feeds/videos.xml?channel_id=UC2D2CMWXMOVWx7giW1n3LIg"
/// );
/// ```
pub fn feed_url(channel_id: &str) -> Result<Url, FetchError> {
    feed_url_from(FEED_ENDPOINT, channel_id)
}

/// Builds a feed URL against an arbitrary endpoint.
pub fn feed_url_from(endpoint: &str, channel_id: &str) -> Result<Url, FetchError> {
    Ok(Url::parse_with_params(endpoint, &[("channel_id", channel_id)])?)
}

/// Fetches and parses a feed with a single GET request.
///
/// No retries and no request timeout beyond the client's own defaults.
///
/// # Errors
///
/// - [`FetchError::Network`] - Connection or TLS errors
/// - [`FetchError::HttpStatus`] - Non-2xx HTTP response
/// - [`FetchError::ResponseTooLarge`] - Response exceeded 10MB
/// - [`FetchError::IncompleteResponse`] - Body shorter than Content-Length
/// - [`FetchError::Parse`] - Invalid Atom/RSS XML
pub async fn fetch_feed(client: &reqwest::Client, url: &Url) -> Result<Feed, FetchError> {
    tracing::debug!(url = %url, "Fetching feed");

    let response = client.get(url.as_str()).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    let bytes = read_limited_bytes(response, MAX_FEED_SIZE).await?;
    let feed = parse_feed(&bytes).map_err(|e| FetchError::Parse(e.to_string()))?;

    tracing::debug!(
        url = %url,
        bytes = bytes.len(),
        items = feed.items.len(),
        "Feed parsed"
    );
    Ok(feed)
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    let expected_length = response.content_length();

    // Fast path: check Content-Length header
    if let Some(len) = expected_length {
        if len > limit as u64 {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    if let Some(expected) = expected_length {
        if (bytes.len() as u64) < expected {
            return Err(FetchError::IncompleteResponse {
                expected,
                received: bytes.len(),
            });
        }
    }

    Ok(bytes)
}

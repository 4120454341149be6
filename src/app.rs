//! The resolve → fetch → render pipeline.
//!
//! Every step returns a `Result`; only `main` turns an [`AppError`] into a
//! process exit code.
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

use crate::channel::{resolve_channel, ResolveError};
use crate::feed::{feed_url_from, fetch_feed, FetchError, FEED_ENDPOINT};
use crate::render::{render, OutputMode, RenderError};

/// Terminal errors. Each maps to exit code 1.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("Failed to fetch feed: {0}")]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Output(#[from] RenderError),
}

/// Inputs for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Channel ID or handle, untrimmed
    pub reference: String,
    pub mode: OutputMode,
    /// Location of the handle directory file
    pub channels_file: PathBuf,
    /// Feed endpoint; `channel_id` is appended as a query parameter
    pub endpoint: String,
}

impl RunOptions {
    pub fn new(reference: impl Into<String>, mode: OutputMode, channels_file: PathBuf) -> Self {
        Self {
            reference: reference.into(),
            mode,
            channels_file,
            endpoint: FEED_ENDPOINT.to_string(),
        }
    }
}

/// Runs one resolve → fetch → render pass, writing the result to `out`.
///
/// Nothing is written to `out` unless the fetch succeeded.
pub async fn run<W: Write>(
    client: &reqwest::Client,
    options: &RunOptions,
    out: &mut W,
) -> Result<(), AppError> {
    let channel_id = resolve_channel(&options.reference, &options.channels_file)?;
    let url = feed_url_from(&options.endpoint, &channel_id)?;
    let feed = fetch_feed(client, &url).await?;

    tracing::info!(
        channel_id = %channel_id,
        items = feed.items.len(),
        mode = ?options.mode,
        "Rendering feed"
    );
    render(&feed, options.mode, out)?;
    Ok(())
}

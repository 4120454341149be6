//! Output renderers for a fetched [`Feed`].
//!
//! Both renderers borrow the feed and write to any [`std::io::Write`]:
//!
//! - [`list`] - `title<TAB>MM / DD` lines (default)
//! - [`json`] - one pretty-printed JSON document (`--json`)

mod json;
mod list;

pub use json::render_json;
pub use list::{format_month_day, render_list};

use crate::feed::Feed;
use std::io::Write;
use thiserror::Error;

/// Errors writing rendered output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize feed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Selected output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    List,
    Json,
}

/// Renders `feed` in the given mode and flushes `out`.
pub fn render<W: Write>(feed: &Feed, mode: OutputMode, out: &mut W) -> Result<(), RenderError> {
    match mode {
        OutputMode::List => render_list(feed, out)?,
        OutputMode::Json => render_json(feed, out)?,
    }
    out.flush()?;
    Ok(())
}

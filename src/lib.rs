//! Print a YouTube channel's recent uploads from its public Atom feed.
//!
//! ```text
//! ytfeed UC2D2CMWXMOVWx7giW1n3LIg          # title<TAB>MM / DD per video
//! ytfeed @hubermanlab --json              # full feed as JSON
//! ```
//!
//! Handles are looked up in `channels.json` in the working directory:
//!
//! ```json
//! { "channels": { "@hubermanlab": "UC2D2CMWXMOVWx7giW1n3LIg" } }
//! ```

pub mod app;
pub mod channel;
pub mod feed;
pub mod render;
pub mod util;

pub use app::{run, AppError, RunOptions};

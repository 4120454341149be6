use chrono::{DateTime, Utc};
use std::io::Write;

use crate::feed::Feed;
use crate::util::sanitize_field;

/// Writes one `title<TAB>MM / DD` line per item, in feed order.
///
/// Items without any timestamp get an empty date field. An empty feed
/// writes nothing.
pub fn render_list<W: Write>(feed: &Feed, out: &mut W) -> std::io::Result<()> {
    for item in &feed.items {
        let title = item.title.as_deref().unwrap_or_default();
        let date = item.timestamp().map(format_month_day).unwrap_or_default();
        writeln!(out, "{}\t{}", sanitize_field(title), date)?;
    }
    Ok(())
}

/// Formats a timestamp as zero-padded UTC `MM / DD`.
pub fn format_month_day(ts: DateTime<Utc>) -> String {
    ts.format("%m / %d").to_string()
}

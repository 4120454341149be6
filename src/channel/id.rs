/// Length of a channel identifier: `UC` followed by 22 body characters.
const CHANNEL_ID_LEN: usize = 24;
const CHANNEL_ID_PREFIX: &str = "UC";

/// Returns true if `s` has the shape of a literal channel identifier.
///
/// A channel identifier is exactly 24 characters: `UC` followed by 22
/// characters drawn from `[A-Za-z0-9_-]`. Anything else is treated as a
/// handle and resolved through the channel directory.
///
/// # Examples
///
/// ```
/// use ytfeed::channel::is_channel_id;
///
/// assert!(is_channel_id("UC2D2CMWXMOVWx7giW1n3LIg"));
/// assert!(!is_channel_id("@hubermanlab"));
/// assert!(!is_channel_id("UC2D2CMWXMOVWx7giW1n3LI")); // 23 chars
/// ```
pub fn is_channel_id(s: &str) -> bool {
    s.len() == CHANNEL_ID_LEN
        && s.starts_with(CHANNEL_ID_PREFIX)
        && s.bytes()
            .skip(CHANNEL_ID_PREFIX.len())
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Normalizes a handle to carry exactly one leading `@`.
///
/// An `@` is prepended only when missing; an existing prefix is kept as-is.
pub fn normalize_handle(s: &str) -> String {
    if s.starts_with('@') {
        s.to_string()
    } else {
        format!("@{}", s)
    }
}

use std::borrow::Cow;

/// Makes feed text safe to print as one field of a tab-separated line.
///
/// Feed titles are remote input headed for a terminal, so:
/// - ANSI CSI sequences (`ESC [` ... final byte 0x40-0x7E) are removed
/// - ANSI OSC sequences (`ESC ]` ... BEL or `ESC \`) are removed
/// - a bare ESC, DEL, and other C0 controls are removed
/// - tab, CR and LF become a single space each, so the field can
///   neither split a line nor shift the column layout
///
/// Returns `Cow::Borrowed` when nothing needs changing.
///
/// # Examples
///
/// ```
/// use ytfeed::util::sanitize_field;
///
/// assert_eq!(sanitize_field("\x1b[31mRed\x1b[0m\ttitle"), "Red title");
/// assert_eq!(sanitize_field("plain"), "plain");
/// ```
pub fn sanitize_field(s: &str) -> Cow<'_, str> {
    if !s.chars().any(is_control) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\x1b' => match chars.peek() {
                Some('[') => {
                    chars.next();
                    // Parameter and intermediate bytes, then one final byte
                    for c in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&c) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(c) = chars.next() {
                        if c == '\x07' {
                            break;
                        }
                        if c == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            },
            '\t' | '\r' | '\n' => out.push(' '),
            c if is_control(c) => {}
            c => out.push(c),
        }
    }

    Cow::Owned(out)
}

fn is_control(c: char) -> bool {
    c < '\x20' || c == '\x7f'
}

//! Extraction of the `body={...}` payload from SDK network log lines
//!
//! The SDK logs requests as free text ending in `body={<json>} bodySize=<n>`.
//! The payload itself contains braces, so the closing brace is identified by
//! what follows it: a single whitespace character and then `bodySize=`.

use tracing::debug;

use crate::models::LogEntry;

const BODY_OPEN: &str = "body={";
const BODY_SIZE: &str = "bodySize=";

/// Whether a `}` at byte offset `close` is followed by one whitespace
/// character and the `bodySize=` marker
fn closes_body(text: &str, close: usize) -> bool {
    let mut rest = text[close + 1..].chars();
    match rest.next() {
        Some(ch) if ch.is_whitespace() => rest.as_str().starts_with(BODY_SIZE),
        _ => false,
    }
}

/// Extract the content between `body={` and the nearest `}` that is followed
/// by whitespace and `bodySize=`
///
/// Scanning starts at the first `body={` in `text`. The shortest content that
/// satisfies the trailing condition wins, so inner braces are allowed.
///
/// # Examples
///
/// ```
/// use logcat_body_pretty::extract_body;
///
/// let line = r#"POST /events body={"events":[{"id":1}]} bodySize=20"#;
/// assert_eq!(extract_body(line), Some(r#""events":[{"id":1}]"#));
/// assert_eq!(extract_body("no payload here"), None);
/// ```
pub fn extract_body(text: &str) -> Option<&str> {
    let open = text.find(BODY_OPEN)?;
    let start = open + BODY_OPEN.len();

    let close = text[start..]
        .match_indices('}')
        .map(|(offset, _)| start + offset)
        .find(|&close| closes_body(text, close))?;

    Some(&text[start..close])
}

/// Apply [`extract_body`] to every entry independently, keeping hits in order
pub fn extract_all_bodies(entries: &[LogEntry]) -> Vec<String> {
    let bodies: Vec<String> =
        entries.iter().filter_map(|entry| extract_body(entry.as_str())).map(str::to_string).collect();

    debug!(entries = entries.len(), bodies = bodies.len(), "extracted bodies");
    bodies
}

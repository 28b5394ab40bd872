use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::models::LogEntry;

fn timestamp_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})\s+([0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3})")
            .expect("timestamp pattern is valid")
    })
}

/// Parse the `YYYY-MM-DD HH:mm:ss.SSS` timestamp at the start of a log line
///
/// Returns `None` when the line does not start with a timestamp or when the
/// digits do not form a real date and time (e.g. month 13).
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let caps = timestamp_regex().captures(text)?;
    let normalized = format!("{}T{}", &caps[1], &caps[2]);
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.3f").ok()
}

/// Sort entries by leading timestamp, oldest first
///
/// Entries without a usable timestamp sort as if logged at the Unix epoch.
/// The sort is stable, so entries with equal or missing timestamps keep
/// their relative order.
pub fn sort_chronologically(mut entries: Vec<LogEntry>) -> Vec<LogEntry> {
    let epoch = DateTime::<Utc>::UNIX_EPOCH.naive_utc();
    entries.sort_by_cached_key(|entry| parse_timestamp(entry.as_str()).unwrap_or(epoch));
    entries
}

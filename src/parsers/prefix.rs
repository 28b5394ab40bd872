//! Android logcat prefix removal
//!
//! Logcat prepends six whitespace-separated fields to every line:
//!
//! ```text
//! 2022-12-29 04:00:18.823 30249-30321 ProfileInstaller com.google.samples.apps.sunflower D <message>
//! ```
//!
//! See <https://developer.android.com/studio/debug/logcat>.

use std::sync::OnceLock;

use regex::Regex;

// Separators never span a line break, so a prefix can only be removed from
// the line it starts on.
const PREFIX_PATTERN: &str = concat!(
    r"(?m)^",
    r"[0-9]{4}-[0-9]{2}-[0-9]{2}",          // date, e.g. 2022-12-29
    r"[\s&&[^\r\n]]+",
    r"[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}", // time, e.g. 04:00:18.823
    r"[\s&&[^\r\n]]+",
    r"[0-9]+-[0-9]+", // pid-tid, e.g. 30249-30321
    r"[\s&&[^\r\n]]+",
    r"\S+", // tag
    r"[\s&&[^\r\n]]+",
    r"\S+", // package
    r"[\s&&[^\r\n]]+",
    r"[VDIWE]", // priority
    r"[\s&&[^\r\n]]+",
);

fn prefix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(PREFIX_PATTERN).expect("logcat prefix pattern is valid"))
}

/// Remove the logcat prefix from the start of every line in `input`
///
/// Works the same on a single fragment and on a whole multi-line document:
/// matching is anchored to line starts and at most one prefix is removed per
/// line. Input without a prefix is returned unchanged.
///
/// # Examples
///
/// ```
/// use logcat_body_pretty::strip_prefix;
///
/// let line = "2022-12-29 04:00:18.823 30249-30321 ProfileInstaller com.example D hello";
/// assert_eq!(strip_prefix(line), "hello");
/// assert_eq!(strip_prefix("hello"), "hello");
/// ```
pub fn strip_prefix(input: &str) -> String {
    prefix_regex().replace_all(input, "").into_owned()
}

/// Whether `line` starts with a logcat prefix
pub fn has_prefix(line: &str) -> bool {
    prefix_regex().find(line).is_some_and(|m| m.start() == 0)
}

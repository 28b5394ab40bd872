//! Sanitizing log text before it is echoed to a terminal
//!
//! Logcat dumps captured with `-v color` carry ANSI escape sequences, and SDK
//! payloads can contain arbitrary control characters. Both are removed from
//! log lines printed by the inspection commands. Formatted JSON never needs
//! this: serde_json escapes control characters itself.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn control_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        // CSI sequences (ESC [ params letter), then any other control char
        // except tab, newline and carriage return
        Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]|[\p{Cc}&&[^\t\n\r]]")
            .expect("control character pattern is valid")
    })
}

/// Remove ANSI escape sequences and stray control characters
///
/// # Examples
///
/// ```
/// use logcat_body_pretty::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mE\x1b[0m crash"), "E crash");
/// ```
pub fn sanitize_for_terminal(text: &str) -> Cow<'_, str> {
    control_regex().replace_all(text, "")
}

//! Pretty-printing of extracted event payloads
//!
//! A payload ("event chunk") is a JSON object whose `events` array holds
//! event objects. Each event's `body` is itself JSON encoded as a string, so
//! it is parsed a second time and spliced back in before printing.

use std::borrow::Cow;

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use tracing::debug;

use crate::models::{Diagnostic, PayloadError};
use crate::parsers::unescape;

const INDENT: &[u8] = b"    ";

/// A formatted payload plus the non-fatal problems met while formatting it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a payload, expand nested event bodies and print it with 4-space
/// indentation
///
/// With `unescape_first` the payload goes through [`unescape`] before
/// parsing. Object keys keep the order they had in the input.
///
/// # Errors
///
/// Returns [`PayloadError::MalformedPayload`] if the payload is not valid
/// JSON. A nested event body that fails to parse is not an error: it stays a
/// string and is reported as [`Diagnostic::EventBodyParseFailure`].
///
/// # Examples
///
/// ```
/// use logcat_body_pretty::format_payload;
///
/// let formatted = format_payload(r#"{"events":[{"body":"{\"k\":1}"}]}"#, false)?;
/// assert!(formatted.text.contains(r#""k": 1"#));
/// assert!(formatted.diagnostics.is_empty());
/// # Ok::<(), logcat_body_pretty::models::PayloadError>(())
/// ```
pub fn format_payload(body: &str, unescape_first: bool) -> Result<Formatted, PayloadError> {
    let source: Cow<'_, str> =
        if unescape_first { Cow::Owned(unescape(body)) } else { Cow::Borrowed(body) };

    let mut chunk = parse_chunk(&source)?;
    let diagnostics = expand_event_bodies(&mut chunk);
    let text = to_indented_json(&chunk)?;

    Ok(Formatted { text, diagnostics })
}

/// Parse the payload as JSON, falling back to treating it as the members of
/// an object whose braces were consumed by `body={...}` extraction
fn parse_chunk(text: &str) -> Result<Value, serde_json::Error> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(value),
        Err(err) => serde_json::from_str::<Value>(&format!("{{{}}}", text)).map_err(|_| err),
    }
}

/// Replace every string `events[i].body` with its parsed JSON value
fn expand_event_bodies(chunk: &mut Value) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let Some(Value::Array(events)) = chunk.get_mut("events") else {
        return diagnostics;
    };

    for (index, event) in events.iter_mut().enumerate() {
        let Some(body) = event.get_mut("body") else {
            continue;
        };
        let Value::String(raw) = &*body else {
            continue;
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => *body = parsed,
            Err(e) => {
                debug!(index, error = %e, "event body left as string");
                diagnostics.push(Diagnostic::EventBodyParseFailure { index, message: e.to_string() });
            }
        }
    }

    diagnostics
}

fn to_indented_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

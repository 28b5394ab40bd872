//! End-to-end processing of a raw logcat dump
//!
//! # Error Handling Strategy
//!
//! - **Non-fatal problems** (incomplete paginated logs, event bodies that are not JSON) are
//!   pushed onto a caller-supplied `Vec<Diagnostic>` in the order they occur, and processing
//!   continues.
//!
//! - **Fatal problems** are returned as [`PayloadError`]: a missing body aborts the whole
//!   operation, while a malformed body only aborts that body. In [`format_all_bodies`] the
//!   remaining bodies are still formatted.

pub mod config;
pub mod sort;

use std::borrow::Cow;

use tracing::debug;

pub use config::{PayloadMode, PipelineConfig, PrefixMode};
pub use sort::{parse_timestamp, sort_chronologically};

use crate::formatter::format_payload;
use crate::models::{Diagnostic, LogEntry, PayloadError};
use crate::parsers::{Reassembled, extract_all_bodies, extract_body, reassemble_fragments, strip_prefix};

/// Reassemble paginated lines and sort the resulting entries by timestamp
pub fn prepare_entries(input: &str, config: &PipelineConfig) -> Reassembled {
    let input: Cow<'_, str> = match config.prefix_mode {
        PrefixMode::Document => Cow::Owned(strip_prefix(input)),
        PrefixMode::None | PrefixMode::Fragment => Cow::Borrowed(input),
    };

    let Reassembled { entries, diagnostics } =
        reassemble_fragments(&input, &config.reassembly_options());

    Reassembled { entries: sort_chronologically(entries), diagnostics }
}

/// Format the first body found in the sorted, reassembled text
///
/// The sorted entries are joined with newlines and scanned once, so a body
/// is taken from the earliest entry that carries one.
///
/// # Errors
///
/// - [`PayloadError::NoBodyFound`] if no entry contains a body
/// - [`PayloadError::MalformedPayload`] if the body is not valid JSON
pub fn format_first_body(
    input: &str,
    config: &PipelineConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<String, PayloadError> {
    let prepared = prepare_entries(input, config);
    diagnostics.extend(prepared.diagnostics);

    let joined = join_entries(&prepared.entries);
    let body = extract_body(&joined).ok_or(PayloadError::NoBodyFound)?;
    debug!(len = body.len(), "found body");

    let formatted = format_payload(body, config.unescape_first())?;
    diagnostics.extend(formatted.diagnostics);
    Ok(formatted.text)
}

/// Format every body found, one document per entry that carries a body
///
/// Returns one result per body in chronological order. A malformed body
/// yields an `Err` in its slot without affecting the others.
///
/// # Errors
///
/// Returns [`PayloadError::NoBodyFound`] if no entry contains a body.
pub fn format_all_bodies(
    input: &str,
    config: &PipelineConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<Result<String, PayloadError>>, PayloadError> {
    let prepared = prepare_entries(input, config);
    diagnostics.extend(prepared.diagnostics);

    let bodies = extract_all_bodies(&prepared.entries);
    if bodies.is_empty() {
        return Err(PayloadError::NoBodyFound);
    }

    let documents = bodies
        .iter()
        .map(|body| -> Result<String, PayloadError> {
            let formatted = format_payload(body, config.unescape_first())?;
            diagnostics.extend(formatted.diagnostics);
            Ok(formatted.text)
        })
        .collect();

    Ok(documents)
}

/// Join entries back into one newline-separated text
pub fn join_entries(entries: &[LogEntry]) -> String {
    entries.iter().map(LogEntry::as_str).collect::<Vec<_>>().join("\n")
}

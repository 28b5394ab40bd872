//! Logcat Body Pretty - Reassemble paginated logcat dumps and pretty-print SDK event bodies
//!
//! Mobile SDK network logs arrive in logcat split across several physical lines, mixed with
//! unrelated output, and carry their JSON payload escaped inside free text. This library:
//!
//! - Strips the six-field logcat prefix from lines or fragments
//! - Reassembles `log{page=P/T, id=ID}` fragments into complete log lines
//! - Sorts logical lines by their leading timestamp
//! - Extracts `body={...} bodySize=` payloads and pretty-prints them as JSON, expanding the
//!   JSON-encoded `events[].body` strings
//!
//! # Example
//!
//! ```
//! use logcat_body_pretty::pipeline::{format_first_body, PipelineConfig};
//!
//! let dump = "\
//! 2024-01-01 00:00:01.000 1-2 Net com.example D log{page=1/2, id=7} POST body={{\"events\":[{\"body\":\"{\\\"k\\\"
//! 2024-01-01 00:00:01.001 1-2 Net com.example D log{page=2/2, id=7} :1}\"}]}} bodySize=30";
//!
//! let mut diagnostics = Vec::new();
//! let json = format_first_body(dump, &PipelineConfig::default(), &mut diagnostics)?;
//! assert!(json.contains("\"k\": 1"));
//! assert!(diagnostics.is_empty());
//! # Ok::<(), logcat_body_pretty::models::PayloadError>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod formatter;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types
pub use clipboard::copy_to_clipboard;
pub use formatter::{Formatted, format_payload};
pub use models::{Diagnostic, LogEntry, PayloadError};
pub use parsers::{extract_all_bodies, extract_body, reassemble_fragments, strip_prefix, unescape};
pub use pipeline::{PipelineConfig, sort_chronologically};

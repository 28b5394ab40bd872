//! Data models for reassembled logcat output.
//!
//! - [`LogEntry`] - One logical log line after fragment reassembly
//! - [`PaginationMarker`] - Parsed `log{page=P/T, id=ID}` tag
//! - [`FragmentGroup`] - Pages collected for one paginated log id
//! - [`Diagnostic`] - Non-fatal conditions collected along the pipeline
//! - [`PayloadError`] - Fatal conditions when formatting a body

pub mod diagnostic;
pub mod log;

pub use diagnostic::{Diagnostic, PayloadError};
pub use log::{FragmentGroup, LogEntry, PaginationMarker};

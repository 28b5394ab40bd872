//! Text parsers for raw logcat dumps
//!
//! # Error Handling Strategy
//!
//! Every parser here is total: it accepts any text and never fails.
//!
//! - **Unrecognized input**: Lines without a pagination marker, fragments without a logcat
//!   prefix and entries without a body pass through untouched (or yield `None`).
//!
//! - **Recoverable problems**: Paginated logs with missing pages are dropped and recorded as
//!   [`Diagnostic`](crate::models::Diagnostic) values returned next to the result, rather than
//!   printed. The caller decides how to surface them.
//!
//! - **Tracing**: Parsers emit `debug` events with counts so a run can be inspected with
//!   `RUST_LOG=debug` without changing user-facing output.

pub mod body;
pub mod pagination;
pub mod prefix;
pub mod unescape;

pub use body::{extract_all_bodies, extract_body};
pub use pagination::{Reassembled, ReassemblyOptions, parse_marker, reassemble_fragments};
pub use prefix::{has_prefix, strip_prefix};
pub use unescape::unescape;

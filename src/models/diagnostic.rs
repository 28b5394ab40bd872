use thiserror::Error;

/// Non-fatal condition observed while processing a log blob.
///
/// Diagnostics are collected and handed back next to the primary result so
/// the caller decides how to surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A paginated log was missing pages and has been dropped
    #[error("Incomplete paginated log ignored (log ID: {id}).")]
    IncompletePaginationGroup { id: u64, received: usize, total: u32 },

    /// One event's nested `body` string was not valid JSON and was left as-is
    #[error("Failed to parse event body.\n{message}")]
    EventBodyParseFailure { index: usize, message: String },
}

/// Fatal condition for a formatting operation
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Unable to format: No body content found.")]
    NoBodyFound,

    #[error("Unable to format: Invalid JSON detected.\n{0}")]
    MalformedPayload(#[from] serde_json::Error),
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One logical log line: either a physical line that carried no pagination
/// marker, or the concatenated pages of a complete fragment group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
}

impl LogEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Inline `log{page=P/T, id=ID}` tag found on a physical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationMarker {
    pub page: u32,
    pub total: u32,
    pub id: u64,
}

/// Pages collected so far for one paginated log id
///
/// `total` is fixed by the first fragment seen for the id. Pages are keyed by
/// their 1-based page number, so completeness is a count of populated pages
/// rather than a property of a dense array. A page numbered outside
/// `1..=total` is counted in `rejected` and keeps the group incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentGroup {
    pub total: u32,
    pub pages: BTreeMap<u32, String>,
    pub rejected: usize,
}

impl FragmentGroup {
    pub fn new(total: u32) -> Self {
        Self { total, pages: BTreeMap::new(), rejected: 0 }
    }

    /// Store a page body. Returns false when the page number lies outside
    /// `1..=total` and was not stored.
    pub fn insert(&mut self, page: u32, body: String) -> bool {
        if page == 0 || page > self.total {
            self.rejected += 1;
            return false;
        }
        self.pages.insert(page, body);
        true
    }

    pub fn received(&self) -> usize {
        self.pages.len()
    }

    pub fn is_complete(&self) -> bool {
        self.rejected == 0 && self.received() == self.total as usize
    }

    /// Concatenate pages in page order with no separator
    pub fn join(&self) -> String {
        self.pages.values().map(String::as_str).collect()
    }
}

//! Reassembly of paginated log lines
//!
//! Logcat truncates long records, so the SDK splits them into pages tagged
//! with `log{page=P/T, id=ID}`. Pages of different logs may interleave with
//! each other and with unrelated lines, and pages may be missing entirely.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Diagnostic, FragmentGroup, LogEntry, PaginationMarker};
use crate::parsers::prefix::strip_prefix;

fn marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"log\{page=([0-9]+)/([0-9]+), id=([0-9]+)\}")
            .expect("pagination marker pattern is valid")
    })
}

/// How page bodies are cleaned up before concatenation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassemblyOptions {
    /// Strip the logcat prefix from every page after the first
    pub strip_page_prefix: bool,
    /// Trim whitespace around each page body once the marker is removed.
    /// Disable to keep payload whitespace that straddles a page boundary.
    pub trim_pages: bool,
}

impl Default for ReassemblyOptions {
    fn default() -> Self {
        Self { strip_page_prefix: true, trim_pages: true }
    }
}

/// Result of [`reassemble_fragments`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reassembled {
    pub entries: Vec<LogEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Find the first pagination marker on a line
///
/// Returns the parsed marker and the line with that marker removed. Markers
/// whose numbers do not fit their integer types are not treated as markers.
pub fn parse_marker(line: &str) -> Option<(PaginationMarker, String)> {
    let caps = marker_regex().captures(line)?;
    let page = caps[1].parse::<u32>().ok()?;
    let total = caps[2].parse::<u32>().ok()?;
    let id = caps[3].parse::<u64>().ok()?;

    let remainder = marker_regex().replacen(line, 1, "").into_owned();
    Some((PaginationMarker { page, total, id }, remainder))
}

/// Combine paginated lines into complete logical entries
///
/// Lines without a marker become entries immediately, in input order. Once
/// every line has been read, each complete group is appended as a single
/// entry (groups in ascending id order, pages in page order, no separator).
/// Groups with missing pages are dropped and reported as
/// [`Diagnostic::IncompletePaginationGroup`]. Entries that are blank after
/// trimming are removed.
///
/// A page numbered outside `1..=total` is never stored and marks its group
/// incomplete, even when the stored pages would otherwise add up to `total`.
/// A marker declaring `total = 0` therefore always yields a diagnostic.
///
/// # Examples
///
/// ```
/// use logcat_body_pretty::parsers::pagination::{reassemble_fragments, ReassemblyOptions};
///
/// let input = "log{page=2/2, id=7} B\nunrelated\nlog{page=1/2, id=7} A";
/// let result = reassemble_fragments(input, &ReassemblyOptions::default());
/// let texts: Vec<&str> = result.entries.iter().map(|e| e.as_str()).collect();
/// assert_eq!(texts, ["unrelated", "AB"]);
/// assert!(result.diagnostics.is_empty());
/// ```
pub fn reassemble_fragments(input: &str, options: &ReassemblyOptions) -> Reassembled {
    let mut entries = Vec::new();
    let mut groups: BTreeMap<u64, FragmentGroup> = BTreeMap::new();
    let mut line_count = 0usize;

    for line in input.lines() {
        line_count += 1;

        let Some((marker, remainder)) = parse_marker(line) else {
            entries.push(LogEntry::new(line));
            continue;
        };

        let mut body = if options.trim_pages { remainder.trim().to_string() } else { remainder };
        if options.strip_page_prefix && marker.page > 1 {
            body = strip_prefix(&body);
        }

        let group = groups.entry(marker.id).or_insert_with(|| FragmentGroup::new(marker.total));
        if !group.insert(marker.page, body) {
            debug!(
                id = marker.id,
                page = marker.page,
                total = group.total,
                "ignoring page outside declared range"
            );
        }
    }

    let mut diagnostics = Vec::new();
    let group_count = groups.len();
    for (id, group) in groups {
        if group.is_complete() {
            entries.push(LogEntry::new(group.join()));
        } else {
            diagnostics.push(Diagnostic::IncompletePaginationGroup {
                id,
                received: group.received(),
                total: group.total,
            });
        }
    }

    entries.retain(|entry| !entry.text.trim().is_empty());

    debug!(
        lines = line_count,
        groups = group_count,
        incomplete = diagnostics.len(),
        entries = entries.len(),
        "reassembled log fragments"
    );

    Reassembled { entries, diagnostics }
}

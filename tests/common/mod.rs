//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Builder for a single logcat line with the six-field prefix
pub struct LogLineBuilder {
    date: String,
    time: String,
    pid_tid: String,
    tag: String,
    package: String,
    priority: char,
    message: String,
}

impl LogLineBuilder {
    /// Create a debug line from the sample app with the given message
    pub fn new(message: &str) -> Self {
        Self {
            date: "2024-05-01".to_string(),
            time: "12:00:00.000".to_string(),
            pid_tid: "30249-30321".to_string(),
            tag: "AirbridgeNetwork".to_string(),
            package: "com.example.shop".to_string(),
            priority: 'D',
            message: message.to_string(),
        }
    }

    /// Set the `HH:mm:ss.SSS` part of the timestamp
    pub fn time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    /// Set the `YYYY-MM-DD` part of the timestamp
    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    /// Set the priority letter
    pub fn priority(mut self, priority: char) -> Self {
        self.priority = priority;
        self
    }

    /// Set the logcat tag
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    /// Render the line
    pub fn build(&self) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            self.date, self.time, self.pid_tid, self.tag, self.package, self.priority, self.message
        )
    }
}

/// Builder for a logcat dump mixing plain and paginated lines
pub struct LogcatBuilder {
    lines: Vec<String>,
}

impl LogcatBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a raw line as-is
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add a prefixed line
    pub fn line(mut self, line: LogLineBuilder) -> Self {
        self.lines.push(line.build());
        self
    }

    /// Add the pages of `message` split into about `pages` chunks for log
    /// `id`, all stamped with `time`. `skip` drops one page (1-based).
    pub fn paginated(
        mut self,
        id: u64,
        time: &str,
        message: &str,
        pages: usize,
        skip: Option<usize>,
    ) -> Self {
        let chunks = split_chunks(message, pages);
        let total = chunks.len();
        for (index, chunk) in chunks.iter().enumerate() {
            let page = index + 1;
            if skip == Some(page) {
                continue;
            }
            let tagged = format!("log{{page={}/{}, id={}}} {}", page, total, id, chunk);
            self.lines.push(LogLineBuilder::new(&tagged).time(time).build());
        }
        self
    }

    /// Reverse the order of all lines added so far
    pub fn reversed(mut self) -> Self {
        self.lines.reverse();
        self
    }

    /// Join lines with LF
    pub fn build(&self) -> String {
        self.lines.join("\n")
    }

    /// Join lines with CRLF
    pub fn build_crlf(&self) -> String {
        self.lines.join("\r\n")
    }

    /// Write the dump to a temp file
    pub fn write_temp(&self) -> NamedTempFile {
        write_temp_file(&self.build())
    }
}

impl Default for LogcatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Split into roughly `pages` chunks, never cutting next to whitespace since
/// page bodies are trimmed on reassembly
pub fn split_chunks(message: &str, pages: usize) -> Vec<String> {
    let chars: Vec<char> = message.chars().collect();
    let size = chars.len().div_ceil(pages.max(1)).max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let mut end = (start + size).min(chars.len());
        while end < chars.len() && (chars[end].is_whitespace() || chars[end - 1].is_whitespace()) {
            end += 1;
        }
        chunks.push(chars[start..end].iter().collect());
        start = end;
    }
    chunks
}

/// SDK network log message carrying the given payload
pub fn network_message(payload: &str) -> String {
    format!("POST https://api.example.com/events body={{{}}} bodySize={}", payload, payload.len())
}

/// Event chunk payload with one JSON-encoded event body per entry of `names`
pub fn event_chunk(names: &[&str]) -> String {
    let events: Vec<String> = names
        .iter()
        .map(|name| {
            let inner = serde_json::json!({ "eventName": name, "value": 1 }).to_string();
            serde_json::json!({ "body": inner }).to_string()
        })
        .collect();
    format!(r#"{{"events":[{}]}}"#, events.join(","))
}

/// Helper to create a temporary file with given content
pub fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

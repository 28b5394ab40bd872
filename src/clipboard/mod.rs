//! Placing formatted payloads on the system clipboard (`format --copy`)

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Formatted payloads share the input size cap
const MAX_CLIPBOARD_BYTES: usize = 10 * 1024 * 1024;

/// Destination for copied text; the system clipboard in production, a
/// recorder in tests
trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn open() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")
    }
}

fn check_copyable(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Nothing to copy: formatted payload is empty");
    }
    if text.len() > MAX_CLIPBOARD_BYTES {
        bail!(
            "Formatted payload too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_BYTES
        );
    }
    Ok(())
}

/// Copy `text` into `sink` after checking it is worth copying
#[cfg(test)]
fn copy_into(text: &str, sink: &mut dyn ClipboardSink) -> Result<()> {
    check_copyable(text)?;
    sink.set_text(text)
}

/// Copy `text` to the system clipboard
///
/// # Errors
///
/// Fails when the text is blank or larger than 10MB, or when no clipboard is
/// available (headless sessions, missing X11/Wayland display).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    // Validate before touching the clipboard so headless runs get the real error
    check_copyable(text)?;
    let mut clipboard = SystemClipboard::open()?;
    clipboard.set_text(text)
}

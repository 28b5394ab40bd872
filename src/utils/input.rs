use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum input size: 10MB
const MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the size that is checked belongs to the file
/// that is subsequently read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_INPUT_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_INPUT_BYTES
        );
    }

    Ok(())
}

/// Read a log dump from `path`, or from stdin when `path` is `None` or `-`
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => read_input_file(path),
        _ => read_limited(io::stdin().lock(), "stdin"),
    }
}

/// Read a log dump file after checking its size
pub fn read_input_file(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    validate_file_size(&file, path)?;
    read_limited(file, &path.display().to_string())
}

fn read_limited(reader: impl Read, source: &str) -> Result<String> {
    let mut text = String::new();
    reader
        .take(MAX_INPUT_BYTES + 1)
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read {} as UTF-8 text", source))?;

    if text.len() as u64 > MAX_INPUT_BYTES {
        bail!("Input too large: {} (max {} bytes)", source, MAX_INPUT_BYTES);
    }

    Ok(text)
}

/// Replace a file's contents with `text`
pub fn write_output_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_read_input_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("line one\r\nline two".as_bytes()).unwrap();
        file.flush().unwrap();

        let text = read_input(Some(file.path())).unwrap();
        assert_eq!(text, "line one\r\nline two");
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(Some(Path::new("/nonexistent/logcat.txt")));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to open input file"));
    }

    #[test]
    fn test_read_input_rejects_large_file() {
        let file = NamedTempFile::new().unwrap();
        file.as_file().set_len(MAX_INPUT_BYTES + 1).unwrap();

        let result = read_input_file(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("File too large"));
    }

    #[test]
    fn test_read_limited_rejects_oversized_stream() {
        let data = vec![b'a'; (MAX_INPUT_BYTES + 10) as usize];
        let result = read_limited(&data[..], "stdin");
        assert!(result.unwrap_err().to_string().contains("Input too large"));
    }

    #[test]
    fn test_read_limited_rejects_invalid_utf8() {
        let data = [0xffu8, 0xfe, 0xfd];
        let result = read_limited(&data[..], "stdin");
        assert!(result.unwrap_err().to_string().contains("UTF-8"));
    }

    #[test]
    fn test_write_output_file_replaces_contents() {
        let file = NamedTempFile::new().unwrap();
        write_output_file(file.path(), "first").unwrap();
        write_output_file(file.path(), "second").unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "second");
    }
}

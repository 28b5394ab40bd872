use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::parsers::ReassemblyOptions;

/// Where the logcat prefix is removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PrefixMode {
    /// Keep every prefix
    None,
    /// Strip prefixes from the whole input before reassembly. Timestamps are
    /// removed too, so entries keep their input order.
    Document,
    /// Strip prefixes from continuation pages only, keeping the first page's
    /// timestamp for sorting
    #[default]
    Fragment,
}

/// How an extracted body is turned into JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PayloadMode {
    /// Parse as-is and expand the JSON-encoded `events[].body` strings
    #[default]
    Structured,
    /// Undo the older SDK escaping before parsing
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub prefix_mode: PrefixMode,
    pub payload_mode: PayloadMode,
    pub trim_pages: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            prefix_mode: PrefixMode::default(),
            payload_mode: PayloadMode::default(),
            trim_pages: true,
        }
    }
}

impl PipelineConfig {
    pub fn reassembly_options(&self) -> ReassemblyOptions {
        ReassemblyOptions {
            strip_page_prefix: self.prefix_mode == PrefixMode::Fragment,
            trim_pages: self.trim_pages,
        }
    }

    pub fn unescape_first(&self) -> bool {
        self.payload_mode == PayloadMode::Legacy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.prefix_mode, PrefixMode::Fragment);
        assert_eq!(config.payload_mode, PayloadMode::Structured);
        assert!(config.trim_pages);
        assert_eq!(config.reassembly_options(), ReassemblyOptions::default());
        assert!(!config.unescape_first());
    }

    #[test]
    fn test_document_mode_disables_page_stripping() {
        let config = PipelineConfig { prefix_mode: PrefixMode::Document, ..Default::default() };
        assert!(!config.reassembly_options().strip_page_prefix);
    }

    #[test]
    fn test_config_deserializes_partial_json() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"payload_mode":"legacy","trim_pages":false}"#).unwrap();
        assert_eq!(config.prefix_mode, PrefixMode::Fragment);
        assert!(config.unescape_first());
        assert!(!config.trim_pages);
    }
}

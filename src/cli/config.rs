//! TOML configuration file support.
//!
//! Settings shared by a series of runs can live in a file instead of flags:
//!
//! ```toml
//! # specpod.toml
//! [conversion]
//! format = "jcamp"
//! strict = false
//! justify = true
//! max_line_length = 80
//! x_factor = 1.0
//! y_factor = 1.0
//! encoding = "latin-1"
//! origin = "QC lab"
//! sort_order = "ascending"
//!
//! [history]
//! min_fragments = 36
//! anchor_window = 40
//! ```
//!
//! Flags given on the command line win over the file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use specpod::ascii::TextEncoding;
use specpod::convert::{ConvertOptions, OutputFormat};
use specpod::spectrum::SortOrder;

/// Root of a specpod.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Conversion settings
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// History record layout of binary inputs
    #[serde(default)]
    pub history: HistoryConfig,
}

/// The `[conversion]` table
#[derive(Debug, Default, Deserialize)]
pub struct ConversionConfig {
    /// Output document type
    pub format: Option<OutputFormat>,
    /// Fail files that produce warnings
    pub strict: Option<bool>,
    /// Pad header labels
    pub justify: Option<bool>,
    /// Interchange line limit (0 disables)
    pub max_line_length: Option<usize>,
    /// JCAMP x factor
    pub x_factor: Option<f64>,
    /// JCAMP y factor
    pub y_factor: Option<f64>,
    /// Code page of text inputs
    pub encoding: Option<TextEncoding>,
    /// `Origin` record value
    pub origin: Option<String>,
    /// Point order
    pub sort_order: Option<SortOrder>,
}

/// The `[history]` table
#[derive(Debug, Default, Deserialize)]
pub struct HistoryConfig {
    /// Fragment count without extra acquisition groups
    pub min_fragments: Option<usize>,
    /// Fragments searched for the photometric anchor
    pub anchor_window: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Overlay the file values on `options`
    pub fn apply(&self, options: &mut ConvertOptions) {
        let c = &self.conversion;
        if let Some(v) = c.format {
            options.output_format = v;
        }
        if let Some(v) = c.strict {
            options.strict = v;
        }
        if let Some(v) = c.justify {
            options.render.justify = v;
        }
        if let Some(v) = c.max_line_length {
            options.render.max_line_length = v;
        }
        if let Some(v) = c.x_factor {
            options.x_factor = v;
        }
        if let Some(v) = c.y_factor {
            options.y_factor = v;
        }
        if let Some(v) = c.encoding {
            options.encoding = v;
        }
        if let Some(v) = &c.origin {
            options.origin = Some(v.clone());
        }
        if let Some(v) = c.sort_order {
            options.sort_order = v;
        }
        if let Some(v) = self.history.min_fragments {
            options.history.min_fragments = v;
        }
        if let Some(v) = self.history.anchor_window {
            options.history.anchor_window = v;
        }
    }
}

/// Defaults overlaid with the optional config file
pub fn load_options(path: Option<&Path>) -> Result<ConvertOptions> {
    let mut options = ConvertOptions::default();
    if let Some(path) = path {
        Config::from_file(path)?.apply(&mut options);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [conversion]
            format = "csv"
            strict = true
            justify = false
            max_line_length = 0
            x_factor = 0.5
            encoding = "latin-1"
            origin = "QC lab"
            sort_order = "descending"

            [history]
            min_fragments = 36
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.conversion.format, Some(OutputFormat::Csv));
        assert_eq!(config.conversion.strict, Some(true));
        assert_eq!(config.conversion.encoding, Some(TextEncoding::Latin1));
        assert_eq!(config.conversion.sort_order, Some(SortOrder::Descending));
        assert_eq!(config.history.min_fragments, Some(36));
        assert_eq!(config.history.anchor_window, None);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [conversion]
            format = "jdx"
        "#;

        let config = Config::from_str(toml).unwrap();
        let mut options = ConvertOptions::new(OutputFormat::Csv);
        config.apply(&mut options);
        assert_eq!(options.output_format, OutputFormat::Jcamp);
        assert!(options.render.justify);
        assert_eq!(options.history.min_fragments, 39);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.conversion.format, None);
        assert_eq!(config.history.min_fragments, None);
    }

    #[test]
    fn test_load_options_reads_history_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("specpod.toml");
        std::fs::write(&path, "[history]\nmin_fragments = 36\n").unwrap();

        let options = load_options(Some(&path)).unwrap();
        assert_eq!(options.history.min_fragments, 36);
        assert_eq!(load_options(None).unwrap().history.min_fragments, 39);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let toml = r#"
            [conversion]
            format = "xml"
        "#;
        assert!(Config::from_str(toml).is_err());
    }
}

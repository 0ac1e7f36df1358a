use std::path::PathBuf;

use crate::ascii::TextEncoding;
use crate::metadata::RenderOptions;
use crate::sp::HistoryLayout;
use crate::spectrum::SortOrder;

use super::OutputFormat;

/// Resolved settings for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Document type written
    pub output_format: OutputFormat,
    /// Treat every parse warning as a failure
    pub strict: bool,
    /// Header justification and line length
    pub render: RenderOptions,
    /// JCAMP x factor
    pub x_factor: f64,
    /// JCAMP y factor
    pub y_factor: f64,
    /// Code page of text inputs
    pub encoding: TextEncoding,
    /// Value of the `Origin` record, if set
    pub origin: Option<String>,
    /// Point order of the parsed spectra
    pub sort_order: SortOrder,
    /// History record layout for binary inputs
    pub history: HistoryLayout,
    /// Write outputs here instead of next to the inputs
    pub output_dir: Option<PathBuf>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            strict: false,
            render: RenderOptions::default(),
            x_factor: 1.0,
            y_factor: 1.0,
            encoding: TextEncoding::default(),
            origin: None,
            sort_order: SortOrder::default(),
            history: HistoryLayout::default(),
            output_dir: None,
        }
    }
}

impl ConvertOptions {
    /// Options for the given output format, everything else default
    pub fn new(output_format: OutputFormat) -> Self {
        Self {
            output_format,
            ..Self::default()
        }
    }

    /// Output path for one input file
    pub fn output_path(&self, input: &std::path::Path) -> PathBuf {
        let ext = self.output_format.extension();
        match &self.output_dir {
            Some(dir) => {
                let stem = input.file_stem().unwrap_or_default();
                dir.join(stem).with_extension(ext)
            }
            None => input.with_extension(ext),
        }
    }
}

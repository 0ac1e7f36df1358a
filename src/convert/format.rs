use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ascii::{legacy, pe, TextEncoding, TextFile};
use crate::sp::MAGIC;
use crate::writer::{CsvWriter, JcampWriter, PlainWriter, SpectrumWriter};

use super::{ConvertError, ConvertOptions};

/// Recognised input dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    /// Binary block container (`*.sp`)
    Sp,
    /// Fixed-offset text export (`*.asc`)
    PeAscii,
    /// `label = value` text with `@@@@` separator
    Legacy,
}

impl InputFormat {
    /// Identify the dialect from the content, falling back to the extension
    pub fn detect(path: &Path, bytes: &[u8]) -> Result<Self, ConvertError> {
        if bytes.starts_with(MAGIC) {
            return Ok(InputFormat::Sp);
        }
        // signature and separator are plain ASCII under any code page
        let text = TextFile::from_bytes(bytes, TextEncoding::Latin1);
        if text.lines().first().is_some_and(|l| pe::looks_like_signature(l)) {
            return Ok(InputFormat::PeAscii);
        }
        if legacy::has_separator(text.lines()) {
            return Ok(InputFormat::Legacy);
        }
        Self::from_extension(path).ok_or_else(|| ConvertError::UnknownFormat {
            path: path.to_path_buf(),
        })
    }

    /// Dialect implied by the file extension alone
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "sp" => Some(InputFormat::Sp),
            "asc" => Some(InputFormat::PeAscii),
            "spc" => Some(InputFormat::Legacy),
            _ => None,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Sp => f.write_str("binary block file"),
            InputFormat::PeAscii => f.write_str("PE ASCII export"),
            InputFormat::Legacy => f.write_str("legacy key/value text"),
        }
    }
}

/// Output document types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JCAMP-DX 4.24
    #[default]
    #[serde(alias = "jdx", alias = "jcamp-dx")]
    Jcamp,
    /// `label = value` header plus `x y` data
    #[serde(alias = "spc")]
    Plain,
    /// Two-column CSV
    Csv,
}

impl OutputFormat {
    /// Writer configured from the options
    pub fn writer(self, options: &ConvertOptions) -> Box<dyn SpectrumWriter> {
        match self {
            OutputFormat::Jcamp => Box::new(
                JcampWriter::new()
                    .with_options(options.render)
                    .with_factors(options.x_factor, options.y_factor),
            ),
            OutputFormat::Plain => Box::new(PlainWriter::new().with_options(options.render)),
            OutputFormat::Csv => Box::new(CsvWriter::new()),
        }
    }

    /// File extension, without dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jcamp => "jdx",
            OutputFormat::Plain => "spc",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jcamp" | "jdx" | "jcamp-dx" => Ok(OutputFormat::Jcamp),
            "plain" | "spc" => Ok(OutputFormat::Plain),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ConvertError::UnknownOutputFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Jcamp => f.write_str("jcamp"),
            OutputFormat::Plain => f.write_str("plain"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

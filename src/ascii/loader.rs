use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sp::file_creation_time;

use super::AsciiError;

/// Code page used to turn file bytes into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// UTF-8, invalid sequences replaced
    #[default]
    Utf8,
    /// ISO 8859-1, every byte maps to the code point of the same value
    Latin1,
}

impl TextEncoding {
    /// Decode raw bytes
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            other => Err(AsciiError::UnknownEncoding(other.to_string())),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => f.write_str("utf-8"),
            TextEncoding::Latin1 => f.write_str("latin-1"),
        }
    }
}

/// A text file split into lines
#[derive(Debug, Clone, Default)]
pub struct TextFile {
    lines: Vec<String>,
    /// File name without directory
    pub file_name: String,
    /// Creation time of the file on disk
    pub creation_time: Option<DateTime<Utc>>,
}

impl TextFile {
    /// Read and split a file
    pub fn load(path: impl AsRef<Path>, encoding: TextEncoding) -> Result<Self, AsciiError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mut file = Self::from_bytes(&bytes, encoding);
        file.file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        file.creation_time = file_creation_time(path);
        Ok(file)
    }

    /// Decode and split bytes held in memory
    pub fn from_bytes(bytes: &[u8], encoding: TextEncoding) -> Self {
        Self::from_text(&encoding.decode(bytes))
    }

    /// Split text on `\r\n`, `\r` or `\n`. Blank text yields no lines.
    pub fn from_text(text: &str) -> Self {
        let lines = if text.trim().is_empty() {
            Vec::new()
        } else {
            split_lines(text)
        };
        Self {
            lines,
            ..Self::default()
        }
    }

    /// Lines in file order, without terminators
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if the file held no text
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split(['\r', '\n'])
        .map(str::to_string)
        .collect()
}

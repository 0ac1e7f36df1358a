//! Legacy key/value export.
//!
//! ```text
//! **** UV/VIS ****          optional type banner
//! sample description        optional, only after a banner
//! label = value             any number of header lines
//! @@@@
//! x y
//! ```
//!
//! The plain key/value writer produces this layout, so a written file reads
//! back to the same points and unit names.

use std::path::Path;

use log::debug;

use crate::metadata::keys;
use crate::outcome::{ParseOutcome, WarningKind, Warnings};
use crate::spectrum::{SortOrder, SpectralType, Spectrum};

use super::{parse_data_line, AsciiError, TextEncoding, TextFile};

/// Line separating header and data
pub const SEPARATOR: &str = "@@@@";

const BANNERS: &[(&str, SpectralType)] = &[
    ("**** UV/VIS ****", SpectralType::UvVis),
    ("**** RAMAN ****", SpectralType::Raman),
    ("**** IR ****", SpectralType::Infrared),
];

/// Banner line announcing a spectral type, if the dialect has one for it
pub fn banner(kind: SpectralType) -> Option<&'static str> {
    BANNERS
        .iter()
        .find(|&&(_, k)| k == kind)
        .map(|&(text, _)| text)
}

/// True if any line is the header/data separator
pub fn has_separator(lines: &[String]) -> bool {
    separator_index(lines).is_some()
}

fn separator_index(lines: &[String]) -> Option<usize> {
    lines.iter().position(|l| l.trim() == SEPARATOR)
}

fn split_label(line: &str) -> Option<(&str, &str)> {
    let (label, value) = line.split_once('=')?;
    let label = label.trim();
    (!label.is_empty()).then(|| (label, value.trim()))
}

/// Reader for the legacy key/value dialect
#[derive(Debug, Clone, Default)]
pub struct LegacyReader {
    sort_order: SortOrder,
}

impl LegacyReader {
    /// Reader producing ascending spectra
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different sort order for the resulting spectrum
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Load and read a file
    pub fn read_path(
        &self,
        path: impl AsRef<Path>,
        encoding: TextEncoding,
    ) -> Result<ParseOutcome<Spectrum>, AsciiError> {
        self.read_file(&TextFile::load(path, encoding)?)
    }

    /// Read a loaded file and record its name and creation time
    pub fn read_file(&self, file: &TextFile) -> Result<ParseOutcome<Spectrum>, AsciiError> {
        let mut outcome = self.read_lines(file.lines())?;
        outcome.value.source_file_name = file.file_name.clone();
        outcome.value.source_file_creation_date = file.creation_time;
        Ok(outcome)
    }

    /// Parse already split lines
    pub fn read_lines(&self, lines: &[String]) -> Result<ParseOutcome<Spectrum>, AsciiError> {
        if lines.is_empty() {
            return Err(AsciiError::Empty);
        }
        let separator = separator_index(lines).ok_or(AsciiError::MissingSeparator)?;
        let mut warnings = Warnings::new();
        let mut spectrum = Spectrum::new(self.sort_order);

        let banner = BANNERS
            .iter()
            .find(|(text, _)| lines[0].contains(text))
            .map(|&(_, kind)| kind);
        let mut header_start = 0;
        if let Some(kind) = banner {
            spectrum.spectral_type = kind;
            header_start = 1;
            if let Some(line) = lines.get(1).filter(|_| separator > 1) {
                if split_label(line).is_none() {
                    spectrum
                        .metadata_mut()
                        .set_if_present(keys::SAMPLE_DESCRIPTION, line.trim());
                    header_start = 2;
                }
            }
        }

        let (mut x_unit, mut y_unit) = (String::new(), String::new());
        for line in &lines[header_start..separator] {
            let Some((label, value)) = split_label(line) else {
                if !line.trim().is_empty() {
                    debug!("ignoring header line {:?}", line);
                }
                continue;
            };
            match label {
                keys::X_UNITS => x_unit = value.to_string(),
                keys::Y_UNITS => y_unit = value.to_string(),
                _ if keys::DERIVED.contains(&label) => {}
                _ => spectrum.add_metadata(label, value),
            }
        }
        spectrum.set_unit_names(&x_unit, &y_unit);

        for (number, line) in lines.iter().enumerate().skip(separator + 1) {
            if line.trim().is_empty() {
                continue;
            }
            match parse_data_line(line) {
                Some((x, y)) => {
                    spectrum.add_point(x, y);
                }
                None => warnings.push(
                    WarningKind::MalformedField,
                    format!("line {}: not an x/y pair: {:?}", number + 1, line.trim()),
                ),
            }
        }

        Ok(ParseOutcome::new(spectrum, warnings))
    }
}

//! Fixed-offset ASCII export of the vendor's instrument software.
//!
//! ```text
//! line 0      signature, six 12-character tokens
//! line 2      source reference (original file name)
//! line 3, 4   creation date and time   (yy/MM/dd HH:mm:ss.ff)
//! line 5, 6   modification date and time
//! line 7      owner
//! line 8      sample description
//! #HDR        header marker
//! #GR         unit section, exactly 3 lines after #HDR
//! #DATA       data section, exactly 11 lines after #GR
//! ```
//!
//! Version 4.00 files add instrument details at fixed lines. Lines below
//! the free comment block move down by one for every extra comment line.

use std::path::Path;

use chrono::NaiveDateTime;
use log::debug;

use crate::metadata::keys;
use crate::outcome::{ParseOutcome, WarningKind, Warnings};
use crate::spectrum::{SortOrder, SpectralType, Spectrum};

use super::{parse_data_line, parse_number, AsciiError, TextEncoding, TextFile};

const TOKEN_LEN: usize = 12;
const TOKEN_COUNT: usize = 6;
const MIN_LINES: usize = 10;
const UNITS_AFTER_HDR: usize = 3;
const DATA_AFTER_UNITS: usize = 11;
/// Index of `#HDR` in a version 4.00 file without extra comment lines
const CANONICAL_HDR_INDEX: isize = 75;
const TIMESTAMP_FORMAT: &str = "%y/%m/%d %H:%M:%S%.f";

/// Recognised revisions of the signature line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeSignature {
    /// Version token 1.60
    Version160,
    /// Version token 4.00, with instrument details in the header
    Version400,
    /// Any other version token
    Valid,
}

/// Split the signature line into its six fixed-width tokens
fn signature_tokens(line: &str) -> Option<[&str; TOKEN_COUNT]> {
    let mut tokens = [""; TOKEN_COUNT];
    for (i, token) in tokens.iter_mut().enumerate() {
        *token = line.get(i * TOKEN_LEN..(i + 1) * TOKEN_LEN)?;
    }
    Some(tokens)
}

/// True if the first line looks like this dialect's signature
pub fn looks_like_signature(line: &str) -> bool {
    line.contains("PE") && line.contains("SPECTRUM") && line.contains("ASCII")
}

fn index_of(lines: &[String], marker: &str) -> Option<usize> {
    lines.iter().position(|l| l.contains(marker))
}

fn invalid(reason: impl Into<String>) -> AsciiError {
    AsciiError::InvalidSignature {
        reason: reason.into(),
    }
}

/// Check line count, section layout and signature tokens
pub fn signature(lines: &[String]) -> Result<PeSignature, AsciiError> {
    if lines.is_empty() {
        return Err(AsciiError::Empty);
    }
    if lines.len() < MIN_LINES {
        return Err(invalid(format!(
            "{} lines, at least {} expected",
            lines.len(),
            MIN_LINES
        )));
    }
    let (hdr, units, data) = match (
        index_of(lines, "#HDR"),
        index_of(lines, "#GR"),
        index_of(lines, "#DATA"),
    ) {
        (Some(h), Some(u), Some(d)) => (h, u, d),
        _ => return Err(invalid("missing #HDR, #GR or #DATA marker")),
    };
    if units != hdr + UNITS_AFTER_HDR || data != units + DATA_AFTER_UNITS {
        return Err(invalid(format!(
            "unexpected section layout (#HDR {}, #GR {}, #DATA {})",
            hdr, units, data
        )));
    }

    let tokens = signature_tokens(&lines[0]).ok_or_else(|| invalid("signature line too short"))?;
    let expected = [(0, "PE"), (2, "SPECTRUM"), (3, "ASCII"), (4, "PEDS")];
    for (index, text) in expected {
        if !tokens[index].contains(text) {
            return Err(invalid(format!("token {} does not contain {}", index, text)));
        }
    }

    Ok(if tokens[5].contains("1.60") {
        PeSignature::Version160
    } else if tokens[5].contains("4.00") {
        PeSignature::Version400
    } else {
        PeSignature::Valid
    })
}

fn spectral_type(signature_line: &str) -> SpectralType {
    let token = signature_line.get(..TOKEN_LEN).unwrap_or(signature_line);
    if token.contains("PE UV") || token.contains("PE FL") {
        SpectralType::UvVis
    } else if token.contains("PE IR") {
        SpectralType::Infrared
    } else {
        SpectralType::Unknown
    }
}

/// Reader for the fixed-offset ASCII dialect
#[derive(Debug, Clone, Default)]
pub struct PeAsciiReader {
    sort_order: SortOrder,
}

impl PeAsciiReader {
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
        let version = signature(lines)?;
        debug!("signature {:?}", version);
        let mut warnings = Warnings::new();
        let mut spectrum = Spectrum::new(self.sort_order);
        let text = Lines(lines);

        // The markers were located by signature()
        let hdr = index_of(lines, "#HDR").unwrap_or_default();
        let units = hdr + UNITS_AFTER_HDR;
        let data = units + DATA_AFTER_UNITS;

        for (number, line) in lines.iter().enumerate().skip(data + 1) {
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

        spectrum.spectral_type = spectral_type(&lines[0]);
        spectrum.set_unit_names(text.at(units + 1), text.at(units + 2));
        if let Some(declared) = parse_number(text.at(units + 7)) {
            if declared != spectrum.len() as f64 {
                warnings.push(
                    WarningKind::Consistency,
                    format!(
                        "#GR announces {} points, data section holds {}",
                        declared,
                        spectrum.len()
                    ),
                );
            }
        }

        spectrum.measurement_date = text.timestamp(3, "creation", &mut warnings);
        spectrum.modification_date = text.timestamp(5, "modification", &mut warnings);

        let md = spectrum.metadata_mut();
        md.set_if_present(keys::SOURCE_REFERENCE, text.at(2));
        md.set_if_present(keys::OWNER, text.at(7));
        md.set_if_present(keys::SAMPLE_DESCRIPTION, text.at(8));
        md.set_if_present(keys::TITLE, text.at(8));

        if version == PeSignature::Version400 {
            let offset = hdr as isize - CANONICAL_HDR_INDEX;
            let model = text.at(11);
            let serial = text.at(12);
            let system = if serial.is_empty() {
                model.to_string()
            } else {
                format!("{} SN:{}", model, serial)
            };
            md.set_if_present(keys::SPECTROMETER_MODEL, model);
            md.set_if_present(keys::SERIAL_NUMBER, serial);
            md.set_if_present(keys::SPECTROMETER_SYSTEM, system.trim());
            md.set_if_present(keys::SOFTWARE_ID, text.at(13));

            let comments: Vec<&str> = (0..offset.max(0))
                .map(|i| text.at_shifted(14, i))
                .filter(|c| !c.is_empty())
                .collect();
            md.set_if_present(keys::COMMENTS, &comments.join("; "));

            md.set_if_present(keys::RESOLUTION, text.at_shifted(17, offset));
            md.set_if_present(keys::INSTRUMENT_PARAMETERS, text.at_shifted(24, offset));
            for (key, line) in [(keys::DETECTOR_CHANGE, 41), (keys::LAMP_CHANGE, 42)] {
                if let Some(value) = parse_number(text.at_shifted(line, offset)) {
                    md.set(key, value.to_string());
                }
            }
        }

        Ok(ParseOutcome::new(spectrum, warnings))
    }
}

/// Trimmed line access that tolerates out-of-range indices
struct Lines<'a>(&'a [String]);

impl<'a> Lines<'a> {
    fn at(&self, index: usize) -> &'a str {
        self.0.get(index).map(|l| l.trim()).unwrap_or_default()
    }

    fn at_shifted(&self, index: usize, offset: isize) -> &'a str {
        match usize::try_from(index as isize + offset) {
            Ok(i) => self.at(i),
            Err(_) => "",
        }
    }

    fn timestamp(
        &self,
        date_line: usize,
        what: &str,
        warnings: &mut Warnings,
    ) -> Option<NaiveDateTime> {
        let text = format!("{} {}", self.at(date_line), self.at(date_line + 1));
        match NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT) {
            Ok(t) => Some(t),
            Err(e) => {
                warnings.push(
                    WarningKind::MalformedField,
                    format!("{} timestamp {:?}: {}", what, text.trim(), e),
                );
                None
            }
        }
    }
}

use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::outcome::{ParseOutcome, WarningKind, Warnings};
use crate::spectrum::{SortOrder, SpectralType, Spectrum};

use super::codes::{describe, BlockCode};
use super::history::{HistoryFields, HistoryLayout};
use super::record::SpRecord;
use super::schema::dispatch;
use super::{decode_members, Container, SpError};

/// Reader for binary block files
#[derive(Debug, Clone, Default)]
pub struct SpReader {
    layout: HistoryLayout,
    sort_order: SortOrder,
}

/// Structural dump of a block file, for diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct SpInspection {
    /// Container description
    pub description: String,
    /// Top-level blocks
    pub blocks: Vec<RecordSummary>,
    /// Members of the main block
    pub members: Vec<RecordSummary>,
    /// Decoded fields
    pub record: SpRecord,
    /// History fields under the reader's layout
    pub history_fields: Option<HistoryFields>,
}

/// One line of an [`SpInspection`]
#[derive(Debug, Clone, Serialize)]
pub struct RecordSummary {
    /// Raw id
    pub id: i16,
    /// Symbolic id name
    pub name: String,
    /// Symbolic type name (members only)
    pub type_name: Option<String>,
    /// Payload length in bytes
    pub length: usize,
}

impl SpReader {
    /// Reader with the default history layout and ascending order
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different history layout
    pub fn with_history_layout(mut self, layout: HistoryLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Use a different sort order for the resulting spectrum
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Read a file and record its name and creation time
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<ParseOutcome<Spectrum>, SpError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mut outcome = self.read_bytes(&bytes)?;
        outcome.value.source_file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        outcome.value.source_file_creation_date = file_creation_time(path);
        Ok(outcome)
    }

    /// Decode a block file held in memory
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<ParseOutcome<Spectrum>, SpError> {
        let container = Container::parse(bytes)?;
        let mut warnings = Warnings::new();
        let record = decode_record(&container, &mut warnings)?;
        info!(
            "decoded {} Y values from \"{}\"",
            record.y_values.len(),
            container.description
        );

        let mut spectrum =
            record.to_spectrum(&container.description, &self.layout, self.sort_order, &mut warnings);
        spectrum.spectral_type = spectral_type(&container, &record, &self.layout);
        Ok(ParseOutcome::new(spectrum, warnings))
    }

    /// Decode everything without building a spectrum
    pub fn inspect(&self, bytes: &[u8]) -> Result<ParseOutcome<SpInspection>, SpError> {
        let container = Container::parse(bytes)?;
        let mut warnings = Warnings::new();
        let record = decode_record(&container, &mut warnings)?;

        let blocks = container
            .blocks
            .iter()
            .map(|b| RecordSummary {
                id: b.id,
                name: describe(b.id),
                type_name: None,
                length: b.payload.len(),
            })
            .collect();
        let members = match container.find(BlockCode::DSet2DC1DI) {
            Some(main) => decode_members(main.payload)?
                .records
                .iter()
                .map(|m| RecordSummary {
                    id: m.id,
                    name: describe(m.id),
                    type_name: Some(describe(m.type_code)),
                    length: m.data.len(),
                })
                .collect(),
            None => Vec::new(),
        };

        let history_fields = record.history_fields(&self.layout);
        Ok(ParseOutcome::new(
            SpInspection {
                description: container.description,
                blocks,
                members,
                record,
                history_fields,
            },
            warnings,
        ))
    }
}

fn decode_record(container: &Container<'_>, warnings: &mut Warnings) -> Result<SpRecord, SpError> {
    if let Some(t) = container.truncation {
        warnings.push(WarningKind::Truncated, format!("block stream: {}", t));
    }
    let main = container
        .find(BlockCode::DSet2DC1DI)
        .ok_or(SpError::MissingMainBlock {
            id: BlockCode::DSet2DC1DI.code(),
            name: BlockCode::DSet2DC1DI.name(),
        })?;

    let members = decode_members(main.payload)?;
    if let Some(t) = members.truncation {
        warnings.push(WarningKind::Truncated, format!("main block members: {}", t));
    }
    debug!("main block holds {} members", members.records.len());

    let mut record = SpRecord::default();
    for member in &members.records {
        if let Some(field) = dispatch(member, warnings) {
            record.apply(field, warnings);
        }
    }
    Ok(record)
}

fn spectral_type(container: &Container<'_>, record: &SpRecord, layout: &HistoryLayout) -> SpectralType {
    if container.find(BlockCode::UVInstrumentHeader).is_some()
        || container.find(BlockCode::FLInstrumentHeader).is_some()
    {
        return SpectralType::UvVis;
    }
    if container.find(BlockCode::IRInstrumentHeader).is_some() {
        return SpectralType::Infrared;
    }
    let anchored = record
        .history
        .iter()
        .any(|f| f.trim() == layout.anchor_text);
    if anchored {
        SpectralType::UvVis
    } else {
        SpectralType::Unknown
    }
}

/// Creation time of a file, falling back to its modification time
pub fn file_creation_time(path: &Path) -> Option<DateTime<Utc>> {
    let meta = std::fs::metadata(path).ok()?;
    meta.created()
        .or_else(|_| meta.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

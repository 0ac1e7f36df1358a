use super::keys;
use super::{Metadata, MetadataEntry};

/// Registration phase of a metadata registry.
///
/// Labels registered here get their reserved/required flags locked in.
/// [`MetadataSchema::build`] ends the phase; the resulting [`Metadata`]
/// can only replace values.
#[derive(Debug, Clone, Default)]
pub struct MetadataSchema {
    entries: Vec<MetadataEntry>,
}

impl MetadataSchema {
    /// An empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// The JCAMP-DX 4.24 header layout used by the interchange writer
    pub fn interchange() -> Self {
        Self::new()
            .required(keys::TITLE)
            .required_with(keys::JCAMP_DX, "4.24")
            .required(keys::DATA_TYPE)
            .required(keys::ORIGIN)
            .required(keys::OWNER)
            .reserved(keys::LONG_DATE)
            .reserved(keys::DATE)
            .reserved(keys::TIME)
            .reserved(keys::SPECTROMETER_SYSTEM)
            .reserved(keys::INSTRUMENT_PARAMETERS)
            .reserved(keys::SAMPLE_DESCRIPTION)
            .reserved(keys::CONCENTRATIONS)
            .reserved(keys::SAMPLING_PROCEDURE)
            .reserved(keys::STATE)
            .reserved(keys::PATH_LENGTH)
            .reserved(keys::PRESSURE)
            .reserved(keys::TEMPERATURE)
            .reserved(keys::DATA_PROCESSING)
            .reserved(keys::SOURCE_REFERENCE)
            .reserved(keys::CROSS_REFERENCE)
            .reserved(keys::RESOLUTION)
            .reserved(keys::X_LABEL)
            .reserved(keys::Y_LABEL)
            .required(keys::X_UNITS)
            .required(keys::Y_UNITS)
            .required(keys::X_FACTOR)
            .required(keys::Y_FACTOR)
            .required(keys::FIRST_X)
            .required(keys::LAST_X)
            .required(keys::NPOINTS)
            .required(keys::FIRST_Y)
            .reserved(keys::MAX_X)
            .reserved(keys::MIN_X)
            .reserved(keys::MAX_Y)
            .reserved(keys::MIN_Y)
            .reserved(keys::DELTA_X)
    }

    /// Register a reserved, required label with an empty value
    pub fn required(self, key: &str) -> Self {
        self.register(key, "", true, true)
    }

    /// Register a reserved, required label with a default value
    pub fn required_with(self, key: &str, value: &str) -> Self {
        self.register(key, value, true, true)
    }

    /// Register a reserved, optional label
    pub fn reserved(self, key: &str) -> Self {
        self.register(key, "", true, false)
    }

    /// Register a user-defined label so it renders at this position
    pub fn user(self, key: &str) -> Self {
        self.register(key, "", false, false)
    }

    /// Number of registered labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish registration
    pub fn build(self) -> Metadata {
        Metadata::from_entries(self.entries)
    }

    fn register(mut self, key: &str, value: &str, reserved: bool, required: bool) -> Self {
        let key = key.trim();
        // First registration wins
        if !self.entries.iter().any(|e| e.label() == key) {
            self.entries
                .push(MetadataEntry::new(key, value, reserved, required));
        }
        self
    }
}

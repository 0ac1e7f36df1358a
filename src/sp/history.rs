//! Heuristic decoding of the embedded history record.
//!
//! The history record is an undelimited blob in which every text fragment
//! is introduced by the two bytes `#u`, followed by an i16 length and the
//! ASCII text. Decoding happens in two independent steps:
//!
//! 1. [`segment`]: bytes → ordered fragments.
//! 2. [`HistoryFields::from_fragments`]: fragments → named fields, using
//!    positions from a [`HistoryLayout`].
//!
//! The positions were derived from sample files. Files with additional
//! acquisition sub-records carry extra groups of five fragments in front of
//! the canonical layout; every position is shifted by five per extra group.

use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};

use crate::metadata::{keys, Metadata};

use super::ascii_string;

/// Bytes that introduce a text fragment (`#u`)
pub const FRAGMENT_MARKER: [u8; 2] = [0x23, 0x75];

/// Blobs shorter than this hold no history
pub const MIN_BLOB_LEN: usize = 5;

/// Single fragment returned for blobs below [`MIN_BLOB_LEN`]
pub const NO_HISTORY: &str = "no HDR history!";

/// Ordered text fragments of one history blob
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryFragments {
    fragments: Vec<String>,
    sentinel: bool,
    truncated: bool,
}

impl HistoryFragments {
    /// Wrap already segmented fragments
    pub fn from_vec(fragments: Vec<String>) -> Self {
        Self {
            fragments,
            sentinel: false,
            truncated: false,
        }
    }

    /// Fragments in blob order
    pub fn as_slice(&self) -> &[String] {
        &self.fragments
    }

    /// Number of fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True if there are no fragments
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragment at `index`, if present
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fragments.get(index).map(String::as_str)
    }

    /// True if the blob was too short and only [`NO_HISTORY`] is held
    pub fn is_sentinel(&self) -> bool {
        self.sentinel
    }

    /// True if a fragment ran past the end of the blob
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Split a history blob into text fragments. Never fails.
pub fn segment(data: &[u8]) -> HistoryFragments {
    if data.len() < MIN_BLOB_LEN {
        return HistoryFragments {
            fragments: vec![NO_HISTORY.to_string()],
            sentinel: true,
            truncated: false,
        };
    }

    let mut result = HistoryFragments::default();
    let mut i = 1;
    while i < data.len() {
        if data[i - 1] != FRAGMENT_MARKER[0] || data[i] != FRAGMENT_MARKER[1] {
            i += 1;
            continue;
        }
        let start = i + 3;
        let Some(len_bytes) = data.get(i + 1..start) else {
            result.truncated = true;
            break;
        };
        let len = LittleEndian::read_i16(len_bytes);
        if len < 0 || start + len as usize > data.len() {
            result.truncated = true;
            break;
        }
        let end = start + len as usize;
        result
            .fragments
            .push(normalize_line_endings(&ascii_string(&data[start..end])));
        i = end + 1;
    }
    result
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "; ")
        .replace('\r', "; ")
        .replace('\n', "; ")
}

/// Fragment positions of the canonical history layout
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistoryLayout {
    /// Fragment count of a blob without extra acquisition groups
    pub min_fragments: usize,
    /// Fragments per extra acquisition group
    pub group_size: usize,
    /// Operator
    pub owner: usize,
    /// Sample title / description
    pub title: usize,
    /// Spectrometer model
    pub instrument_model: usize,
    /// Spectrometer serial number
    pub serial_number: usize,
    /// Acquisition software
    pub software_id: usize,
    /// Operator comments
    pub comments: usize,
    /// Sample beam position
    pub sample_beam_position: usize,
    /// Common beam depolarizer
    pub common_beam_depolarizer: usize,
    /// Attenuator settings
    pub attenuators: usize,
    /// Literal fragment that anchors the photometric parameters
    pub anchor_text: String,
    /// Number of (shifted) fragments searched for the anchor
    pub anchor_window: usize,
    /// Instrument parameters, relative to the anchor
    pub instrument_parameters_offset: usize,
    /// Bandpass, relative to the anchor
    pub bandpass_offset: usize,
}

impl Default for HistoryLayout {
    fn default() -> Self {
        Self {
            min_fragments: 39,
            group_size: 5,
            owner: 0,
            title: 4,
            instrument_model: 7,
            serial_number: 8,
            software_id: 9,
            comments: 10,
            sample_beam_position: 30,
            common_beam_depolarizer: 32,
            attenuators: 33,
            anchor_text: "UV/VIS".to_string(),
            anchor_window: 40,
            instrument_parameters_offset: 1,
            bandpass_offset: 2,
        }
    }
}

impl HistoryLayout {
    /// Layout of older firmware revisions (36 fragments minimum)
    pub fn legacy() -> Self {
        Self {
            min_fragments: 36,
            ..Self::default()
        }
    }

    /// Shift applied to every nominal position
    pub fn shift(&self, fragment_count: usize) -> usize {
        if self.group_size == 0 || fragment_count <= self.min_fragments {
            return 0;
        }
        (fragment_count - self.min_fragments) / self.group_size * self.group_size
    }
}

/// Named fields recovered from a history record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HistoryFields {
    /// Operator
    pub owner: String,
    /// Sample title
    pub title: String,
    /// Spectrometer model
    pub instrument_model: String,
    /// Spectrometer serial number
    pub serial_number: String,
    /// Acquisition software
    pub software_id: String,
    /// Operator comments
    pub comments: String,
    /// Sample beam position
    pub sample_beam_position: String,
    /// Common beam depolarizer
    pub common_beam_depolarizer: String,
    /// Attenuator settings
    pub attenuators: String,
    /// Photometric parameters after the anchor (empty without anchor)
    pub instrument_parameters: String,
    /// Bandpass after the anchor (empty without anchor)
    pub bandpass: String,
}

impl HistoryFields {
    /// Map fragment positions to fields
    pub fn from_fragments(fragments: &HistoryFragments, layout: &HistoryLayout) -> Self {
        if fragments.is_sentinel() {
            return Self::default();
        }
        let shift = layout.shift(fragments.len());
        let at = |nominal: usize| -> String {
            fragments
                .get(nominal + shift)
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };

        let mut fields = Self {
            owner: at(layout.owner),
            title: at(layout.title),
            instrument_model: at(layout.instrument_model),
            serial_number: at(layout.serial_number),
            software_id: at(layout.software_id),
            comments: at(layout.comments),
            sample_beam_position: at(layout.sample_beam_position),
            common_beam_depolarizer: at(layout.common_beam_depolarizer),
            attenuators: at(layout.attenuators),
            ..Self::default()
        };

        let anchor = (0..layout.anchor_window)
            .find(|&j| fragments.get(j + shift).map(str::trim) == Some(layout.anchor_text.as_str()));
        if let Some(anchor) = anchor {
            fields.instrument_parameters = at(anchor + layout.instrument_parameters_offset);
            fields.bandpass = at(anchor + layout.bandpass_offset);
        }
        fields
    }

    /// `model SN:serial`, or whichever part is known
    pub fn spectrometer_system(&self) -> String {
        let sn = if self.serial_number.is_empty() { "" } else { " SN:" };
        format!("{}{}{}", self.instrument_model, sn, self.serial_number)
            .trim()
            .to_string()
    }

    /// Copy every non-empty field into a metadata registry
    pub fn apply(&self, metadata: &mut Metadata) {
        metadata.set_if_present(keys::OWNER, &self.owner);
        metadata.set_if_present(keys::TITLE, &self.title);
        metadata.set_if_present(keys::SAMPLE_DESCRIPTION, &self.title);
        metadata.set_if_present(keys::SPECTROMETER_SYSTEM, &self.spectrometer_system());
        metadata.set_if_present(keys::SPECTROMETER_MODEL, &self.instrument_model);
        metadata.set_if_present(keys::SERIAL_NUMBER, &self.serial_number);
        metadata.set_if_present(keys::SOFTWARE_ID, &self.software_id);
        metadata.set_if_present(keys::COMMENTS, &self.comments);
        metadata.set_if_present(keys::INSTRUMENT_PARAMETERS, &self.instrument_parameters);
        metadata.set_if_present(keys::RESOLUTION, &self.bandpass);
        metadata.set_if_present("SampleBeamPosition", &self.sample_beam_position);
        metadata.set_if_present("CommonBeamDepolarizer", &self.common_beam_depolarizer);
        metadata.set_if_present("Attenuators", &self.attenuators);
    }
}

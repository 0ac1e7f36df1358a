//! Writers for the block file layout.
//!
//! Used to build fixtures for tests, benchmarks and the fuzzer corpus. The
//! output is byte-compatible with what [`super::Container::parse`] reads.

use super::codes::{BlockCode, MemberCode, TypeCode};
use super::history::FRAGMENT_MARKER;
use super::{DESCRIPTION_LEN, MAGIC};

/// Builds a complete container: signature, description, blocks
#[derive(Debug, Clone, Default)]
pub struct ContainerBuilder {
    description: String,
    body: Vec<u8>,
}

impl ContainerBuilder {
    /// Start a container with the given description (cut or padded to 40 bytes)
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            body: Vec::new(),
        }
    }

    /// Append a block with an arbitrary id
    pub fn block(mut self, id: i16, payload: &[u8]) -> Self {
        write_record(&mut self.body, id, payload);
        self
    }

    /// Append the main data set block
    pub fn main_block(self, members: MembersBuilder) -> Self {
        self.block(BlockCode::DSet2DC1DI.code(), &members.finish())
    }

    /// Append raw bytes, e.g. a deliberately broken record
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    /// Serialize the container
    pub fn finish(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MAGIC.len() + DESCRIPTION_LEN + self.body.len());
        out.extend_from_slice(MAGIC);
        let mut description = self.description.into_bytes();
        description.resize(DESCRIPTION_LEN, 0);
        out.extend_from_slice(&description);
        out.extend_from_slice(&self.body);
        out
    }
}

/// Builds the typed member stream of one block
#[derive(Debug, Clone, Default)]
pub struct MembersBuilder {
    body: Vec<u8>,
}

impl MembersBuilder {
    /// Empty member stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member with explicit id and type code
    pub fn member(mut self, id: i16, type_code: i16, data: &[u8]) -> Self {
        let mut payload = Vec::with_capacity(2 + data.len());
        payload.extend_from_slice(&type_code.to_le_bytes());
        payload.extend_from_slice(data);
        write_record(&mut self.body, id, &payload);
        self
    }

    /// `DataType` as u16
    pub fn data_type(self, value: u16) -> Self {
        self.member(
            MemberCode::DataType.code(),
            TypeCode::UInt.code(),
            &value.to_le_bytes(),
        )
    }

    /// Abscissa range
    pub fn abscissa_range(self, start: f64, end: f64) -> Self {
        self.member(
            MemberCode::AbscissaRange.code(),
            TypeCode::CvCoOrdRange.code(),
            &f64_pair(start, end),
        )
    }

    /// Ordinate range
    pub fn ordinate_range(self, min: f64, max: f64) -> Self {
        self.member(
            MemberCode::OrdinateRange.code(),
            TypeCode::CvCoOrdRange.code(),
            &f64_pair(min, max),
        )
    }

    /// Abscissa step
    pub fn interval(self, step: f64) -> Self {
        self.member(
            MemberCode::Interval.code(),
            TypeCode::CvCoOrd.code(),
            &step.to_le_bytes(),
        )
    }

    /// Declared point count
    pub fn num_points(self, n: i32) -> Self {
        self.member(
            MemberCode::NumPoints.code(),
            TypeCode::Long.code(),
            &n.to_le_bytes(),
        )
    }

    /// Any length-prefixed string member
    pub fn string(self, id: MemberCode, text: &str) -> Self {
        self.member(id.code(), TypeCode::Char.code(), &string_payload(text))
    }

    /// Y values with a correct 4-byte size header
    pub fn y_data(self, values: &[f64]) -> Self {
        let mut data = Vec::with_capacity(4 + values.len() * 8);
        data.extend_from_slice(&((values.len() * 8) as i32).to_le_bytes());
        for v in values {
            data.extend_from_slice(&v.to_le_bytes());
        }
        self.member(MemberCode::Data.code(), TypeCode::CvCoOrdArray.code(), &data)
    }

    /// Stored checksum
    pub fn checksum(self, value: u32) -> Self {
        self.member(
            MemberCode::Checksum.code(),
            TypeCode::ULong.code(),
            &value.to_le_bytes(),
        )
    }

    /// History record (type 122)
    pub fn history(self, blob: &[u8]) -> Self {
        self.member(
            MemberCode::HistoryRecord.code(),
            BlockCode::InstrHdrHistoryRecord.code(),
            blob,
        )
    }

    /// Append raw bytes, e.g. a deliberately broken record
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    /// Serialize the member stream
    pub fn finish(self) -> Vec<u8> {
        self.body
    }
}

/// Encode text fragments as a history blob, with a little filler between them
pub fn history_blob<S: AsRef<str>>(fragments: &[S]) -> Vec<u8> {
    let mut out = vec![0u8; 4];
    for fragment in fragments {
        let text = fragment.as_ref().as_bytes();
        out.extend_from_slice(&FRAGMENT_MARKER);
        out.extend_from_slice(&(text.len() as i16).to_le_bytes());
        out.extend_from_slice(text);
        out.extend_from_slice(&[0, 0]);
    }
    out
}

/// i16 length prefix followed by the text bytes
pub fn string_payload(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(2 + bytes.len());
    out.extend_from_slice(&(bytes.len() as i16).to_le_bytes());
    out.extend_from_slice(bytes);
    out
}

fn f64_pair(a: f64, b: f64) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&a.to_le_bytes());
    out[8..].copy_from_slice(&b.to_le_bytes());
    out
}

fn write_record(out: &mut Vec<u8>, id: i16, payload: &[u8]) {
    out.extend_from_slice(&id.to_le_bytes());
    out.extend_from_slice(&(payload.len() as i32).to_le_bytes());
    out.extend_from_slice(payload);
}

/// Small but complete file: 400..=404 nm, five points, name and units set
pub fn sample_file() -> Vec<u8> {
    ContainerBuilder::new("sample spectrum")
        .block(BlockCode::UVInstrumentHeader.code(), &[0u8; 8])
        .main_block(
            MembersBuilder::new()
                .data_type(1)
                .abscissa_range(400.0, 404.0)
                .ordinate_range(0.1, 0.5)
                .interval(1.0)
                .num_points(5)
                .string(MemberCode::XAxisLabel, "nm")
                .string(MemberCode::YAxisLabel, "A")
                .y_data(&[0.1, 0.2, 0.5, 0.3, 0.2])
                .string(MemberCode::Name, "Holmium")
                .checksum(0xDEADBEEF),
        )
        .finish()
}

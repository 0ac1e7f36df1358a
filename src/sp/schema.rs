//! Member schema of the main data set block.
//!
//! A closed table maps `(member id, type code)` to a pure decode function.
//! Records that are not in the table are never trusted: an unknown id or an
//! unexpected type code produces a warning and the record is skipped.

use byteorder::{ByteOrder, LittleEndian};
use log::debug;

use crate::outcome::{WarningKind, Warnings};

use super::codes::{describe, BlockCode, MemberCode, TypeCode};
use super::history::{segment, HistoryFragments};
use super::{ascii_string, FieldError, TypedBlock};

/// Offset of the first f64 inside the Y data member
pub const DATA_HEADER_LEN: usize = 4;

const F64_LEN: usize = 8;

/// A decoded member value
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Data type discriminator
    DataType(u16),
    /// First and last abscissa value
    AbscissaRange(f64, f64),
    /// Minimum and maximum ordinate value
    OrdinateRange(f64, f64),
    /// Abscissa step
    Interval(f64),
    /// Declared number of points
    NumPoints(i32),
    /// Sampling method text
    SamplingMethod(String),
    /// x axis label
    XAxisLabel(String),
    /// y axis label
    YAxisLabel(String),
    /// File type tag
    FileType(String),
    /// Y values
    Data(YData),
    /// Data set name
    Name(String),
    /// Data set alias
    Alias(String),
    /// Stored checksum
    Checksum(u32),
    /// Segmented history record
    History(HistoryFragments),
}

/// Y array plus the byte count the producer embedded in front of it
#[derive(Debug, Clone, PartialEq)]
pub struct YData {
    /// Decoded values
    pub values: Vec<f64>,
    /// First four bytes of the member, read as the array size in bytes
    pub embedded_len: i32,
    /// Bytes after the last whole f64
    pub trailing_bytes: usize,
}

type DecodeFn = fn(&[u8]) -> Result<Field, FieldError>;

/// One row of the member schema
pub struct SchemaEntry {
    /// Member id
    pub member: MemberCode,
    /// Type code the member must carry
    pub type_code: i16,
    /// Decoder for the member data
    pub decode: DecodeFn,
}

/// The member schema of the `DSet2DC1DI` block
pub static SCHEMA: &[SchemaEntry] = &[
    SchemaEntry {
        member: MemberCode::DataType,
        type_code: TypeCode::UInt as i16,
        decode: |d| Ok(Field::DataType(read_u16(d, 0)?)),
    },
    SchemaEntry {
        member: MemberCode::AbscissaRange,
        type_code: TypeCode::CvCoOrdRange as i16,
        decode: |d| Ok(Field::AbscissaRange(read_f64(d, 0)?, read_f64(d, F64_LEN)?)),
    },
    SchemaEntry {
        member: MemberCode::OrdinateRange,
        type_code: TypeCode::CvCoOrdRange as i16,
        decode: |d| Ok(Field::OrdinateRange(read_f64(d, 0)?, read_f64(d, F64_LEN)?)),
    },
    SchemaEntry {
        member: MemberCode::Interval,
        type_code: TypeCode::CvCoOrd as i16,
        decode: |d| Ok(Field::Interval(read_f64(d, 0)?)),
    },
    SchemaEntry {
        member: MemberCode::NumPoints,
        type_code: TypeCode::Long as i16,
        decode: |d| Ok(Field::NumPoints(read_i32(d, 0)?)),
    },
    SchemaEntry {
        member: MemberCode::SamplingMethod,
        type_code: TypeCode::Char as i16,
        decode: |d| Ok(Field::SamplingMethod(read_string(d)?)),
    },
    SchemaEntry {
        member: MemberCode::XAxisLabel,
        type_code: TypeCode::Char as i16,
        decode: |d| Ok(Field::XAxisLabel(read_string(d)?)),
    },
    SchemaEntry {
        member: MemberCode::YAxisLabel,
        type_code: TypeCode::Char as i16,
        decode: |d| Ok(Field::YAxisLabel(read_string(d)?)),
    },
    SchemaEntry {
        member: MemberCode::FileType,
        type_code: TypeCode::Char as i16,
        decode: |d| Ok(Field::FileType(read_string(d)?)),
    },
    SchemaEntry {
        member: MemberCode::Data,
        type_code: TypeCode::CvCoOrdArray as i16,
        decode: |d| Ok(Field::Data(read_y_data(d)?)),
    },
    SchemaEntry {
        member: MemberCode::Name,
        type_code: TypeCode::Char as i16,
        decode: |d| Ok(Field::Name(read_string(d)?)),
    },
    SchemaEntry {
        member: MemberCode::Alias,
        type_code: TypeCode::Char as i16,
        decode: |d| Ok(Field::Alias(read_string(d)?)),
    },
    SchemaEntry {
        member: MemberCode::Checksum,
        type_code: TypeCode::ULong as i16,
        decode: |d| Ok(Field::Checksum(read_u32(d, 0)?)),
    },
    SchemaEntry {
        member: MemberCode::HistoryRecord,
        type_code: BlockCode::InstrHdrHistoryRecord as i16,
        decode: |d| Ok(Field::History(segment(d))),
    },
    SchemaEntry {
        member: MemberCode::HistoryRecord,
        type_code: BlockCode::HistoryRecord as i16,
        decode: |d| Ok(Field::History(segment(d))),
    },
];

/// Members that are recognised but carry nothing we convert
const IGNORED: &[MemberCode] = &[
    MemberCode::XAxisUnitType,
    MemberCode::YAxisUnitType,
    MemberCode::InvalidRegion,
    MemberCode::VXIRAccyHdr,
    MemberCode::VXIRQualHdr,
    MemberCode::EventMarkers,
];

/// Result of looking a member up in the schema
pub enum Lookup {
    /// The pair is in the schema
    Decode(&'static SchemaEntry),
    /// The id is known but the type code is not the expected one
    TypeMismatch,
    /// The id is known and deliberately not converted
    Ignored,
    /// The id is not part of the format
    Unknown,
}

/// Find the schema row for a `(member id, type code)` pair
pub fn lookup(id: i16, type_code: i16) -> Lookup {
    let mut id_known = false;
    for entry in SCHEMA {
        if entry.member.code() != id {
            continue;
        }
        if entry.type_code == type_code {
            return Lookup::Decode(entry);
        }
        id_known = true;
    }
    if id_known {
        return Lookup::TypeMismatch;
    }
    match MemberCode::from_code(id) {
        Some(code) if IGNORED.contains(&code) => Lookup::Ignored,
        _ => Lookup::Unknown,
    }
}

/// Decode one member, recording a warning for anything unusable
pub fn dispatch(member: &TypedBlock<'_>, warnings: &mut Warnings) -> Option<Field> {
    match lookup(member.id, member.type_code) {
        Lookup::Decode(entry) => match (entry.decode)(member.data) {
            Ok(field) => Some(field),
            Err(e) => {
                warnings.push(
                    WarningKind::MalformedField,
                    format!("member {}: {}", entry.member, e),
                );
                None
            }
        },
        Lookup::TypeMismatch => {
            warnings.push(
                WarningKind::TypeMismatch,
                format!(
                    "member {} has unexpected type {}",
                    describe(member.id),
                    describe(member.type_code)
                ),
            );
            None
        }
        Lookup::Ignored => {
            debug!("skipping member {}", describe(member.id));
            None
        }
        Lookup::Unknown => {
            warnings.push(
                WarningKind::UnknownField,
                format!("unknown member id {} ({} bytes)", member.id, member.data.len()),
            );
            None
        }
    }
}

fn slice_at(data: &[u8], offset: usize, len: usize) -> Result<&[u8], FieldError> {
    data.get(offset..offset + len).ok_or(FieldError::TooShort {
        needed: offset + len,
        found: data.len(),
    })
}

fn read_u16(data: &[u8], offset: usize) -> Result<u16, FieldError> {
    slice_at(data, offset, 2).map(LittleEndian::read_u16)
}

fn read_i32(data: &[u8], offset: usize) -> Result<i32, FieldError> {
    slice_at(data, offset, 4).map(LittleEndian::read_i32)
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32, FieldError> {
    slice_at(data, offset, 4).map(LittleEndian::read_u32)
}

fn read_f64(data: &[u8], offset: usize) -> Result<f64, FieldError> {
    slice_at(data, offset, F64_LEN).map(LittleEndian::read_f64)
}

/// i16 length prefix followed by that many ASCII bytes
pub fn read_string(data: &[u8]) -> Result<String, FieldError> {
    let declared = slice_at(data, 0, 2).map(LittleEndian::read_i16)?;
    let available = data.len() - 2;
    if declared < 0 || declared as usize > available {
        return Err(FieldError::BadStringLength {
            declared,
            available,
        });
    }
    Ok(ascii_string(&data[2..2 + declared as usize]))
}

/// f64 run after a 4-byte header; count = (len - 4) / 8
pub fn read_y_data(data: &[u8]) -> Result<YData, FieldError> {
    let embedded_len = read_i32(data, 0)?;
    let body = &data[DATA_HEADER_LEN..];
    let values = body
        .chunks_exact(F64_LEN)
        .map(LittleEndian::read_f64)
        .collect();
    Ok(YData {
        values,
        embedded_len,
        trailing_bytes: body.len() % F64_LEN,
    })
}

//! Length-prefixed record framing.
//!
//! Both the container and the main block payload are flat sequences of
//! records:
//!
//! ```text
//! block:  id (i16) | length (i32) | payload (length bytes)
//! member: id (i16) | length (i32) | type (i16) | data (length - 2 bytes)
//! ```
//!
//! Decoding stops at the first record that does not fit in the remaining
//! bytes. Everything decoded before it is returned together with a
//! [`Truncation`] describing where the stream broke off.

use std::fmt;
use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use log::debug;

use super::codes::{describe, BlockCode};
use super::{ascii_string, SpError};

/// File signature
pub const MAGIC: &[u8; 4] = b"PEPE";

/// Length of the free-text description after the signature
pub const DESCRIPTION_LEN: usize = 40;

const RECORD_HEADER_LEN: usize = 6;
const TYPE_CODE_LEN: usize = 2;

/// One top-level record of the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Block id
    pub id: i16,
    /// Length field as stored in the file
    pub declared_length: i32,
    /// Exactly `declared_length` bytes
    pub payload: &'a [u8],
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block[{} {}]", describe(self.id), self.payload.len())
    }
}

/// A record whose payload starts with a type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedBlock<'a> {
    /// Member id
    pub id: i16,
    /// Length field as stored in the file (type code included)
    pub declared_length: i32,
    /// Type discriminator
    pub type_code: i16,
    /// Payload after the type discriminator
    pub data: &'a [u8],
}

impl fmt::Display for TypedBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TypedBlock[{} {} {}]",
            describe(self.id),
            describe(self.type_code),
            self.data.len()
        )
    }
}

/// Where and why a record stream stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    /// Offset of the offending record header within its stream
    pub offset: usize,
    /// Length the record declared (`None` if the header itself was cut)
    pub declared: Option<i32>,
    /// Bytes left after the record header
    pub available: usize,
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.declared {
            Some(len) => write!(
                f,
                "record at offset {} declares {} bytes but only {} remain",
                self.offset, len, self.available
            ),
            None => write!(
                f,
                "incomplete record header at offset {} ({} bytes left)",
                self.offset, self.available
            ),
        }
    }
}

/// Records decoded from one stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framed<T> {
    /// Every record fully contained in the stream
    pub records: Vec<T>,
    /// Set if decoding stopped before the end of the stream
    pub truncation: Option<Truncation>,
}

pub(crate) fn ensure_little_endian() -> Result<(), SpError> {
    if cfg!(target_endian = "big") {
        return Err(SpError::UnsupportedArchitecture);
    }
    Ok(())
}

/// Read the `(id, length, body)` triple at the cursor, or report truncation
fn next_record<'a>(
    cursor: &mut Cursor<&'a [u8]>,
    min_length: i32,
) -> Result<(i16, i32, &'a [u8]), Truncation> {
    let bytes: &'a [u8] = *cursor.get_ref();
    let offset = cursor.position() as usize;
    let remaining = bytes.len() - offset;
    if remaining < RECORD_HEADER_LEN {
        return Err(Truncation {
            offset,
            declared: None,
            available: remaining,
        });
    }

    // Both reads are covered by the length check above
    let header = cursor
        .read_i16::<LittleEndian>()
        .and_then(|id| cursor.read_i32::<LittleEndian>().map(|len| (id, len)));
    let (id, length) = header.map_err(|_| Truncation {
        offset,
        declared: None,
        available: remaining,
    })?;

    let start = offset + RECORD_HEADER_LEN;
    let available = bytes.len() - start;
    if length < min_length || length as usize > available {
        return Err(Truncation {
            offset,
            declared: Some(length),
            available,
        });
    }
    let end = start + length as usize;
    cursor.set_position(end as u64);
    Ok((id, length, &bytes[start..end]))
}

/// Decode a flat sequence of length-prefixed blocks
pub fn decode_blocks(bytes: &[u8]) -> Result<Framed<Block<'_>>, SpError> {
    ensure_little_endian()?;
    let mut cursor = Cursor::new(bytes);
    let mut records = Vec::new();
    let mut truncation = None;

    while (cursor.position() as usize) < bytes.len() {
        match next_record(&mut cursor, 0) {
            Ok((id, declared_length, payload)) => {
                let block = Block {
                    id,
                    declared_length,
                    payload,
                };
                debug!("{}", block);
                records.push(block);
            }
            Err(t) => {
                truncation = Some(t);
                break;
            }
        }
    }

    Ok(Framed {
        records,
        truncation,
    })
}

/// Decode the typed member records inside one block payload
pub fn decode_members(payload: &[u8]) -> Result<Framed<TypedBlock<'_>>, SpError> {
    ensure_little_endian()?;
    let mut cursor = Cursor::new(payload);
    let mut records = Vec::new();
    let mut truncation = None;

    while (cursor.position() as usize) < payload.len() {
        match next_record(&mut cursor, TYPE_CODE_LEN as i32) {
            Ok((id, declared_length, body)) => {
                let (type_bytes, data) = body.split_at(TYPE_CODE_LEN);
                let type_code = i16::from_le_bytes([type_bytes[0], type_bytes[1]]);
                let member = TypedBlock {
                    id,
                    declared_length,
                    type_code,
                    data,
                };
                debug!("{}", member);
                records.push(member);
            }
            Err(t) => {
                truncation = Some(t);
                break;
            }
        }
    }

    Ok(Framed {
        records,
        truncation,
    })
}

/// A parsed block file: signature, description and top-level blocks
#[derive(Debug, Clone)]
pub struct Container<'a> {
    /// Free-text description (NUL padding and surrounding blanks removed)
    pub description: String,
    /// Top-level blocks in file order
    pub blocks: Vec<Block<'a>>,
    /// Set if the block stream stopped early
    pub truncation: Option<Truncation>,
}

impl<'a> Container<'a> {
    /// Validate the signature and decode the block stream
    pub fn parse(bytes: &'a [u8]) -> Result<Self, SpError> {
        ensure_little_endian()?;
        let signature = &bytes[..bytes.len().min(MAGIC.len())];
        if signature != MAGIC {
            return Err(SpError::InvalidMagic {
                found: ascii_string(signature),
            });
        }

        let rest = &bytes[MAGIC.len()..];
        let description_len = rest.len().min(DESCRIPTION_LEN);
        let description = ascii_string(&rest[..description_len])
            .trim_matches(|c: char| c == '\0' || c.is_whitespace())
            .to_string();

        let framed = decode_blocks(&rest[description_len..])?;
        Ok(Self {
            description,
            blocks: framed.records,
            truncation: framed.truncation,
        })
    }

    /// First block with the given id
    pub fn find(&self, id: BlockCode) -> Option<&Block<'a>> {
        self.blocks.iter().find(|b| b.id == id.code())
    }
}

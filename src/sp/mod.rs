//! # Binary Block File Support
//!
//! Reader for the vendor's binary spectrum container (`*.sp`).
//!
//! ## Layout
//!
//! ```text
//! "PEPE" | description (40 bytes ASCII) | block | block | ...
//! ```
//!
//! The block with id 120 (`DSet2DC1DI`) holds the spectrum as a sequence of
//! typed member records (abscissa range, interval, axis labels, the Y
//! array, name/alias, checksum and an optional history record).
//!
//! ## Decoding Pipeline
//!
//! 1. [`Container::parse`] checks the signature and frames the top-level
//!    blocks ([`decode_blocks`]).
//! 2. [`decode_members`] frames the typed members of the main block.
//! 3. [`schema::dispatch`] maps each `(id, type)` pair to a [`schema::Field`].
//! 4. [`history`] recovers free-text metadata from the history record.
//! 5. [`SpRecord::to_spectrum`] assembles the [`crate::spectrum::Spectrum`].
//!
//! Truncated streams and undecodable fields become warnings on the returned
//! [`crate::outcome::ParseOutcome`]; only a bad signature, a big-endian
//! host or a missing main block are errors.

mod block;
pub mod codes;
#[doc(hidden)]
pub mod encode;
mod error;
pub mod history;
mod reader;
mod record;
pub mod schema;


pub use block::{
    decode_blocks, decode_members, Block, Container, Framed, Truncation, TypedBlock,
    DESCRIPTION_LEN, MAGIC,
};
pub use error::{FieldError, SpError};
pub use history::{HistoryFields, HistoryFragments, HistoryLayout};
pub use reader::{file_creation_time, RecordSummary, SpInspection, SpReader};
pub use record::SpRecord;

/// Decode bytes as ASCII, replacing anything above 0x7F with `?`
pub(crate) fn ascii_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}

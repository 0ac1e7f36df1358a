//! # Spectrum Writers
//!
//! Text renderers for a [`crate::spectrum::Spectrum`].
//!
//! ## Formats
//!
//! - [`JcampWriter`]: JCAMP-DX 4.24. The header is the metadata registry in
//!   interchange mode. Unit symbols go through [`translate_unit`], and the
//!   data block grammar follows the spacing classification.
//! - [`PlainWriter`]: `label = value` header, `@@@@` and `x y` lines. It
//!   reads back through [`crate::ascii::LegacyReader`].
//! - [`CsvWriter`]: unit header row followed by `x,y` rows.
//!
//! Every writer works on a copy of the metadata with the derived fields
//! filled in ([`crate::spectrum::Spectrum::computed_metadata`]); rendering
//! never changes the spectrum.

mod delimited;
mod error;
mod jcamp;
mod plain;
mod units;

#[cfg(test)]
mod tests;

pub use delimited::CsvWriter;
pub use error::WriterError;
pub use jcamp::{JcampWriter, JCAMP_VERSION};
pub use plain::PlainWriter;
pub use units::{translate_unit, ARBITRARY_UNITS};

use crate::spectrum::Spectrum;

/// A text format a spectrum can be rendered to
pub trait SpectrumWriter {
    /// Render the whole document
    fn render(&self, spectrum: &Spectrum) -> Result<String, WriterError>;

    /// File extension of the output, without dot
    fn extension(&self) -> &'static str;
}

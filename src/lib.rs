//! # specpod - PerkinElmer Spectrum File Conversion
//!
//! `specpod` reads the spectrum files written by PerkinElmer instrument
//! software and renders them as JCAMP-DX 4.24, a plain `label = value`
//! text layout, or CSV.
//!
//! ## Supported Inputs
//!
//! - **Binary block files** (`*.sp`): a `PEPE` signature, a 40-byte
//!   description and a stream of id/length framed blocks. The main block
//!   holds typed member records (abscissa range, interval, Y array, axis
//!   labels, name, checksum) and an undelimited history record that carries
//!   operator and instrument text.
//! - **PE ASCII exports** (`*.asc`): fixed-offset header lines, `#HDR`,
//!   `#GR` and `#DATA` markers, versions 1.60 and 4.00.
//! - **Legacy key/value text** (`*.spc`): `label = value` header, `@@@@`
//!   separator, `x y` data.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use specpod::convert::{convert_file, ConvertOptions, OutputFormat};
//!
//! let options = ConvertOptions::new(OutputFormat::Jcamp);
//! let outcome = convert_file("holmium.sp", &options)?;
//! println!("{} points, {} warnings", outcome.points, outcome.warnings.len());
//! # Ok::<(), specpod::convert::ConvertError>(())
//! ```
//!
//! ## Error Model
//!
//! Instrument files are often short or partly corrupt. Structural failures
//! are errors; truncated record streams and undecodable fields are
//! collected as warnings in a [`outcome::ParseOutcome`], which callers
//! either accept or turn into an error with
//! [`outcome::ParseOutcome::into_strict`].
//!
//! ## Architecture
//!
//! - [`sp`]: binary block container, member schema and history recovery
//! - [`ascii`]: text dialect readers
//! - [`spectrum`]: point list with running statistics and spacing class
//! - [`metadata`]: ordered registry of interchange records
//! - [`writer`]: JCAMP-DX, plain and CSV renderers
//! - [`convert`]: format detection, single-file and batch conversion

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod convert;
pub mod metadata;
pub mod outcome;
pub mod sp;
pub mod spectrum;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::ascii::{LegacyReader, PeAsciiReader, TextEncoding, TextFile};
    pub use crate::convert::{
        convert_batch, convert_file, read_spectrum, BatchReport, ConvertError, ConvertOptions,
        InputFormat, OutputFormat,
    };
    pub use crate::metadata::{keys, Metadata, RenderOptions};
    pub use crate::outcome::{ParseOutcome, ParseWarning, WarningKind};
    pub use crate::sp::{HistoryLayout, SpError, SpReader};
    pub use crate::spectrum::{SortOrder, SpectralPoint, SpectralSpacing, SpectralType, Spectrum};
    pub use crate::writer::{CsvWriter, JcampWriter, PlainWriter, SpectrumWriter, WriterError};
}

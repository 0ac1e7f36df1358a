//! # Text Export Support
//!
//! Readers for the two text dialects produced by the instrument software:
//!
//! - [`PeAsciiReader`]: fixed-offset export with a 72-character signature
//!   line, `#HDR`/`#GR`/`#DATA` markers and header fields at fixed lines.
//! - [`LegacyReader`]: free `label = value` header, an `@@@@` separator and
//!   two-column data.
//!
//! Both work on a [`TextFile`], which decodes bytes under a selectable
//! [`TextEncoding`] and splits on any line terminator.

mod error;
pub mod legacy;
mod loader;
pub mod pe;


pub use error::AsciiError;
pub use legacy::LegacyReader;
pub use loader::{TextEncoding, TextFile};
pub use pe::{PeAsciiReader, PeSignature};

const DATA_SEPARATORS: [char; 5] = [' ', '=', ';', ',', '\t'];

/// Parse a number the way the exports write them (invariant culture)
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Split an `x<sep>y` line; exactly two numeric tokens are required
pub(crate) fn parse_data_line(line: &str) -> Option<(f64, f64)> {
    let mut tokens = line.split(DATA_SEPARATORS).filter(|t| !t.is_empty());
    let x = parse_number(tokens.next()?)?;
    let y = parse_number(tokens.next()?)?;
    match tokens.next() {
        Some(_) => None,
        None => Some((x, y)),
    }
}

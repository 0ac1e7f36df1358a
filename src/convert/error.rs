use std::path::PathBuf;

use thiserror::Error;

use crate::ascii::AsciiError;
use crate::sp::SpError;
use crate::writer::WriterError;

/// Errors that abort the conversion of one file
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Strict mode and the reader recorded warnings
    #[error("{count} warning(s) in strict mode, first: {first}")]
    Strict {
        /// Number of warnings
        count: usize,
        /// First warning, formatted
        first: String,
    },

    /// Binary container failure
    #[error(transparent)]
    Sp(#[from] SpError),

    /// Text export failure
    #[error(transparent)]
    Ascii(#[from] AsciiError),

    /// Rendering failure
    #[error(transparent)]
    Writer(#[from] WriterError),

    /// Neither content nor extension identify the input
    #[error("Cannot determine the format of {}", path.display())]
    UnknownFormat {
        /// The input file
        path: PathBuf,
    },

    /// Output path equals the input path
    #[error("Refusing to overwrite input file {}", path.display())]
    WouldOverwrite {
        /// The input file
        path: PathBuf,
    },

    /// Another input of the same batch already wrote this output
    #[error("Output {} was already written by another input", path.display())]
    OutputCollision {
        /// The contested output file
        path: PathBuf,
    },

    /// Unknown output format name
    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

use thiserror::Error;

/// Errors that abort reading a block file
#[derive(Error, Debug)]
pub enum SpError {
    /// The file does not start with the block file signature
    #[error("Not a block file: expected signature \"PEPE\", found {found:?}")]
    InvalidMagic {
        /// The bytes found instead, as text
        found: String,
    },

    /// Fixed-width fields are reinterpreted in place, which needs a
    /// little-endian host
    #[error("Big-endian architectures are not supported")]
    UnsupportedArchitecture,

    /// The mandatory data set block is absent
    #[error("File does not contain a {name} block (id {id})")]
    MissingMainBlock {
        /// Expected block id
        id: i16,
        /// Expected block name
        name: &'static str,
    },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that leave a single member field undecoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Payload shorter than the fixed-width value
    #[error("payload too short: need {needed} bytes, found {found}")]
    TooShort {
        /// Bytes required
        needed: usize,
        /// Bytes present
        found: usize,
    },

    /// String length prefix is negative or runs past the payload
    #[error("bad string length {declared} (payload holds {available} bytes)")]
    BadStringLength {
        /// Declared text length
        declared: i16,
        /// Bytes available after the prefix
        available: usize,
    },
}

use thiserror::Error;

/// Errors that abort reading a text export
#[derive(Error, Debug)]
pub enum AsciiError {
    /// The file holds no text at all
    #[error("File is empty")]
    Empty,

    /// The signature line or the section layout does not match the dialect
    #[error("Invalid signature: {reason}")]
    InvalidSignature {
        /// What did not match
        reason: String,
    },

    /// No `@@@@` line separates header and data
    #[error("Missing data separator \"@@@@\"")]
    MissingSeparator,

    /// Unknown text encoding name
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

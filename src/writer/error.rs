/// Errors that can occur while rendering a spectrum
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the CSV encoder
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A scaling factor that cannot divide the data
    #[error("Invalid factor for {axis}: {value}")]
    InvalidFactor {
        /// Axis the factor applies to
        axis: &'static str,
        /// The rejected value
        value: f64,
    },
}

use crate::spectrum::Spectrum;

use super::{SpectrumWriter, WriterError};

/// Renders a two-column CSV table with the unit names as header row
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter;

impl CsvWriter {
    /// Comma-separated writer
    pub fn new() -> Self {
        Self
    }

    /// Render one spectrum
    pub fn render(&self, spectrum: &Spectrum) -> Result<String, WriterError> {
        let mut writer = ::csv::WriterBuilder::new()
            .terminator(::csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record([spectrum.x_unit_name(), spectrum.y_unit_name()])?;
        for p in spectrum.points() {
            writer.write_record([p.x().to_string(), p.y().to_string()])?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl SpectrumWriter for CsvWriter {
    fn render(&self, spectrum: &Spectrum) -> Result<String, WriterError> {
        CsvWriter::render(self, spectrum)
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}

use log::debug;

use crate::metadata::{keys, truncate_line, RenderOptions};
use crate::spectrum::{SpectralSpacing, Spectrum};

use super::{translate_unit, SpectrumWriter, WriterError};

/// Version written to the `##JCAMP-DX=` record
pub const JCAMP_VERSION: &str = "4.24";

const FIXED_GRID_TAG: &str = "##XYDATA= (X++(Y..Y))";
const PAIRS_TAG: &str = "##XYPOINTS= (XY..XY)";
const END_TAG: &str = "##END=";

/// Renders JCAMP-DX 4.24 text
#[derive(Debug, Clone)]
pub struct JcampWriter {
    options: RenderOptions,
    x_factor: f64,
    y_factor: f64,
}

impl Default for JcampWriter {
    fn default() -> Self {
        Self {
            options: RenderOptions::default(),
            x_factor: 1.0,
            y_factor: 1.0,
        }
    }
}

impl JcampWriter {
    /// Writer with unit factors, justified labels and 80-column lines
    pub fn new() -> Self {
        Self::default()
    }

    /// Header layout options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Data values are divided by these factors
    pub fn with_factors(mut self, x_factor: f64, y_factor: f64) -> Self {
        self.x_factor = x_factor;
        self.y_factor = y_factor;
        self
    }

    fn check_factors(&self) -> Result<(), WriterError> {
        for (axis, value) in [("x", self.x_factor), ("y", self.y_factor)] {
            if value == 0.0 || !value.is_finite() {
                return Err(WriterError::InvalidFactor { axis, value });
            }
        }
        Ok(())
    }

    /// Render the header and data block of one spectrum
    pub fn render(&self, spectrum: &Spectrum) -> Result<String, WriterError> {
        self.check_factors()?;

        let mut md = spectrum.computed_metadata();
        md.set(keys::JCAMP_DX, JCAMP_VERSION);
        md.set(keys::X_UNITS, translate_unit(spectrum.x_unit_name()));
        md.set(keys::Y_UNITS, translate_unit(spectrum.y_unit_name()));
        md.set(keys::X_FACTOR, self.x_factor.to_string());
        md.set(keys::Y_FACTOR, self.y_factor.to_string());

        let mut out = md.render_interchange(&self.options);

        let (tag, separator) = match spectrum.spacing() {
            SpectralSpacing::FixedSpacing => (FIXED_GRID_TAG, " "),
            SpectralSpacing::VariableSpacing | SpectralSpacing::Unknown => (PAIRS_TAG, ", "),
        };
        if !spectrum.is_empty() {
            debug!("writing {} points under {}", spectrum.len(), tag);
            out.push_str(&truncate_line(tag, self.options.max_line_length));
            out.push('\n');
            for p in spectrum.points() {
                let x = p.x() / self.x_factor;
                let y = p.y() / self.y_factor;
                out.push_str(&format!("{}{}{}\n", x, separator, y));
            }
        }
        out.push_str(END_TAG);
        out.push('\n');
        Ok(out)
    }
}

impl SpectrumWriter for JcampWriter {
    fn render(&self, spectrum: &Spectrum) -> Result<String, WriterError> {
        JcampWriter::render(self, spectrum)
    }

    fn extension(&self) -> &'static str {
        "jdx"
    }
}

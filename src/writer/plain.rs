use crate::ascii::legacy::{banner, SEPARATOR};
use crate::metadata::{keys, RenderOptions};
use crate::spectrum::Spectrum;

use super::{SpectrumWriter, WriterError};

/// Renders the legacy key/value layout: header, `@@@@`, `x y` lines
#[derive(Debug, Clone, Default)]
pub struct PlainWriter {
    options: RenderOptions,
}

impl PlainWriter {
    /// Writer with justified labels
    pub fn new() -> Self {
        Self::default()
    }

    /// Header layout options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Render one spectrum; never fails
    pub fn render(&self, spectrum: &Spectrum) -> String {
        let mut out = String::new();
        if let Some(line) = banner(spectrum.spectral_type) {
            out.push_str(line);
            out.push('\n');
        }
        let md = spectrum.computed_metadata();
        out.push_str(&md.render_plain_except(&self.options, keys::INTERCHANGE_ONLY));
        out.push_str(SEPARATOR);
        out.push('\n');
        for p in spectrum.points() {
            out.push_str(&p.to_line(" "));
            out.push('\n');
        }
        out
    }
}

impl SpectrumWriter for PlainWriter {
    fn render(&self, spectrum: &Spectrum) -> Result<String, WriterError> {
        Ok(PlainWriter::render(self, spectrum))
    }

    fn extension(&self) -> &'static str {
        "spc"
    }
}

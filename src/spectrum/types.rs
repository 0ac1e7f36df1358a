use serde::{Deserialize, Serialize};

/// Order the points of a spectrum are kept in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Insertion order
    None,
    /// Increasing x
    #[default]
    Ascending,
    /// Decreasing x
    Descending,
}

/// Classification of the x-axis sampling grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralSpacing {
    /// Fewer than three points
    Unknown,
    /// Uniform grid, rendered as `##XYDATA= (X++(Y..Y))`
    FixedSpacing,
    /// Irregular grid, rendered as `##XYPOINTS= (XY..XY)`
    VariableSpacing,
}

/// Kind of spectroscopy the data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpectralType {
    /// Not known
    #[default]
    Unknown,
    /// Raman scattering
    Raman,
    /// Infrared absorption
    Infrared,
    /// UV/VIS/NIR photometry
    UvVis,
    /// Nuclear magnetic resonance
    Nmr,
    /// Mass spectrometry
    Mass,
}

impl SpectralType {
    /// Value of the JCAMP-DX `##DATA TYPE=` record
    pub fn jcamp_data_type(&self) -> &'static str {
        match self {
            SpectralType::Unknown => "",
            SpectralType::Raman => "RAMAN SPECTRUM",
            SpectralType::Infrared => "INFRARED SPECTRUM",
            SpectralType::UvVis => "UV/VIS SPECTRUM",
            SpectralType::Nmr => "NMR SPECTRUM",
            SpectralType::Mass => "MASS SPECTRUM",
        }
    }
}

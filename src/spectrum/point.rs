use std::cmp::Ordering;
use std::fmt;

/// One (x, y) sample of a spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPoint {
    x: f64,
    y: f64,
}

impl SpectralPoint {
    /// Create a point; NaN components are allowed but make it invalid
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Abscissa value
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Ordinate value
    pub fn y(&self) -> f64 {
        self.y
    }

    /// False if either component is NaN
    pub fn is_valid(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }

    /// Total order on x only
    pub fn cmp_x(&self, other: &Self) -> Ordering {
        self.x.total_cmp(&other.x)
    }

    /// `x<sep>y` with shortest round-trip number formatting
    pub fn to_line(&self, separator: &str) -> String {
        format!("{}{}{}", self.x, separator, self.y)
    }
}

impl fmt::Display for SpectralPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[SpectralPoint: X={}, Y={}]", self.x, self.y)
    }
}

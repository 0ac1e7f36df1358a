use chrono::{DateTime, NaiveDateTime, Utc};

use crate::metadata::{keys, Metadata};

use super::{RunningStats, SortOrder, SpectralPoint, SpectralSpacing, SpectralType};

/// Largest spread of successive x differences still counted as a fixed grid
pub const SPACING_TOLERANCE: f64 = 1e-6;

/// An ordered point list with running statistics and attached metadata
#[derive(Debug, Clone)]
pub struct Spectrum {
    points: Vec<SpectralPoint>,
    sort_order: SortOrder,
    x_stats: RunningStats,
    y_stats: RunningStats,
    x_unit_name: String,
    y_unit_name: String,
    metadata: Metadata,

    /// Kind of spectroscopy
    pub spectral_type: SpectralType,
    /// Acquisition time as recorded by the instrument (local time)
    pub measurement_date: Option<NaiveDateTime>,
    /// Last modification time as recorded by the instrument (local time)
    pub modification_date: Option<NaiveDateTime>,
    /// Creation time of the file the spectrum was read from
    pub source_file_creation_date: Option<DateTime<Utc>>,
    /// Name of the file the spectrum was read from
    pub source_file_name: String,
}

impl Default for Spectrum {
    fn default() -> Self {
        Self::new(SortOrder::Ascending)
    }
}

impl Spectrum {
    /// Empty spectrum with a fixed sort policy
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            points: Vec::new(),
            sort_order,
            x_stats: RunningStats::new(),
            y_stats: RunningStats::new(),
            x_unit_name: String::new(),
            y_unit_name: String::new(),
            metadata: Metadata::new(),
            spectral_type: SpectralType::Unknown,
            measurement_date: None,
            modification_date: None,
            source_file_creation_date: None,
            source_file_name: String::new(),
        }
    }

    /// Sort policy fixed at construction
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Add a point and restore the sort order.
    ///
    /// Returns `false` (and changes nothing) if either value is NaN.
    pub fn add_point(&mut self, x: f64, y: f64) -> bool {
        self.push(SpectralPoint::new(x, y))
    }

    /// Like [`Spectrum::add_point`] for an existing point
    pub fn push(&mut self, point: SpectralPoint) -> bool {
        if !point.is_valid() {
            return false;
        }
        self.points.push(point);
        self.x_stats.update(point.x());
        self.y_stats.update(point.y());
        self.sort();
        true
    }

    /// Remove all points; metadata and units are kept
    pub fn clear(&mut self) {
        self.points.clear();
        self.x_stats.restart();
        self.y_stats.restart();
    }

    fn sort(&mut self) {
        match self.sort_order {
            SortOrder::None => {}
            SortOrder::Ascending => self.points.sort_by(|a, b| a.cmp_x(b)),
            SortOrder::Descending => self.points.sort_by(|a, b| b.cmp_x(a)),
        }
    }

    /// Points in the configured order
    pub fn points(&self) -> &[SpectralPoint] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// x of the first point in sequence order
    pub fn first_x(&self) -> Option<f64> {
        self.points.first().map(SpectralPoint::x)
    }

    /// x of the last point in sequence order
    pub fn last_x(&self) -> Option<f64> {
        self.points.last().map(SpectralPoint::x)
    }

    /// y of the first point in sequence order
    pub fn first_y(&self) -> Option<f64> {
        self.points.first().map(SpectralPoint::y)
    }

    /// y of the last point in sequence order
    pub fn last_y(&self) -> Option<f64> {
        self.points.last().map(SpectralPoint::y)
    }

    /// Statistics over all x values
    pub fn x_stats(&self) -> &RunningStats {
        &self.x_stats
    }

    /// Statistics over all y values
    pub fn y_stats(&self) -> &RunningStats {
        &self.y_stats
    }

    /// Classify the grid from the spread of successive x differences
    pub fn spacing(&self) -> SpectralSpacing {
        if self.points.len() < 3 {
            return SpectralSpacing::Unknown;
        }
        let mut steps = RunningStats::new();
        for pair in self.points.windows(2) {
            steps.update(pair[1].x() - pair[0].x());
        }
        if steps.range().abs() < SPACING_TOLERANCE {
            SpectralSpacing::FixedSpacing
        } else {
            SpectralSpacing::VariableSpacing
        }
    }

    /// Grid step for fixed spacing, NaN otherwise
    pub fn delta_x(&self) -> f64 {
        match (self.spacing(), self.first_x(), self.last_x()) {
            (SpectralSpacing::FixedSpacing, Some(first), Some(last)) => {
                (last - first) / (self.points.len() - 1) as f64
            }
            _ => f64::NAN,
        }
    }

    /// Set both axis unit names (trimmed)
    pub fn set_unit_names(&mut self, x: &str, y: &str) {
        self.x_unit_name = x.trim().to_string();
        self.y_unit_name = y.trim().to_string();
    }

    /// Unit of the abscissa, as found in the source
    pub fn x_unit_name(&self) -> &str {
        &self.x_unit_name
    }

    /// Unit of the ordinate, as found in the source
    pub fn y_unit_name(&self) -> &str {
        &self.y_unit_name
    }

    /// Attached metadata registry
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Mutable access to the metadata registry
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Shorthand for `metadata_mut().set(key, value)`
    pub fn add_metadata(&mut self, key: &str, value: impl Into<String>) {
        self.metadata.set(key, value);
    }

    /// Copy of the registry with all derived fields filled in.
    ///
    /// The spectrum itself is left untouched; writers call this once per
    /// render.
    pub fn computed_metadata(&self) -> Metadata {
        let mut md = self.metadata.clone();

        md.set_if_present(keys::SOURCE_FILE_NAME, &self.source_file_name);
        if let Some(date) = self.measurement_date {
            md.set(keys::DATE, date.format("%y/%m/%d").to_string());
            md.set(keys::TIME, date.format("%H:%M:%S").to_string());
            md.set(keys::LONG_DATE, date.format("%Y/%m/%d %H:%M:%S").to_string());
            md.set(keys::MEASUREMENT_DATE, date.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
        if let Some(date) = self.modification_date {
            md.set(keys::MODIFICATION_DATE, date.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
        if let Some(date) = self.source_file_creation_date {
            md.set(
                keys::SOURCE_FILE_CREATION_DATE,
                date.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            );
        }
        md.set_if_present(keys::DATA_TYPE, self.spectral_type.jcamp_data_type());
        md.set(keys::NPOINTS, self.len().to_string());

        let numbers = [
            (keys::FIRST_X, self.first_x()),
            (keys::LAST_X, self.last_x()),
            (keys::FIRST_Y, self.first_y()),
            (keys::LAST_Y, self.last_y()),
            (keys::MAX_X, non_empty(&self.x_stats, RunningStats::max)),
            (keys::MIN_X, non_empty(&self.x_stats, RunningStats::min)),
            (keys::MAX_Y, non_empty(&self.y_stats, RunningStats::max)),
            (keys::MIN_Y, non_empty(&self.y_stats, RunningStats::min)),
            (keys::DELTA_X, Some(self.delta_x()).filter(|d| !d.is_nan())),
        ];
        for (key, value) in numbers {
            if let Some(v) = value {
                md.set(key, v.to_string());
            }
        }

        md.set(keys::X_UNITS, self.x_unit_name.as_str());
        md.set(keys::Y_UNITS, self.y_unit_name.as_str());
        md
    }
}

fn non_empty(stats: &RunningStats, pick: fn(&RunningStats) -> f64) -> Option<f64> {
    (stats.count() > 0).then(|| pick(stats))
}

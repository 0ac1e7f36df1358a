use serde::Serialize;

use crate::metadata::keys;
use crate::outcome::{WarningKind, Warnings};
use crate::spectrum::{SortOrder, Spectrum};

use super::history::{HistoryFields, HistoryFragments, HistoryLayout};
use super::schema::Field;

/// All fields decoded from the main data set block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpRecord {
    /// Data type discriminator
    pub data_type: Option<u16>,
    /// First abscissa value
    pub start_x: Option<f64>,
    /// Last abscissa value
    pub end_x: Option<f64>,
    /// Minimum ordinate value
    pub min_y: Option<f64>,
    /// Maximum ordinate value
    pub max_y: Option<f64>,
    /// Abscissa step
    pub interval: Option<f64>,
    /// Declared number of points
    pub num_points: Option<i32>,
    /// Sampling method text
    pub sampling: Option<String>,
    /// x axis label
    pub label_x: Option<String>,
    /// y axis label
    pub label_y: Option<String>,
    /// File type tag
    pub file_type: Option<String>,
    /// Data set name
    pub name: Option<String>,
    /// Data set alias
    pub alias: Option<String>,
    /// Stored checksum
    pub checksum: Option<u32>,
    /// Y values
    pub y_values: Vec<f64>,
    /// Segmented history record
    pub history: Vec<String>,
    #[serde(skip)]
    history_fragments: Option<HistoryFragments>,
}

impl SpRecord {
    /// Fold one decoded field in; later members overwrite earlier ones
    pub fn apply(&mut self, field: Field, warnings: &mut Warnings) {
        match field {
            Field::DataType(v) => self.data_type = Some(v),
            Field::AbscissaRange(start, end) => {
                self.start_x = Some(start);
                self.end_x = Some(end);
            }
            Field::OrdinateRange(min, max) => {
                self.min_y = Some(min);
                self.max_y = Some(max);
            }
            Field::Interval(v) => self.interval = Some(v),
            Field::NumPoints(v) => self.num_points = Some(v),
            Field::SamplingMethod(s) => self.sampling = Some(s),
            Field::XAxisLabel(s) => self.label_x = Some(s),
            Field::YAxisLabel(s) => self.label_y = Some(s),
            Field::FileType(s) => self.file_type = Some(s),
            Field::Name(s) => self.name = Some(s),
            Field::Alias(s) => self.alias = Some(s),
            Field::Checksum(v) => self.checksum = Some(v),
            Field::Data(data) => {
                if data.trailing_bytes != 0 {
                    warnings.push(
                        WarningKind::Truncated,
                        format!(
                            "Y data ends with {} bytes that do not form a value",
                            data.trailing_bytes
                        ),
                    );
                }
                let declared = data.embedded_len as i64 / 8;
                if declared != data.values.len() as i64 {
                    warnings.push(
                        WarningKind::Consistency,
                        format!(
                            "Y data header announces {} values, member holds {}",
                            declared,
                            data.values.len()
                        ),
                    );
                }
                self.y_values = data.values;
            }
            Field::History(fragments) => {
                if fragments.is_sentinel() {
                    warnings.push(WarningKind::History, "history record too short");
                } else if fragments.is_truncated() {
                    warnings.push(
                        WarningKind::History,
                        format!(
                            "history record truncated after {} fragments",
                            fragments.len()
                        ),
                    );
                }
                self.history = fragments.as_slice().to_vec();
                self.history_fragments = Some(fragments);
            }
        }
    }

    /// Step between consecutive points.
    ///
    /// Falls back to the abscissa range when the interval member is missing
    /// or zero.
    pub fn effective_interval(&self) -> Option<f64> {
        match self.interval {
            Some(step) if step != 0.0 && step.is_finite() => Some(step),
            _ => {
                let n = self.y_values.len();
                match (self.start_x, self.end_x) {
                    (Some(start), Some(end)) if n > 1 => Some((end - start) / (n - 1) as f64),
                    _ => None,
                }
            }
        }
    }

    /// Named fields of the history record, if one was present
    pub fn history_fields(&self, layout: &HistoryLayout) -> Option<HistoryFields> {
        self.history_fragments
            .as_ref()
            .map(|f| HistoryFields::from_fragments(f, layout))
    }

    /// Build the spectrum: x_i = start + i * step
    pub fn to_spectrum(
        &self,
        description: &str,
        layout: &HistoryLayout,
        sort_order: SortOrder,
        warnings: &mut Warnings,
    ) -> Spectrum {
        let mut spectrum = Spectrum::new(sort_order);

        if let Some(n) = self.num_points {
            if n as i64 != self.y_values.len() as i64 {
                warnings.push(
                    WarningKind::Consistency,
                    format!(
                        "NumPoints is {} but {} Y values were decoded",
                        n,
                        self.y_values.len()
                    ),
                );
            }
        }

        match (self.start_x, self.effective_interval()) {
            (Some(start), Some(step)) => {
                for (i, &y) in self.y_values.iter().enumerate() {
                    spectrum.add_point(start + i as f64 * step, y);
                }
            }
            (Some(start), None) if self.y_values.len() == 1 => {
                spectrum.add_point(start, self.y_values[0]);
            }
            _ if !self.y_values.is_empty() => {
                warnings.push(
                    WarningKind::MalformedField,
                    "abscissa range or interval missing; Y data dropped",
                );
            }
            _ => {}
        }

        spectrum.set_unit_names(
            self.label_x.as_deref().unwrap_or_default(),
            self.label_y.as_deref().unwrap_or_default(),
        );

        let md = spectrum.metadata_mut();
        md.set_if_present("SPName", self.name.as_deref().unwrap_or_default());
        md.set_if_present("SPAlias", self.alias.as_deref().unwrap_or_default());
        md.set_if_present("Description", description);
        if let Some(v) = self.data_type {
            md.set("SPDataType", v.to_string());
        }
        md.set_if_present("SPFileType", self.file_type.as_deref().unwrap_or_default());
        md.set_if_present("SPSampling", self.sampling.as_deref().unwrap_or_default());
        if let Some(v) = self.checksum {
            md.set("SPChecksum", v.to_string());
        }
        if let Some(name) = &self.name {
            md.set_if_present(keys::TITLE, name);
        }
        if let Some(fields) = self.history_fields(layout) {
            fields.apply(md);
        }
        spectrum
    }
}

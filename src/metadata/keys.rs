//! Well-known metadata keys.
//!
//! Keys are stored as written here; the interchange renderer upper-cases
//! them to form the JCAMP-DX data label (`"Data Type"` → `##DATA TYPE=`).

/// ##TITLE (required)
pub const TITLE: &str = "Title";
/// ##JCAMP-DX version (required)
pub const JCAMP_DX: &str = "JCAMP-DX";
/// ##DATA TYPE (required)
pub const DATA_TYPE: &str = "Data Type";
/// ##ORIGIN (required)
pub const ORIGIN: &str = "Origin";
/// ##OWNER (required)
pub const OWNER: &str = "Owner";
/// ##LONG DATE
pub const LONG_DATE: &str = "Long Date";
/// ##DATE (yy/MM/dd)
pub const DATE: &str = "Date";
/// ##TIME (HH:mm:ss)
pub const TIME: &str = "Time";
/// ##SPECTROMETER/DATA SYSTEM
pub const SPECTROMETER_SYSTEM: &str = "Spectrometer/Data System";
/// ##INSTRUMENT PARAMETERS
pub const INSTRUMENT_PARAMETERS: &str = "Instrument Parameters";
/// ##SAMPLE DESCRIPTION
pub const SAMPLE_DESCRIPTION: &str = "Sample Description";
/// ##CONCENTRATIONS
pub const CONCENTRATIONS: &str = "Concentrations";
/// ##SAMPLING PROCEDURE
pub const SAMPLING_PROCEDURE: &str = "Sampling Procedure";
/// ##STATE
pub const STATE: &str = "State";
/// ##PATH LENGTH
pub const PATH_LENGTH: &str = "Path Length";
/// ##PRESSURE
pub const PRESSURE: &str = "Pressure";
/// ##TEMPERATURE
pub const TEMPERATURE: &str = "Temperature";
/// ##DATA PROCESSING
pub const DATA_PROCESSING: &str = "Data Processing";
/// ##SOURCE REFERENCE
pub const SOURCE_REFERENCE: &str = "Source Reference";
/// ##CROSS REFERENCE
pub const CROSS_REFERENCE: &str = "Cross Reference";
/// ##RESOLUTION
pub const RESOLUTION: &str = "Resolution";
/// ##XLABEL
pub const X_LABEL: &str = "XLabel";
/// ##YLABEL
pub const Y_LABEL: &str = "YLabel";
/// ##XUNITS (required)
pub const X_UNITS: &str = "XUnits";
/// ##YUNITS (required)
pub const Y_UNITS: &str = "YUnits";
/// ##XFACTOR (required)
pub const X_FACTOR: &str = "XFactor";
/// ##YFACTOR (required)
pub const Y_FACTOR: &str = "YFactor";
/// ##FIRSTX (required)
pub const FIRST_X: &str = "FirstX";
/// ##LASTX (required)
pub const LAST_X: &str = "LastX";
/// ##NPOINTS (required)
pub const NPOINTS: &str = "NPoints";
/// ##FIRSTY (required)
pub const FIRST_Y: &str = "FirstY";
/// ##MAXX
pub const MAX_X: &str = "MaxX";
/// ##MINX
pub const MIN_X: &str = "MinX";
/// ##MAXY
pub const MAX_Y: &str = "MaxY";
/// ##MINY
pub const MIN_Y: &str = "MinY";
/// ##DELTAX
pub const DELTA_X: &str = "DeltaX";

// User-defined keys written by the readers and the computed-field pass.

/// Y value of the last point (no standard label)
pub const LAST_Y: &str = "LastY";
/// File name of the converted input
pub const SOURCE_FILE_NAME: &str = "SourceFileName";
/// Creation time of the converted input
pub const SOURCE_FILE_CREATION_DATE: &str = "SourceFileCreationDate";
/// Acquisition timestamp in ISO 8601
pub const MEASUREMENT_DATE: &str = "MeasurementDate";
/// Last modification timestamp in ISO 8601
pub const MODIFICATION_DATE: &str = "ModificationDate";
/// Spectrometer model
pub const SPECTROMETER_MODEL: &str = "SpectrometerModel";
/// Spectrometer serial number
pub const SERIAL_NUMBER: &str = "SerialNumber";
/// Acquisition software identifier
pub const SOFTWARE_ID: &str = "SoftwareID";
/// Free-text operator comments
pub const COMMENTS: &str = "Comments";
/// Hours on the detector since its last change
pub const DETECTOR_CHANGE: &str = "DetectorChange";
/// Hours on the lamp since its last change
pub const LAMP_CHANGE: &str = "LampChange";

/// Keys that only make sense in the interchange format
pub const INTERCHANGE_ONLY: &[&str] = &[JCAMP_DX, DATE, TIME, LONG_DATE, SPECTROMETER_SYSTEM];

/// Keys recomputed from the point list on every render
pub const DERIVED: &[&str] = &[
    NPOINTS, FIRST_X, LAST_X, FIRST_Y, LAST_Y, MAX_X, MIN_X, MAX_Y, MIN_Y, DELTA_X,
];

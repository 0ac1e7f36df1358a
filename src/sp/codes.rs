//! Numeric identifiers used by the block file format.

use std::fmt;

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i16)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            /// Look up a raw code
            pub fn from_code(code: i16) -> Option<Self> {
                match code {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Raw on-disk value
            pub fn code(self) -> i16 {
                self as i16
            }

            /// Variant name
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

code_enum! {
    /// Top-level block ids
    BlockCode {
        /// Main data set block (mandatory)
        DSet2DC1DI = 120,
        /// Compound history record
        HistoryRecord = 121,
        /// Instrument header history record
        InstrHdrHistoryRecord = 122,
        /// Generic instrument header
        InstrumentHeader = 123,
        /// IR instrument header
        IRInstrumentHeader = 124,
        /// UV instrument header
        UVInstrumentHeader = 125,
        /// Fluorescence instrument header
        FLInstrumentHeader = 126,
    }
}

code_enum! {
    /// Member record ids inside the main block
    MemberCode {
        /// Data type discriminator
        DataType = -29839,
        /// First and last x
        AbscissaRange = -29838,
        /// Minimum and maximum y
        OrdinateRange = -29837,
        /// x step
        Interval = -29836,
        /// Number of points
        NumPoints = -29835,
        /// Sampling method text
        SamplingMethod = -29834,
        /// x axis label
        XAxisLabel = -29833,
        /// y axis label
        YAxisLabel = -29832,
        /// x axis unit type
        XAxisUnitType = -29831,
        /// y axis unit type
        YAxisUnitType = -29830,
        /// File type tag
        FileType = -29829,
        /// Y data array
        Data = -29828,
        /// Data set name
        Name = -29827,
        /// Checksum
        Checksum = -29826,
        /// Embedded history blob
        HistoryRecord = -29825,
        /// Invalid region list
        InvalidRegion = -29824,
        /// Data set alias
        Alias = -29823,
        /// VXIR accuracy header
        VXIRAccyHdr = -29822,
        /// VXIR qualification header
        VXIRQualHdr = -29821,
        /// Event markers
        EventMarkers = -29820,
    }
}

code_enum! {
    /// Type discriminators of member records
    TypeCode {
        /// i16
        Short = 29999,
        /// u16
        UShort = 29998,
        /// i32
        Int = 29997,
        /// u32
        UInt = 29996,
        /// i32
        Long = 29995,
        /// bool
        Bool = 29988,
        /// Length-prefixed text
        Char = 29987,
        /// Point
        CvCoOrdPoint = 29986,
        /// Font
        StdFont = 29985,
        /// Dimension
        CvCoOrdDimension = 29984,
        /// Rectangle
        CvCoOrdRectangle = 29983,
        /// Colour
        RGBColor = 29982,
        /// Pair of f64
        CvCoOrdRange = 29981,
        /// f64
        Double = 29980,
        /// f64 coordinate
        CvCoOrd = 29979,
        /// u32
        ULong = 29978,
        /// Peak
        Peak = 29977,
        /// Coordinate
        CoOrd = 29976,
        /// Range
        Range = 29975,
        /// Array of f64
        CvCoOrdArray = 29974,
        /// Enumeration
        Enum = 29973,
        /// Font
        LogFont = 29972,
    }
}

/// Human-readable name for any raw code found in a file
pub fn describe(code: i16) -> String {
    if let Some(c) = BlockCode::from_code(code) {
        return c.name().to_string();
    }
    if let Some(c) = MemberCode::from_code(code) {
        return c.name().to_string();
    }
    if let Some(c) = TypeCode::from_code(code) {
        return c.name().to_string();
    }
    code.to_string()
}

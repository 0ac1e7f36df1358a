/// Fallback for a blank unit symbol
pub const ARBITRARY_UNITS: &str = "ARBITRARY UNITS";

/// Map a unit symbol to its interchange name.
///
/// Matching ignores case and surrounding blanks. Unknown symbols pass
/// through uppercased.
pub fn translate_unit(symbol: &str) -> String {
    let symbol = symbol.trim().to_uppercase();
    let name = match symbol.as_str() {
        "" => ARBITRARY_UNITS,
        "NM" => "NANOMETERS",
        "CM-1" | "1/CM" | "WN" => "1/CM",
        "A" | "ABS" => "ABSORBANCE",
        // Micro sign uppercases to capital mu
        "UM" | "\u{b5}M" | "\u{39c}M" => "MICROMETERS",
        "S" | "SEC" => "SECONDS",
        "%T" | "T" => "TRANSMITTANCE",
        "%R" | "R" => "REFLECTANCE",
        "INT" => "INTENSITY",
        "EGY" => "ENERGY",
        _ => return symbol,
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_unit() {
        assert_eq!(translate_unit("nm"), "NANOMETERS");
        assert_eq!(translate_unit("%T"), "TRANSMITTANCE");
        assert_eq!(translate_unit("xyz"), "XYZ");
        assert_eq!(translate_unit(""), "ARBITRARY UNITS");
        assert_eq!(translate_unit("  "), "ARBITRARY UNITS");
        assert_eq!(translate_unit(" cm-1 "), "1/CM");
        assert_eq!(translate_unit("µm"), "MICROMETERS");
        assert_eq!(translate_unit("a"), "ABSORBANCE");
    }
}

use super::*;
use crate::ascii::LegacyReader;
use crate::metadata::{keys, RenderOptions};
use crate::spectrum::{SortOrder, SpectralType, Spectrum};

fn grid_spectrum() -> Spectrum {
    let mut spectrum = Spectrum::default();
    for (x, y) in [(400.0, 0.5), (401.0, 0.25), (402.0, 1.0), (403.0, 0.75)] {
        spectrum.add_point(x, y);
    }
    spectrum.set_unit_names("nm", "A");
    spectrum.spectral_type = SpectralType::UvVis;
    spectrum.add_metadata(keys::TITLE, "holmium");
    spectrum
}

fn compact() -> RenderOptions {
    RenderOptions {
        justify: false,
        max_line_length: 0,
    }
}

#[test]
fn test_jcamp_fixed_spacing() {
    let text = JcampWriter::new()
        .with_options(compact())
        .render(&grid_spectrum())
        .unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "##TITLE= holmium");
    assert_eq!(lines[1], "##JCAMP-DX= 4.24");
    assert_eq!(lines[2], "##DATA TYPE= UV/VIS SPECTRUM");
    assert!(lines.contains(&"##ORIGIN="));
    assert!(lines.contains(&"##XUNITS= NANOMETERS"));
    assert!(lines.contains(&"##YUNITS= ABSORBANCE"));
    assert!(lines.contains(&"##NPOINTS= 4"));
    assert!(lines.contains(&"##DELTAX= 1"));
    assert!(lines.contains(&"##MAXY= 1"));
    assert!(lines.contains(&"##$LASTY= 0.75"));

    let data = lines
        .iter()
        .position(|l| *l == "##XYDATA= (X++(Y..Y))")
        .unwrap();
    assert_eq!(
        &lines[data + 1..],
        &["400 0.5", "401 0.25", "402 1", "403 0.75", "##END="]
    );
}

#[test]
fn test_jcamp_variable_spacing_and_factors() {
    let mut spectrum = Spectrum::default();
    for x in [0.0, 10.0, 30.0, 70.0] {
        spectrum.add_point(x, x * 2.0);
    }
    let text = JcampWriter::new()
        .with_options(compact())
        .with_factors(10.0, 2.0)
        .render(&spectrum)
        .unwrap();

    assert!(text.contains("##XUNITS= ARBITRARY UNITS\n"));
    assert!(text.contains("##XFACTOR= 10\n"));
    assert!(text.contains("##YFACTOR= 2\n"));
    assert!(!text.contains("##DELTAX"));
    assert!(text.ends_with("##XYPOINTS= (XY..XY)\n0, 0\n1, 10\n3, 30\n7, 70\n##END=\n"));
}

#[test]
fn test_jcamp_empty_spectrum() {
    let text = JcampWriter::new().render(&Spectrum::default()).unwrap();
    assert!(!text.contains("##XYDATA"));
    assert!(!text.contains("##XYPOINTS"));
    assert!(text.ends_with("##END=\n"));
    assert!(text.contains("##NPOINTS="));
}

#[test]
fn test_jcamp_single_point_uses_pairs() {
    let mut spectrum = Spectrum::default();
    spectrum.add_point(5.0, 1.0);
    let text = JcampWriter::new().render(&spectrum).unwrap();
    assert!(text.contains("##XYPOINTS= (XY..XY)\n5, 1\n"));
}

#[test]
fn test_jcamp_rejects_zero_factor() {
    let err = JcampWriter::new()
        .with_factors(0.0, 1.0)
        .render(&grid_spectrum())
        .unwrap_err();
    assert!(matches!(err, WriterError::InvalidFactor { axis: "x", .. }));
}

#[test]
fn test_jcamp_truncates_long_records() {
    let mut spectrum = grid_spectrum();
    spectrum.add_metadata(keys::SAMPLE_DESCRIPTION, "x".repeat(200));
    let text = JcampWriter::new().render(&spectrum).unwrap();
    let line = text
        .lines()
        .find(|l| l.starts_with("##SAMPLE DESCRIPTION="))
        .unwrap();
    assert_eq!(line.chars().count(), 80);
    assert!(line.ends_with("..."));
    assert!(text.lines().all(|l| l.chars().count() <= 80));
}

#[test]
fn test_writers_do_not_touch_spectrum() {
    let spectrum = grid_spectrum();
    JcampWriter::new().render(&spectrum).unwrap();
    PlainWriter::new().render(&spectrum);
    assert_eq!(spectrum.metadata().get(keys::NPOINTS), Some(""));
    assert_eq!(spectrum.metadata().get(keys::X_UNITS), Some(""));
}

#[test]
fn test_plain_layout() {
    let text = PlainWriter::new().with_options(compact()).render(&grid_spectrum());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "**** UV/VIS ****");
    assert_eq!(lines[1], "Title = holmium");
    assert!(lines.contains(&"XUnits = nm"));
    assert!(!text.contains("JCAMP-DX"));
    assert!(!text.contains("Origin"));
    let sep = lines.iter().position(|l| *l == "@@@@").unwrap();
    assert_eq!(&lines[sep + 1..], &["400 0.5", "401 0.25", "402 1", "403 0.75"]);
}

#[test]
fn test_plain_round_trip() {
    let mut original = Spectrum::new(SortOrder::Ascending);
    for (x, y) in [(1.5, 1e-9), (0.1, -3.25), (7.0, 123456.789)] {
        original.add_point(x, y);
    }
    original.set_unit_names("1/cm", "%T");
    original.add_metadata(keys::OWNER, "lab");

    let text = PlainWriter::new().render(&original);
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let outcome = LegacyReader::new().read_lines(&lines).unwrap();
    assert!(outcome.is_clean());

    let copy = outcome.value;
    assert_eq!(copy.points(), original.points());
    assert_eq!(copy.x_unit_name(), "1/cm");
    assert_eq!(copy.y_unit_name(), "%T");
    assert_eq!(copy.metadata().get(keys::OWNER), Some("lab"));
}

#[test]
fn test_csv() {
    let text = CsvWriter::new().render(&grid_spectrum()).unwrap();
    assert_eq!(text, "nm,A\n400,0.5\n401,0.25\n402,1\n403,0.75\n");
}

#[test]
fn test_writer_extensions() {
    let writers: Vec<Box<dyn SpectrumWriter>> = vec![
        Box::new(JcampWriter::new()),
        Box::new(PlainWriter::new()),
        Box::new(CsvWriter::new()),
    ];
    let exts: Vec<_> = writers.iter().map(|w| w.extension()).collect();
    assert_eq!(exts, vec!["jdx", "spc", "csv"]);
    for w in &writers {
        assert!(w.render(&grid_spectrum()).is_ok());
    }
}

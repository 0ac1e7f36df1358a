//! Integration tests for specpod
//!
//! These tests run whole files through detection, reading and writing.

use std::fs;
use std::path::PathBuf;

use specpod::ascii::LegacyReader;
use specpod::convert::{
    collect_inputs, convert_batch, convert_file, read_spectrum, BatchEntry, ConvertOptions,
    OutputFormat,
};
use specpod::metadata::keys;
use specpod::sp::codes::MemberCode;
use specpod::sp::encode::{history_blob, sample_file, ContainerBuilder, MembersBuilder};
use specpod::spectrum::{SortOrder, SpectralType};
use tempfile::{tempdir, TempDir};

/// Version 1.60 export: `#HDR` at line 9, three data points
fn pe_export() -> String {
    let signature: String = ["PE UV", "", "SPECTRUM", "ASCII", "PEDS", "1.60"]
        .iter()
        .map(|t| format!("{:<12}", t))
        .collect();
    let mut lines = vec![String::new(); 24];
    lines[0] = signature;
    lines[2] = "didymium.sp".into();
    lines[3] = "24/01/31".into();
    lines[4] = "08:15:00.00".into();
    lines[5] = "24/02/01".into();
    lines[6] = "10:00:00.00".into();
    lines[7] = "analyst".into();
    lines[8] = "didymium filter".into();
    lines[9] = "#HDR".into();
    lines[12] = "#GR".into();
    lines[13] = "NM".into();
    lines[14] = "%T".into();
    lines[19] = "3".into();
    lines[23] = "#DATA".into();
    lines.push("500.0\t80.5".into());
    lines.push("499.0\t81.0".into());
    lines.push("498.0\t79.25".into());
    lines.join("\r\n")
}

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// Binary file with a history record carrying operator and instrument text
fn sp_with_history() -> Vec<u8> {
    let mut fragments: Vec<String> = (0..39).map(|_| String::new()).collect();
    fragments[0] = "analyst".into();
    fragments[4] = "holmium oxide".into();
    fragments[7] = "Lambda 35".into();
    fragments[8] = "501S".into();
    fragments[20] = "UV/VIS".into();
    fragments[21] = "Slit 2 nm".into();
    fragments[22] = "2.0".into();

    ContainerBuilder::new("holmium check")
        .main_block(
            MembersBuilder::new()
                .abscissa_range(240.0, 250.0)
                .interval(5.0)
                .num_points(3)
                .string(MemberCode::XAxisLabel, "nm")
                .string(MemberCode::YAxisLabel, "A")
                .y_data(&[0.8, 1.2, 0.9])
                .history(&history_blob(&fragments)),
        )
        .finish()
}

#[test]
fn test_sp_to_jcamp_document() {
    let dir = tempdir().unwrap();
    let input = write(&dir, "holmium.sp", &sp_with_history());

    let outcome = convert_file(&input, &ConvertOptions::default()).unwrap();
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
    assert_eq!(outcome.points, 3);

    let text = fs::read_to_string(dir.path().join("holmium.jdx")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("##TITLE="));
    assert!(lines[1].starts_with("##JCAMP-DX="));
    assert!(lines[1].ends_with("4.24"));
    assert!(text.contains("UV/VIS SPECTRUM"));
    assert!(text.contains("NANOMETERS"));
    assert!(text.contains("ABSORBANCE"));
    assert!(text.contains("analyst"));
    assert!(text.contains("Lambda 35"));
    assert!(lines.iter().all(|l| l.chars().count() <= 80));

    let data = lines
        .iter()
        .position(|l| *l == "##XYDATA= (X++(Y..Y))")
        .unwrap();
    assert_eq!(
        &lines[data + 1..],
        &["240 0.8", "245 1.2", "250 0.9", "##END="]
    );
}

#[test]
fn test_pe_ascii_to_plain_and_back() {
    let dir = tempdir().unwrap();
    let input = write(&dir, "didymium.asc", pe_export().as_bytes());

    let options = ConvertOptions::new(OutputFormat::Plain);
    let outcome = convert_file(&input, &options).unwrap();
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);

    let written = fs::read_to_string(&outcome.output).unwrap();
    let lines: Vec<String> = written.lines().map(str::to_string).collect();
    let reread = LegacyReader::new().read_lines(&lines).unwrap().value;

    let original = read_spectrum(&input, &options).unwrap().value;
    assert_eq!(reread.points(), original.points());
    assert_eq!(reread.spectral_type, SpectralType::UvVis);
    assert_eq!(reread.x_unit_name(), "NM");
    assert_eq!(reread.y_unit_name(), "%T");
    assert_eq!(reread.metadata().get(keys::OWNER), Some("analyst"));
    assert_eq!(reread.points()[0].x(), 498.0);
}

#[test]
fn test_sort_order_is_applied() {
    let dir = tempdir().unwrap();
    let input = write(&dir, "didymium.asc", pe_export().as_bytes());
    let options = ConvertOptions {
        sort_order: SortOrder::Descending,
        ..ConvertOptions::new(OutputFormat::Csv)
    };
    let outcome = convert_file(&input, &options).unwrap();
    let csv = fs::read_to_string(outcome.output).unwrap();
    assert_eq!(csv, "NM,%T\n500,80.5\n499,81\n498,79.25\n");
}

#[test]
fn test_directory_batch_keeps_going() {
    let dir = tempdir().unwrap();
    write(&dir, "a.sp", &sample_file());
    write(&dir, "b.sp", b"not a block file");
    write(&dir, "c.asc", pe_export().as_bytes());
    write(&dir, "readme.txt", b"ignored");

    let out = tempdir().unwrap();
    let options = ConvertOptions {
        output_dir: Some(out.path().to_path_buf()),
        ..ConvertOptions::new(OutputFormat::Csv)
    };
    let inputs = collect_inputs(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(inputs.len(), 3);

    let report = convert_batch(&inputs, &options);
    assert_eq!(report.converted_count(), 2);
    assert_eq!(report.failure_count(), 1);
    match &report.entries[1] {
        BatchEntry::Failed { input, error } => {
            assert!(input.ends_with("b.sp"));
            assert!(!error.is_empty());
        }
        other => panic!("unexpected entry: {other:?}"),
    }
    assert!(out.path().join("a.csv").exists());
    assert!(out.path().join("c.csv").exists());
    assert!(!out.path().join("b.csv").exists());
}

#[test]
fn test_truncated_file_still_converts() {
    let dir = tempdir().unwrap();
    let members = MembersBuilder::new()
        .abscissa_range(1.0, 4.0)
        .interval(1.0)
        .y_data(&[4.0, 3.0, 2.0, 1.0])
        // member header promising 64 bytes that never arrive
        .raw(&[0x70, 0x8b, 64, 0, 0, 0]);
    let bytes = ContainerBuilder::new("cut").main_block(members).finish();

    let input = write(&dir, "cut.sp", &bytes);
    let outcome = convert_file(&input, &ConvertOptions::default()).unwrap();
    assert!(outcome.truncated);
    assert_eq!(outcome.points, 4);
    assert!(!outcome.warnings.is_empty());
}

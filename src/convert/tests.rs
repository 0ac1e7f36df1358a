use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::*;
use crate::sp::encode::{sample_file, ContainerBuilder, MembersBuilder};

const LEGACY: &str = "**** UV/VIS ****\nholmium glass\nOwner = lab\nXUnits = nm\nYUnits = A\n@@@@\n400 0.1\n401 0.2\n402 0.3\n";

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_detect_by_content() {
    let p = Path::new("renamed.txt");
    assert_eq!(InputFormat::detect(p, &sample_file()).unwrap(), InputFormat::Sp);
    assert_eq!(
        InputFormat::detect(p, LEGACY.as_bytes()).unwrap(),
        InputFormat::Legacy
    );
    let pe = "PE UV       SPECTRUM    ASCII       PEDS        4.00        \n#HDR\n";
    assert_eq!(
        InputFormat::detect(p, pe.as_bytes()).unwrap(),
        InputFormat::PeAscii
    );
}

#[test]
fn test_detect_by_extension() {
    assert_eq!(
        InputFormat::detect(Path::new("a.SP"), b"junk").unwrap(),
        InputFormat::Sp
    );
    assert_eq!(
        InputFormat::detect(Path::new("a.asc"), b"junk").unwrap(),
        InputFormat::PeAscii
    );
    let err = InputFormat::detect(Path::new("a.dat"), b"junk").unwrap_err();
    assert!(matches!(err, ConvertError::UnknownFormat { .. }));
}

#[test]
fn test_output_format_names() {
    assert_eq!("JDX".parse::<OutputFormat>().unwrap(), OutputFormat::Jcamp);
    assert_eq!("spc".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
    assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
    assert!("xml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Plain.to_string(), "plain");
}

#[test]
fn test_output_path() {
    let mut options = ConvertOptions::new(OutputFormat::Csv);
    assert_eq!(
        options.output_path(Path::new("/data/run.sp")),
        PathBuf::from("/data/run.csv")
    );
    options.output_dir = Some(PathBuf::from("/out"));
    assert_eq!(
        options.output_path(Path::new("/data/run.sp")),
        PathBuf::from("/out/run.csv")
    );
}

#[test]
fn test_convert_sp_to_jcamp() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "holmium.sp", &sample_file());
    let options = ConvertOptions {
        origin: Some("QC lab".to_string()),
        ..ConvertOptions::default()
    };

    let outcome = convert_file(&input, &options).unwrap();
    assert_eq!(outcome.output, dir.path().join("holmium.jdx"));
    assert_eq!(outcome.points, 5);
    assert!(outcome.warnings.is_empty());

    let text = fs::read_to_string(&outcome.output).unwrap();
    let origin = text.lines().find(|l| l.starts_with("##ORIGIN=")).unwrap();
    assert!(origin.ends_with(" QC lab"));
    assert!(text.contains("##XYDATA= (X++(Y..Y))\n400 0.1\n"));
    assert!(text.contains("holmium.sp"));
    assert!(text.ends_with("##END=\n"));
}

#[test]
fn test_convert_legacy_to_csv() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "glass.spc", LEGACY.as_bytes());
    let outcome = convert_file(&input, &ConvertOptions::new(OutputFormat::Csv)).unwrap();
    let text = fs::read_to_string(outcome.output).unwrap();
    assert_eq!(text, "nm,A\n400,0.1\n401,0.2\n402,0.3\n");
}

#[test]
fn test_refuses_to_overwrite_input() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "glass.spc", LEGACY.as_bytes());
    let err = convert_file(&input, &ConvertOptions::new(OutputFormat::Plain)).unwrap_err();
    assert!(matches!(err, ConvertError::WouldOverwrite { .. }));
    assert_eq!(fs::read_to_string(&input).unwrap(), LEGACY);
}

#[test]
fn test_refuses_to_overwrite_through_parent_hop() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "a.spc", LEGACY.as_bytes());
    fs::create_dir(dir.path().join("sub")).unwrap();
    let options = ConvertOptions {
        output_dir: Some(dir.path().join("sub").join("..")),
        ..ConvertOptions::new(OutputFormat::Plain)
    };

    let err = convert_file(&input, &options).unwrap_err();
    assert!(matches!(err, ConvertError::WouldOverwrite { .. }));
    assert_eq!(fs::read_to_string(&input).unwrap(), LEGACY);
}

#[test]
fn test_refuses_to_overwrite_through_current_dir_prefix() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "a.spc", LEGACY.as_bytes());
    let options = ConvertOptions {
        output_dir: Some(dir.path().join(".")),
        ..ConvertOptions::new(OutputFormat::Plain)
    };

    let err = convert_file(&input, &options).unwrap_err();
    assert!(matches!(err, ConvertError::WouldOverwrite { .. }));
    assert_eq!(fs::read_to_string(&input).unwrap(), LEGACY);
}

#[test]
fn test_output_dir_elsewhere_is_not_an_overwrite() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "a.spc", LEGACY.as_bytes());
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let options = ConvertOptions {
        output_dir: Some(out.clone()),
        ..ConvertOptions::new(OutputFormat::Plain)
    };

    let outcome = convert_file(&input, &options).unwrap();
    assert_eq!(outcome.output, out.join("a.spc"));
    assert_eq!(fs::read_to_string(&input).unwrap(), LEGACY);
}

#[test]
fn test_strict_mode_rejects_warnings() {
    let dir = TempDir::new().unwrap();
    let members = MembersBuilder::new()
        .abscissa_range(0.0, 2.0)
        .interval(1.0)
        .y_data(&[1.0, 2.0, 3.0])
        // member header declaring 50 bytes, none present
        .raw(&[0x70, 0x8b, 50, 0, 0, 0]);
    let bytes = ContainerBuilder::new("short").main_block(members).finish();
    let input = write(&dir, "short.sp", &bytes);

    let lenient = read_spectrum(&input, &ConvertOptions::default()).unwrap();
    assert!(lenient.truncated);

    let strict = ConvertOptions {
        strict: true,
        ..ConvertOptions::default()
    };
    let err = read_spectrum(&input, &strict).unwrap_err();
    assert!(matches!(err, ConvertError::Strict { .. }));
}

#[test]
fn test_collect_inputs_sorts_directory() {
    let dir = TempDir::new().unwrap();
    write(&dir, "b.sp", b"");
    write(&dir, "a.asc", b"");
    write(&dir, "notes.txt", b"");
    fs::create_dir(dir.path().join("nested.sp")).unwrap();

    let explicit = PathBuf::from("z.dat");
    let inputs = collect_inputs(&[explicit.clone(), dir.path().to_path_buf()]).unwrap();
    assert_eq!(
        inputs,
        vec![explicit, dir.path().join("a.asc"), dir.path().join("b.sp")]
    );
}

#[test]
fn test_batch_continues_after_failure() {
    let dir = TempDir::new().unwrap();
    let bad = write(&dir, "a_bad.sp", b"NOPE and some bytes");
    let good = write(&dir, "b_good.sp", &sample_file());
    let missing = dir.path().join("c_missing.sp");

    let report = convert_batch(&[bad, good, missing], &ConvertOptions::default());
    assert_eq!(report.entries.len(), 3);
    assert_eq!(report.converted_count(), 1);
    assert_eq!(report.failure_count(), 2);
    assert!(report.has_failures());
    assert!(matches!(report.entries[1], BatchEntry::Converted(_)));
    assert!(dir.path().join("b_good.jdx").exists());

    let summary = report.to_string();
    assert!(summary.contains("1 converted, 0 warnings, 2 failed"));
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"status\":\"failed\""));
}

#[test]
fn test_batch_rejects_shared_stem() {
    let dir = TempDir::new().unwrap();
    let sp = write(&dir, "run.sp", &sample_file());
    let legacy = write(&dir, "run.spc", LEGACY.as_bytes());

    let report = convert_batch(&[sp, legacy], &ConvertOptions::default());
    assert_eq!(report.converted_count(), 1);
    assert_eq!(report.failure_count(), 1);
    assert!(matches!(report.entries[0], BatchEntry::Converted(_)));
    match &report.entries[1] {
        BatchEntry::Failed { input, error } => {
            assert_eq!(input, &dir.path().join("run.spc"));
            assert!(error.contains("already written"));
        }
        other => panic!("expected a failure, got {:?}", other),
    }

    // the first input's output survives
    let text = fs::read_to_string(dir.path().join("run.jdx")).unwrap();
    assert!(text.contains("run.sp"));
    assert!(!text.contains("holmium glass"));
}

#[test]
fn test_batch_rejects_same_name_from_two_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();
    let first = write(&dir, "a/x.spc", LEGACY.as_bytes());
    let second = write(&dir, "b/x.spc", LEGACY.as_bytes());
    let options = ConvertOptions {
        output_dir: Some(dir.path().join("out")),
        ..ConvertOptions::new(OutputFormat::Csv)
    };

    let report = convert_batch(&[first, second], &options);
    assert_eq!(report.converted_count(), 1);
    assert_eq!(report.failure_count(), 1);
    assert!(dir.path().join("out").join("x.csv").exists());
}

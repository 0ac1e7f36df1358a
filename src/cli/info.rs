use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
#[cfg(feature = "colorized_output")]
use console::style;
use serde::Serialize;

use specpod::convert::{read_spectrum, ConvertOptions, InputFormat};
use specpod::outcome::ParseWarning;
use specpod::sp::{SpInspection, SpReader};
use specpod::spectrum::Spectrum;

use super::config::load_options;

/// Summary of a text input
#[derive(Serialize)]
struct TextSummary {
    format: InputFormat,
    points: usize,
    x_unit: String,
    y_unit: String,
    metadata: Vec<(String, String)>,
    warnings: Vec<String>,
}

impl TextSummary {
    fn new(format: InputFormat, spectrum: &Spectrum, warnings: &[ParseWarning]) -> Self {
        Self {
            format,
            points: spectrum.len(),
            x_unit: spectrum.x_unit_name().to_string(),
            y_unit: spectrum.y_unit_name().to_string(),
            metadata: spectrum
                .metadata()
                .iter()
                .filter(|e| !e.is_empty())
                .map(|e| (e.label().to_string(), e.value().to_string()))
                .collect(),
            warnings: warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Settings used to decode for display; warnings are shown, never fatal
fn info_options(config: Option<&Path>) -> Result<ConvertOptions> {
    let mut options = load_options(config)?;
    options.strict = false;
    Ok(options)
}

/// Display the structure of a spectrum file, decoded with the config file's
/// history layout, encoding and sort order when one is given
pub fn run(file: PathBuf, config: Option<PathBuf>, json: bool) -> Result<()> {
    let options = info_options(config.as_deref())?;
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }
    let bytes = std::fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;
    let format = InputFormat::detect(&file, &bytes).context("Unrecognised input")?;

    if format == InputFormat::Sp {
        let outcome = SpReader::new()
            .with_history_layout(options.history.clone())
            .with_sort_order(options.sort_order)
            .inspect(&bytes)
            .context("Failed to decode block file")?;
        if json {
            println!("{}", serde_json::to_string_pretty(&outcome.value)?);
        } else {
            print_inspection(&file, &outcome.value, &outcome.warnings);
        }
        return Ok(());
    }

    let outcome = read_spectrum(&file, &options)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let summary = TextSummary::new(format, &outcome.value, &outcome.warnings);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&file, &summary);
    }
    Ok(())
}

fn heading(text: &str) -> String {
    #[cfg(feature = "colorized_output")]
    {
        style(text).bold().cyan().to_string()
    }
    #[cfg(not(feature = "colorized_output"))]
    {
        text.to_string()
    }
}

fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!("{}", heading("Warnings:"));
    for w in warnings {
        #[cfg(feature = "colorized_output")]
        println!("  {}", style(w).yellow());
        #[cfg(not(feature = "colorized_output"))]
        println!("  {}", w);
    }
    println!();
}

fn print_inspection(file: &Path, inspection: &SpInspection, warnings: &[ParseWarning]) {
    println!("{}", heading("Block File Information"));
    println!("File: {}", file.display());
    println!("Description: {}", inspection.description.trim());
    println!();

    println!("{}", heading("Blocks:"));
    for b in &inspection.blocks {
        println!("  {:>7}  {:<24} {:>8} bytes", b.id, b.name, b.length);
    }
    println!();

    println!("{}", heading("Members:"));
    for m in &inspection.members {
        println!(
            "  {:>7}  {:<20} {:<22} {:>8} bytes",
            m.id,
            m.name,
            m.type_name.as_deref().unwrap_or("-"),
            m.length
        );
    }
    println!();

    let r = &inspection.record;
    println!("{}", heading("Fields:"));
    if let (Some(start), Some(end)) = (r.start_x, r.end_x) {
        println!("  Abscissa range: {} .. {}", start, end);
    }
    if let (Some(min), Some(max)) = (r.min_y, r.max_y) {
        println!("  Ordinate range: {} .. {}", min, max);
    }
    if let Some(v) = r.interval {
        println!("  Interval: {}", v);
    }
    if let Some(v) = r.num_points {
        println!("  Declared points: {}", v);
    }
    println!("  Y values: {}", r.y_values.len());
    for (label, value) in [
        ("Name", &r.name),
        ("Alias", &r.alias),
        ("X label", &r.label_x),
        ("Y label", &r.label_y),
        ("Sampling", &r.sampling),
        ("File type", &r.file_type),
    ] {
        if let Some(v) = value {
            println!("  {}: {}", label, v);
        }
    }
    if let Some(v) = r.checksum {
        println!("  Checksum: {:#010x}", v);
    }
    println!();

    if let Some(fields) = &inspection.history_fields {
        println!("{}", heading("History Fields:"));
        for (label, value) in [
            ("Owner", &fields.owner),
            ("Title", &fields.title),
            ("Model", &fields.instrument_model),
            ("Serial", &fields.serial_number),
            ("Software", &fields.software_id),
            ("Comments", &fields.comments),
            ("Instrument parameters", &fields.instrument_parameters),
            ("Bandpass", &fields.bandpass),
        ] {
            if !value.is_empty() {
                println!("  {}: {}", label, value);
            }
        }
        println!();
    }

    if !r.history.is_empty() {
        println!("{}", heading("History:"));
        for (i, fragment) in r.history.iter().enumerate() {
            println!("  {:3}. {}", i, fragment);
        }
        println!();
    }

    let warnings: Vec<String> = warnings.iter().map(ToString::to_string).collect();
    print_warnings(&warnings);
}

fn print_summary(file: &Path, summary: &TextSummary) {
    println!("{}", heading("Text Export Information"));
    println!("File: {}", file.display());
    println!("Format: {}", summary.format);
    println!("Points: {}", summary.points);
    println!("Units: {} / {}", summary.x_unit, summary.y_unit);
    println!();

    println!("{}", heading("Metadata:"));
    for (label, value) in &summary.metadata {
        println!("  {}: {}", label, value);
    }
    println!();

    print_warnings(&summary.warnings);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_options_follow_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("specpod.toml");
        std::fs::write(
            &path,
            "[conversion]\nstrict = true\nsort_order = \"descending\"\n\n[history]\nmin_fragments = 36\n",
        )
        .unwrap();

        let options = info_options(Some(&path)).unwrap();
        assert_eq!(options.history.min_fragments, 36);
        assert_eq!(options.sort_order, specpod::spectrum::SortOrder::Descending);
        assert!(!options.strict);
    }

    #[test]
    fn test_info_options_default_without_config() {
        let options = info_options(None).unwrap();
        assert_eq!(options.history, specpod::sp::HistoryLayout::default());
    }
}

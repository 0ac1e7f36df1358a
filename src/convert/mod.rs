//! # Conversion Pipeline
//!
//! Ties the readers and writers together:
//!
//! ```text
//! input file -> InputFormat::detect -> reader -> Spectrum -> SpectrumWriter -> output file
//! ```
//!
//! [`convert_file`] handles one input and returns its warnings.
//! [`convert_batch`] runs a list of inputs; a failing file is recorded in the
//! [`BatchReport`] and the loop moves on.

mod error;
mod format;
mod options;
mod report;

#[cfg(test)]
mod tests;

pub use error::ConvertError;
pub use format::{InputFormat, OutputFormat};
pub use options::ConvertOptions;
pub use report::{BatchEntry, BatchReport, FileOutcome};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::ascii::{LegacyReader, PeAsciiReader, TextFile};
use crate::metadata::keys;
use crate::outcome::ParseOutcome;
use crate::sp::{file_creation_time, SpReader};
use crate::spectrum::Spectrum;

/// Read one file in whatever dialect it is written in.
///
/// The configured origin is stored in the metadata. In strict mode any
/// warning fails the read with [`ConvertError::Strict`].
pub fn read_spectrum(
    path: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<ParseOutcome<Spectrum>, ConvertError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let format = InputFormat::detect(path, &bytes)?;
    debug!("{}: detected {}", path.display(), format);

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let created = file_creation_time(path);

    let mut outcome = match format {
        InputFormat::Sp => {
            let mut outcome = SpReader::new()
                .with_history_layout(options.history.clone())
                .with_sort_order(options.sort_order)
                .read_bytes(&bytes)?;
            outcome.value.source_file_name = file_name;
            outcome.value.source_file_creation_date = created;
            outcome
        }
        InputFormat::PeAscii | InputFormat::Legacy => {
            let mut text = TextFile::from_bytes(&bytes, options.encoding);
            text.file_name = file_name;
            text.creation_time = created;
            if format == InputFormat::PeAscii {
                PeAsciiReader::new()
                    .with_sort_order(options.sort_order)
                    .read_file(&text)?
            } else {
                LegacyReader::new()
                    .with_sort_order(options.sort_order)
                    .read_file(&text)?
            }
        }
    };

    if let Some(origin) = &options.origin {
        outcome.value.add_metadata(keys::ORIGIN, origin.as_str());
    }
    if options.strict {
        return outcome.into_strict().map(ParseOutcome::clean);
    }
    Ok(outcome)
}

/// Render a spectrum in the configured output format
pub fn render(spectrum: &Spectrum, options: &ConvertOptions) -> Result<String, ConvertError> {
    let writer = options.output_format.writer(options);
    Ok(writer.render(spectrum)?)
}

/// Convert one file and write the result next to it (or into the output directory)
pub fn convert_file(
    input: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<FileOutcome, ConvertError> {
    let input = input.as_ref();
    let output = options.output_path(input);
    if same_location(input, &output) {
        return Err(ConvertError::WouldOverwrite {
            path: input.to_path_buf(),
        });
    }

    let outcome = read_spectrum(input, options)?;
    let text = render(&outcome.value, options)?;
    fs::write(&output, text)?;
    info!(
        "{} -> {} ({} points)",
        input.display(),
        output.display(),
        outcome.value.len()
    );

    Ok(FileOutcome {
        input: input.to_path_buf(),
        output,
        points: outcome.value.len(),
        warnings: outcome.warnings.iter().map(ToString::to_string).collect(),
        truncated: outcome.truncated,
    })
}

/// Absolute form of a path that may not exist yet.
///
/// Existing paths resolve through symlinks; otherwise the parent directory
/// is resolved and the file name appended. Falls back to the path as given
/// when the parent cannot be resolved either.
fn resolve_output(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// Whether writing `output` would replace `input`
fn same_location(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match fs::canonicalize(input) {
        Ok(resolved) => resolved == resolve_output(output),
        Err(_) => false,
    }
}

/// Expand directories into their recognised files (sorted by name).
///
/// Explicit file arguments are kept in the given order whatever their
/// extension.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>, ConvertError> {
    let mut inputs = Vec::new();
    for path in paths {
        if !path.is_dir() {
            inputs.push(path.clone());
            continue;
        }
        let mut found = Vec::new();
        for entry in fs::read_dir(path)? {
            let candidate = entry?.path();
            if candidate.is_file() && InputFormat::from_extension(&candidate).is_some() {
                found.push(candidate);
            }
        }
        found.sort();
        debug!("{}: {} input files", path.display(), found.len());
        inputs.extend(found);
    }
    Ok(inputs)
}

/// Convert every input; failures are recorded, never propagated.
///
/// An input whose output path was already written earlier in the batch
/// (same stem, or same file name from another directory with an output
/// directory set) fails with [`ConvertError::OutputCollision`] and the
/// earlier output is kept.
pub fn convert_batch(inputs: &[PathBuf], options: &ConvertOptions) -> BatchReport {
    let mut report = BatchReport::new();
    let mut written = HashSet::new();
    for input in inputs {
        let target = resolve_output(&options.output_path(input));
        let result = if written.contains(&target) {
            Err(ConvertError::OutputCollision {
                path: options.output_path(input),
            })
        } else {
            convert_file(input, options)
        };
        match result {
            Ok(outcome) => {
                written.insert(target);
                report.push(BatchEntry::Converted(outcome));
            }
            Err(e) => {
                error!("{}: {}", input.display(), e);
                report.push(BatchEntry::Failed {
                    input: input.clone(),
                    error: e.to_string(),
                });
            }
        }
    }
    report
}

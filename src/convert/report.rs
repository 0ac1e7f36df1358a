use std::fmt;
use std::path::PathBuf;

#[cfg(feature = "colorized_output")]
use console::style;
use serde::Serialize;

/// Result of converting one file
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Input file
    pub input: PathBuf,
    /// Written file
    pub output: PathBuf,
    /// Number of points written
    pub points: usize,
    /// Recoverable problems met while reading, formatted
    pub warnings: Vec<String>,
    /// At least one record stream of the input stopped early
    pub truncated: bool,
}

/// What happened to one input of a batch
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchEntry {
    /// Output written
    Converted(FileOutcome),
    /// Nothing written
    Failed {
        /// Input file
        input: PathBuf,
        /// Error chain, formatted
        error: String,
    },
}

impl BatchEntry {
    /// The input this entry is about
    pub fn input(&self) -> &PathBuf {
        match self {
            BatchEntry::Converted(outcome) => &outcome.input,
            BatchEntry::Failed { input, .. } => input,
        }
    }

    fn warning_count(&self) -> usize {
        match self {
            BatchEntry::Converted(outcome) => outcome.warnings.len(),
            BatchEntry::Failed { .. } => 0,
        }
    }
}

/// Per-file results of a batch conversion, in processing order
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// One entry per input
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one result
    pub fn push(&mut self, entry: BatchEntry) {
        self.entries.push(entry);
    }

    /// Files written
    pub fn converted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, BatchEntry::Converted(_)))
            .count()
    }

    /// Files that could not be converted
    pub fn failure_count(&self) -> usize {
        self.entries.len() - self.converted_count()
    }

    /// Warnings over all converted files
    pub fn warning_count(&self) -> usize {
        self.entries.iter().map(BatchEntry::warning_count).sum()
    }

    /// True if any file failed
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::Emoji;

            static DONE: Emoji<'_, '_> = Emoji("✓", "[OK]");
            static PARTIAL: Emoji<'_, '_> = Emoji("⚠", "[WARN]");
            static FAILED: Emoji<'_, '_> = Emoji("✗", "[FAIL]");

            let mut out = String::new();
            for entry in &self.entries {
                match entry {
                    BatchEntry::Converted(o) if o.warnings.is_empty() => {
                        out.push_str(&format!(
                            "[{}] {} -> {}\n",
                            DONE,
                            style(o.input.display()).green(),
                            o.output.display()
                        ));
                    }
                    BatchEntry::Converted(o) => {
                        out.push_str(&format!(
                            "[{}] {} -> {} ({} warnings{})\n",
                            PARTIAL,
                            style(o.input.display()).yellow(),
                            o.output.display(),
                            o.warnings.len(),
                            if o.truncated { ", truncated" } else { "" }
                        ));
                    }
                    BatchEntry::Failed { input, error } => {
                        out.push_str(&format!(
                            "[{}] {} - {}\n",
                            FAILED,
                            style(input.display()).red(),
                            style(error).red().bold()
                        ));
                    }
                }
            }
            out.push_str(&format!(
                "\n{}: {} converted, {} warnings, {} failed\n",
                style("Summary").bold(),
                style(self.converted_count()).green(),
                style(self.warning_count()).yellow(),
                style(self.failure_count()).red()
            ));
            out
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match entry {
                BatchEntry::Converted(o) => {
                    write!(f, "[OK] {} -> {}", o.input.display(), o.output.display())?;
                    if !o.warnings.is_empty() {
                        write!(f, " ({} warnings)", o.warnings.len())?;
                    }
                    writeln!(f)?;
                }
                BatchEntry::Failed { input, error } => {
                    writeln!(f, "[FAIL] {} - {}", input.display(), error)?;
                }
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} converted, {} warnings, {} failed",
            self.converted_count(),
            self.warning_count(),
            self.failure_count()
        )
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use specpod::ascii::TextEncoding;
use specpod::convert::{collect_inputs, convert_batch, ConvertOptions, OutputFormat};
use specpod::spectrum::SortOrder;

use super::config::load_options;

/// Flags of the convert command; `None` leaves the config file value
pub struct ConvertArgs {
    pub inputs: Vec<PathBuf>,
    pub format: Option<OutputFormat>,
    pub config: Option<PathBuf>,
    pub strict: bool,
    pub no_justify: bool,
    pub max_line_length: Option<usize>,
    pub x_factor: Option<f64>,
    pub y_factor: Option<f64>,
    pub encoding: Option<TextEncoding>,
    pub origin: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub output_dir: Option<PathBuf>,
    pub json: bool,
}

impl ConvertArgs {
    fn options(&self) -> Result<ConvertOptions> {
        let mut options = load_options(self.config.as_deref())?;

        if let Some(v) = self.format {
            options.output_format = v;
        }
        if self.strict {
            options.strict = true;
        }
        if self.no_justify {
            options.render.justify = false;
        }
        if let Some(v) = self.max_line_length {
            options.render.max_line_length = v;
        }
        if let Some(v) = self.x_factor {
            options.x_factor = v;
        }
        if let Some(v) = self.y_factor {
            options.y_factor = v;
        }
        if let Some(v) = self.encoding {
            options.encoding = v;
        }
        if let Some(v) = &self.origin {
            options.origin = Some(v.clone());
        }
        if let Some(v) = self.sort_order {
            options.sort_order = v;
        }
        if let Some(v) = &self.output_dir {
            options.output_dir = Some(v.clone());
        }
        Ok(options)
    }
}

/// Convert every input; exits non-zero when a file failed
pub fn run(args: ConvertArgs) -> Result<()> {
    let options = args.options()?;

    if let Some(dir) = &options.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let inputs = collect_inputs(&args.inputs).context("Failed to list input files")?;
    if inputs.is_empty() {
        anyhow::bail!("No input files found");
    }

    info!("specpod convert");
    info!("===============");
    info!("Inputs: {}", inputs.len());
    info!("Format: {}", options.output_format);
    if options.strict {
        info!("Strict mode: warnings fail a file");
    }

    let report = convert_batch(&inputs, &options);

    if args.json {
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", text);
    } else {
        print!("{}", report.format_colored());
    }

    if report.has_failures() {
        anyhow::bail!(
            "{} of {} files failed to convert",
            report.failure_count(),
            report.entries.len()
        );
    }
    Ok(())
}

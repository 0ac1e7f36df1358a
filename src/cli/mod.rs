use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use specpod::ascii::TextEncoding;
use specpod::convert::OutputFormat;
use specpod::spectrum::SortOrder;

mod config;
mod convert;
mod info;

use convert::ConvertArgs;

/// specpod - PerkinElmer spectrum file converter
#[derive(Parser)]
#[command(name = "specpod")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output document type
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// JCAMP-DX 4.24 (.jdx)
    Jcamp,
    /// `label = value` header and x y data (.spc)
    Plain,
    /// Two-column CSV (.csv)
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Jcamp => OutputFormat::Jcamp,
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// Point order of the written data
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortOrderArg {
    /// As stored in the input
    None,
    /// Increasing x
    Ascending,
    /// Decreasing x
    Descending,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::None => SortOrder::None,
            SortOrderArg::Ascending => SortOrder::Ascending,
            SortOrderArg::Descending => SortOrder::Descending,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert spectrum files (directories are expanded)
    Convert {
        /// Input files or directories
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum)]
        format: Option<FormatArg>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Fail a file on any parse warning
        #[arg(long)]
        strict: bool,

        /// Do not pad header labels
        #[arg(long)]
        no_justify: bool,

        /// Cut interchange lines longer than this (0 disables)
        #[arg(long)]
        max_line_length: Option<usize>,

        /// JCAMP x factor
        #[arg(long)]
        x_factor: Option<f64>,

        /// JCAMP y factor
        #[arg(long)]
        y_factor: Option<f64>,

        /// Code page of text inputs (utf-8, latin-1)
        #[arg(short = 'e', long)]
        encoding: Option<TextEncoding>,

        /// Value of the Origin record
        #[arg(long)]
        origin: Option<String>,

        /// Point order
        #[arg(long, value_enum)]
        sort_order: Option<SortOrderArg>,

        /// Write outputs into this directory
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the structure and decoded fields of an input file
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Load settings (history layout, encoding, sort order) from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            inputs,
            format,
            config,
            strict,
            no_justify,
            max_line_length,
            x_factor,
            y_factor,
            encoding,
            origin,
            sort_order,
            output_dir,
            json,
        } => convert::run(ConvertArgs {
            inputs,
            format: format.map(OutputFormat::from),
            config,
            strict,
            no_justify,
            max_line_length,
            x_factor,
            y_factor,
            encoding,
            origin,
            sort_order: sort_order.map(SortOrder::from),
            output_dir,
            json,
        }),
        Commands::Info { file, config, json } => info::run(file, config, json),
    }
}

//! # specpod
//!
//! Command-line converter for PerkinElmer spectrum files.
//!
//! ## Usage
//!
//! ```bash
//! # Convert one file to JCAMP-DX next to it
//! specpod convert holmium.sp
//!
//! # Convert a directory to CSV into another directory
//! specpod convert -f csv -o out/ exports/
//!
//! # Dump the block structure of a binary file
//! specpod info holmium.sp --json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}

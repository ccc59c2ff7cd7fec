//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod pack;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Gridsheet - Pack a directory of PNG sprites into an irregular-grid spritesheet
#[derive(Parser)]
#[command(name = "gridsheet")]
#[command(about = "Gridsheet - Pack PNG images into a grid spritesheet with a position manifest")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack all PNG images in a directory into a spritesheet and manifest
    Pack {
        /// Directory containing the source PNG images
        input: PathBuf,

        /// Output spritesheet path (default: spritesheet.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Manifest output path (default: {output stem}_manifest.{txt|json})
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Number of grid columns
        #[arg(short, long, default_value = "6")]
        columns: u32,

        /// Uniform scale factor applied to every image
        #[arg(short, long, default_value = "0.5")]
        scale: f64,

        /// Manifest format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            input,
            output,
            manifest,
            columns,
            scale,
            format,
        } => pack::run_pack(
            &input,
            output.as_deref(),
            manifest.as_deref(),
            columns,
            scale,
            &format,
        ),
    }
}

//! Command-line arguments for the tick plotter.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use crate::model::volume_mode::VolumeMode;
use clap::Parser;
use tick_common::csv_format::DEFAULT_FILE_NAME;

/// Default chart file written next to the working directory.
pub const DEFAULT_CHART_NAME: &str = "random_tick_data.svg";

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Plot price and volume from a tick CSV file", long_about = None)]
pub struct Args {
    /// Path to the CSV file produced by the generator.
    #[clap(long, default_value = DEFAULT_FILE_NAME)]
    pub input: String,

    /// Path of the SVG chart to write.
    #[clap(long, default_value = DEFAULT_CHART_NAME)]
    pub output: String,

    /// Volume bar strategy: bin large tables automatically, or force raw/binned bars.
    #[clap(long, value_enum, default_value_t = VolumeMode::Auto)]
    pub volume_mode: VolumeMode,
}

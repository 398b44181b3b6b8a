//! Tick Plotter — reads a tick CSV written by the generator and renders a two-panel
//! chart: price as a line on top, volume as bars below. Large tables have their
//! volume summed into fixed-size bins so the chart stays cheap to draw.
//!
//! Usage example (CLI):
//! ```bash
//! tick_plotter --input ./random_tick_data.csv --output ./ticks.svg --volume-mode auto
//! ```
//!
//! A missing input file is reported and the run ends without a chart. Rows are
//! re-sorted by timestamp before drawing.
#![warn(missing_docs)]
mod args;
mod chart;
mod model;

use crate::args::Args;
use crate::chart::render_chart;
use crate::model::volume_bins::VolumeSeries;
use clap::Parser;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use tick_common::tick::sort_by_timestamp;
use tick_common::tick_csv::import_from_path;
use tick_common::{Result, Tick, TickError};

fn main() -> Result<(), TickError> {
    init_logger();
    let args = Args::parse();
    let input = normalize_path(&args.input);
    let output = normalize_path(&args.output);

    let Some(ticks) = load_ticks(&input)? else {
        return Ok(());
    };

    let num_ticks = ticks.len();
    if num_ticks == 0 {
        info!("The CSV file contains no data to plot.");
        return Ok(());
    }
    info!("Successfully loaded {} ticks from {}.", num_ticks, input.display());

    debug!("Volume mode: {}", args.volume_mode);
    let volume = VolumeSeries::from_ticks(&ticks, args.volume_mode);
    match volume.bin_size {
        Some(_) => info!(
            "Volume plotting optimized: using {} aggregated bins instead of {} individual bars.",
            volume.bars.len(),
            num_ticks
        ),
        None => info!("Volume plotted using raw tick data."),
    }

    render_chart(&ticks, &volume, &output)?;
    info!("Chart written to {}", output.display());
    Ok(())
}

/// Read and time-sort the table at `path`.
///
/// Returns `Ok(None)` after reporting a file that cannot be opened or read;
/// decoding errors are propagated.
fn load_ticks(path: &Path) -> Result<Option<Vec<Tick>>, TickError> {
    settle_table(path, import_from_path(path))
}

fn settle_table(
    path: &Path,
    loaded: Result<Vec<Tick>, TickError>,
) -> Result<Option<Vec<Tick>>, TickError> {
    match loaded {
        Ok(ticks) => Ok(Some(sort_by_timestamp(&ticks))),
        Err(e) if e.is_not_found() => {
            error!("ERROR: The file '{}' was not found.", path.display());
            error!("Please ensure the CSV file exists or pass its location with --input.");
            Ok(None)
        }
        Err(e) if e.is_io() => {
            error!("ERROR: The file '{}' could not be read: {}", path.display(), e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

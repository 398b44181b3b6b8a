//! Synthetic tick data generator.
//!
//! This binary builds a table of synthetic market ticks (timestamp, price, volume)
//! and writes it to a CSV file. Internally, it wires together:
//!
//! - `Args` / `GeneratorConfig` — defaults, an optional JSON config file, and CLI
//!   overrides, resolved into one validated configuration.
//! - `TickGenerator` — draws the price walk, timestamps and volumes for the whole
//!   table in one batch and assembles them into `Tick` rows.
//! - `tick_common::tick_csv` — writes the table as `timestamp,price,volume` text.
//!
//! Error policy:
//! - Invalid parameters abort the run with a `TickError` before anything is written.
//! - A failure while saving the file is logged and the run ends without a retry.
//!
//! Usage example (CLI):
//! ```bash
//! tick_generator --num-ticks 100000 --seed 42 --output ticks.csv
//! ```
#![warn(missing_docs)]
use crate::args::Args;
use crate::model::tick_generator::TickGenerator;
use clap::Parser;
use log::{debug, error, info};
use tick_common::csv_format::format_timestamp;
use tick_common::tick_csv::export_to_path;
use tick_common::{Result, Tick, TickError};

mod args;
mod config;
pub mod model;

/// Number of rows echoed after a successful save.
const PREVIEW_ROWS: usize = 5;

fn main() -> Result<(), TickError> {
    init_logger();
    let config = Args::parse().into_config()?;
    debug!("Generator config: {:?}", config);

    let mut generator = TickGenerator::new(config)?;
    let ticks = generator.generate()?;
    let output = &generator.config().output;

    match export_to_path(output, &ticks) {
        Ok(()) => {
            info!(
                "Successfully generated and saved {} ticks to {}",
                ticks.len(),
                output.display()
            );
            log_preview(&ticks);
        }
        Err(e) => error!("An error occurred while saving the file: {}", e),
    }
    Ok(())
}

/// Log the first few rows of the table.
fn log_preview(ticks: &[Tick]) {
    info!("First {} rows of the generated data:", PREVIEW_ROWS);
    info!("{:>5}  {:<23}  {:>12}  {:>6}", "", "timestamp", "price", "volume");
    for (idx, tick) in ticks.iter().take(PREVIEW_ROWS).enumerate() {
        info!(
            "{:>5}  {:<23}  {:>12.6}  {:>6}",
            idx,
            format_timestamp(&tick.timestamp),
            tick.price,
            tick.volume
        );
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

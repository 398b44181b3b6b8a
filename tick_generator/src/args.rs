//! Command-line arguments for the tick generator.
//!
//! Every flag is optional. Values are layered: built-in defaults, then the
//! JSON file given with `--config`, then any flag passed explicitly.
use crate::config::GeneratorConfig;
use chrono::NaiveDateTime;
use clap::Parser;
use std::path::PathBuf;
use tick_common::TickError;
use tick_common::csv_format::parse_timestamp;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Generate synthetic tick data as CSV", long_about = None)]
pub struct Args {
    /// JSON file with generator settings.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Number of ticks to generate.
    #[clap(long)]
    pub num_ticks: Option<usize>,

    /// Start time, e.g. "2023-10-26 09:30:00".
    #[clap(long, value_parser = parse_start_time)]
    pub start_time: Option<NaiveDateTime>,

    /// Starting price of the random walk.
    #[clap(long)]
    pub base_price: Option<f64>,

    /// Standard deviation of each price step.
    #[clap(long)]
    pub price_std_dev: Option<f64>,

    /// Maximum volume of a single tick.
    #[clap(long)]
    pub max_volume: Option<u32>,

    /// Seed for reproducible output.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Output CSV path.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Resolve the final generator config.
    pub fn into_config(self) -> Result<GeneratorConfig, TickError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(num_ticks) = self.num_ticks {
            config.num_ticks = num_ticks;
        }
        if let Some(start_time) = self.start_time {
            config.start_time = start_time;
        }
        if let Some(base_price) = self.base_price {
            config.base_price = base_price;
        }
        if let Some(price_std_dev) = self.price_std_dev {
            config.price_std_dev = price_std_dev;
        }
        if let Some(max_volume) = self.max_volume {
            config.max_volume = max_volume;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        Ok(config)
    }
}

fn parse_start_time(raw: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(raw).map_err(|e| e.to_string())
}

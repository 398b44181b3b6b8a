//! Generation parameters.
//!
//! `GeneratorConfig` carries everything a run needs: how many ticks, where the
//! clock starts, the random-walk parameters, the volume bound, an optional RNG
//! seed, and the output file. Defaults reproduce the classic one-million-tick
//! data set. A config can also be loaded from a JSON file; missing fields fall
//! back to their defaults.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tick_common::TickError;
use tick_common::csv_format::DEFAULT_FILE_NAME;

/// Number of ticks produced by default.
pub const DEFAULT_NUM_TICKS: usize = 1_000_000;
/// Price the walk starts from by default.
pub const DEFAULT_BASE_PRICE: f64 = 100.00;
/// Default standard deviation of a single price increment.
pub const DEFAULT_PRICE_STD_DEV: f64 = 0.5;
/// Default upper bound (inclusive) of a tick's volume.
pub const DEFAULT_MAX_VOLUME: u32 = 500;

/// Parameters of a single generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of ticks to generate.
    pub num_ticks: usize,
    /// Instant the first delay is added to.
    pub start_time: NaiveDateTime,
    /// Starting level of the price walk.
    pub base_price: f64,
    /// Standard deviation of each Gaussian price increment.
    pub price_std_dev: f64,
    /// Largest volume a tick may carry.
    pub max_volume: u32,
    /// RNG seed; `None` draws one from the operating system.
    pub seed: Option<u64>,
    /// File the tick table is written to.
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_ticks: DEFAULT_NUM_TICKS,
            start_time: default_start_time(),
            base_price: DEFAULT_BASE_PRICE,
            price_std_dev: DEFAULT_PRICE_STD_DEV,
            max_volume: DEFAULT_MAX_VOLUME,
            seed: None,
            output: PathBuf::from(DEFAULT_FILE_NAME),
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, TickError> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Check the parameters before any random draws happen.
    pub fn validate(&self) -> Result<(), TickError> {
        if !self.base_price.is_finite() {
            return Err(TickError::InvalidArgument(format!(
                "base_price must be finite, got {}",
                self.base_price
            )));
        }
        if !self.price_std_dev.is_finite() || self.price_std_dev < 0.0 {
            return Err(TickError::InvalidArgument(format!(
                "price_std_dev must be finite and non-negative, got {}",
                self.price_std_dev
            )));
        }
        if self.max_volume < 1 {
            return Err(TickError::InvalidArgument(
                "max_volume must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// 2023-10-26 09:30:00, the market open the sample data set starts at.
fn default_start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 10, 26)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap_or_default()
}

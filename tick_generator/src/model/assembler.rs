//! Zips the generated columns into a tick table.

use chrono::NaiveDateTime;
use tick_common::{Tick, TickError};

/// Combine equally long timestamp, price and volume columns into ticks.
///
/// Rows are zipped positionally. Columns of different lengths produce
/// `TickError::LengthMismatch`.
pub fn assemble(
    timestamps: &[NaiveDateTime],
    prices: &[f64],
    volumes: &[u32],
) -> Result<Vec<Tick>, TickError> {
    if timestamps.len() != prices.len() || prices.len() != volumes.len() {
        return Err(TickError::LengthMismatch {
            timestamps: timestamps.len(),
            prices: prices.len(),
            volumes: volumes.len(),
        });
    }

    Ok(timestamps
        .iter()
        .zip(prices)
        .zip(volumes)
        .map(|((timestamp, price), volume)| Tick::new(*timestamp, *price, *volume))
        .collect())
}

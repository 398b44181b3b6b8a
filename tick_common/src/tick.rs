//! Tick record shared between the generator and the plotter.

use chrono::NaiveDateTime;

/// Lowest price a generated tick may carry.
pub const PRICE_FLOOR: f64 = 0.01;

/// One timestamped (price, volume) observation.
///
/// Ticks are plain values; a table of ticks is a `Vec<Tick>` that is never
/// reordered in place. Transformations such as [`sort_by_timestamp`] return
/// a fresh table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Event time with millisecond resolution.
    pub timestamp: NaiveDateTime,
    /// Traded price.
    pub price: f64,
    /// Traded volume.
    pub volume: u32,
}

impl Tick {
    /// Creates a new tick.
    pub fn new(timestamp: NaiveDateTime, price: f64, volume: u32) -> Self {
        Tick {
            timestamp,
            price,
            volume,
        }
    }
}

/// Returns a new table ordered by ascending timestamp.
///
/// The sort is stable, so ticks sharing a timestamp keep their relative order.
pub fn sort_by_timestamp(ticks: &[Tick]) -> Vec<Tick> {
    let mut sorted = ticks.to_vec();
    sorted.sort_by_key(|tick| tick.timestamp);
    sorted
}

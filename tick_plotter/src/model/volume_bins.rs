//! Volume bars for the lower chart panel.
//!
//! Tables above [`BINNING_THRESHOLD`] rows are drawn as contiguous bins of
//! [`TICK_BIN_SIZE`] ticks: the bar is centered on the first timestamp of its bin and
//! its height is the summed volume. Smaller tables get one bar per tick. This
//! only bounds the number of drawn elements; it changes nothing in the data.

use crate::model::volume_mode::VolumeMode;
use chrono::{NaiveDateTime, TimeDelta};
use tick_common::Tick;

/// Row count above which `VolumeMode::Auto` switches to bins.
pub const BINNING_THRESHOLD: usize = 10_000;
/// Ticks summed into one bin.
pub const TICK_BIN_SIZE: usize = 100;
/// Width of a single-tick bar in milliseconds: 0.0001 day.
pub const RAW_BAR_WIDTH_MS: i64 = 8_640;
/// Share of the average bin span a binned bar covers.
const BIN_WIDTH_FILL: f64 = 0.9;

/// One bar of the volume panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeBar {
    /// Center of the bar.
    pub timestamp: NaiveDateTime,
    /// Bar height.
    pub volume: u64,
}

/// Bars plus the presentation details needed to draw them.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSeries {
    /// Bars in ascending time order.
    pub bars: Vec<VolumeBar>,
    /// Horizontal extent of every bar.
    pub bar_width: TimeDelta,
    /// Ticks per bar when binned, `None` for raw bars.
    pub bin_size: Option<usize>,
}

impl VolumeSeries {
    /// Build the volume bars for a time-sorted table.
    pub fn from_ticks(ticks: &[Tick], mode: VolumeMode) -> Self {
        let binned = match mode {
            VolumeMode::Auto => ticks.len() > BINNING_THRESHOLD,
            VolumeMode::Raw => false,
            VolumeMode::Binned => true,
        };

        if binned {
            let bars = aggregate_volume(ticks, TICK_BIN_SIZE);
            let bar_width = binned_bar_width(&bars);
            Self {
                bars,
                bar_width,
                bin_size: Some(TICK_BIN_SIZE),
            }
        } else {
            let bars = ticks
                .iter()
                .map(|tick| VolumeBar {
                    timestamp: tick.timestamp,
                    volume: u64::from(tick.volume),
                })
                .collect();
            Self {
                bars,
                bar_width: TimeDelta::milliseconds(RAW_BAR_WIDTH_MS),
                bin_size: None,
            }
        }
    }

    /// Legend text for the volume panel.
    pub fn label(&self) -> String {
        match self.bin_size {
            Some(size) => format!("Volume (Aggregated {} Ticks)", size),
            None => "Volume".to_string(),
        }
    }

    /// Tallest bar, `0` for an empty series.
    pub fn max_volume(&self) -> u64 {
        self.bars.iter().map(|bar| bar.volume).max().unwrap_or(0)
    }
}

/// Sum volume over contiguous groups of `bin_size` ticks.
///
/// Each bin takes the timestamp of its first tick. The last bin may hold fewer
/// ticks. A `bin_size` of zero is treated as one.
pub fn aggregate_volume(ticks: &[Tick], bin_size: usize) -> Vec<VolumeBar> {
    ticks
        .chunks(bin_size.max(1))
        .map(|bin| VolumeBar {
            timestamp: bin[0].timestamp,
            volume: bin.iter().map(|tick| u64::from(tick.volume)).sum(),
        })
        .collect()
}

/// 90% of the average span between the first and last bin, at least 1 ms.
fn binned_bar_width(bars: &[VolumeBar]) -> TimeDelta {
    let (Some(first), Some(last)) = (bars.first(), bars.last()) else {
        return TimeDelta::milliseconds(RAW_BAR_WIDTH_MS);
    };
    let span_ms = (last.timestamp - first.timestamp).num_milliseconds() as f64;
    let width_ms = span_ms / bars.len() as f64 * BIN_WIDTH_FILL;
    TimeDelta::milliseconds((width_ms.round() as i64).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn at(ms: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 10, 26)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .map(|t| t + TimeDelta::milliseconds(ms))
            .unwrap()
    }

    fn table(n: usize) -> Vec<Tick> {
        (0..n)
            .map(|i| Tick::new(at(i as i64 * 10), 100.0, (i % 7) as u32 + 1))
            .collect()
    }

    #[test]
    fn small_tables_get_one_bar_per_tick() {
        let ticks = table(BINNING_THRESHOLD);
        let series = VolumeSeries::from_ticks(&ticks, VolumeMode::Auto);

        assert_eq!(series.bars.len(), BINNING_THRESHOLD);
        assert_eq!(series.bin_size, None);
        assert_eq!(series.bar_width, TimeDelta::milliseconds(RAW_BAR_WIDTH_MS));
        assert_eq!(series.label(), "Volume");
    }

    #[test]
    fn large_tables_are_binned() {
        let ticks = table(BINNING_THRESHOLD + 1);
        let series = VolumeSeries::from_ticks(&ticks, VolumeMode::Auto);

        assert_eq!(series.bars.len(), 101);
        assert_eq!(series.bin_size, Some(TICK_BIN_SIZE));
        assert_eq!(series.label(), "Volume (Aggregated 100 Ticks)");
        assert_eq!(series.bars[0].timestamp, ticks[0].timestamp);
        assert_eq!(series.bars[100].timestamp, ticks[10_000].timestamp);
        assert_eq!(series.bars[100].volume, u64::from(ticks[10_000].volume));

        // 100 bins starting every 1000 ms -> span 100_000 ms over 101 bars.
        let expected = (100_000.0 / 101.0 * 0.9_f64).round() as i64;
        assert_eq!(series.bar_width, TimeDelta::milliseconds(expected));
    }

    #[test]
    fn mode_overrides_threshold() {
        let small = table(250);
        let binned = VolumeSeries::from_ticks(&small, VolumeMode::Binned);
        assert_eq!(binned.bars.len(), 3);

        let large = table(BINNING_THRESHOLD + 500);
        let raw = VolumeSeries::from_ticks(&large, VolumeMode::Raw);
        assert_eq!(raw.bars.len(), large.len());
    }

    #[test]
    fn bins_sum_volume_and_take_first_timestamp() {
        let ticks = vec![
            Tick::new(at(1), 1.0, 10),
            Tick::new(at(2), 1.0, 20),
            Tick::new(at(3), 1.0, 30),
            Tick::new(at(4), 1.0, 40),
            Tick::new(at(5), 1.0, 50),
        ];
        let bars = aggregate_volume(&ticks, 2);

        assert_eq!(
            bars,
            vec![
                VolumeBar { timestamp: at(1), volume: 30 },
                VolumeBar { timestamp: at(3), volume: 70 },
                VolumeBar { timestamp: at(5), volume: 50 },
            ]
        );
    }

    proptest! {
        #[test]
        fn binning_preserves_total_volume(
            volumes in prop::collection::vec(1u32..=500, 0..1_000),
            bin_size in 1usize..150,
        ) {
            let ticks: Vec<Tick> = volumes
                .iter()
                .enumerate()
                .map(|(i, v)| Tick::new(at(i as i64), 100.0, *v))
                .collect();
            let bars = aggregate_volume(&ticks, bin_size);

            let total: u64 = volumes.iter().map(|v| u64::from(*v)).sum();
            prop_assert_eq!(bars.iter().map(|bar| bar.volume).sum::<u64>(), total);
            prop_assert_eq!(bars.len(), volumes.len().div_ceil(bin_size));
        }
    }

    #[test]
    fn empty_and_single_bin_edge_cases() {
        assert!(aggregate_volume(&[], TICK_BIN_SIZE).is_empty());

        let series = VolumeSeries::from_ticks(&table(5), VolumeMode::Binned);
        assert_eq!(series.bars.len(), 1);
        assert_eq!(series.bar_width, TimeDelta::milliseconds(1));
        assert_eq!(series.max_volume(), 1 + 2 + 3 + 4 + 5);
    }
}

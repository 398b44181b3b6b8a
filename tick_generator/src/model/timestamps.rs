//! Tick timestamp sequencing.
//!
//! Each tick arrives `1..=100` ms after the previous one, so the sequence is
//! `start_time + cumsum(delays)`: strictly increasing and strictly after
//! `start_time`.

use chrono::{NaiveDateTime, TimeDelta};
use rand::Rng;
use tick_common::TickError;

/// Smallest gap between two consecutive ticks, in milliseconds.
pub const MIN_DELAY_MS: i64 = 1;
/// Largest gap between two consecutive ticks, in milliseconds.
pub const MAX_DELAY_MS: i64 = 100;

/// Generate `n` increasing timestamps following `start_time`.
///
/// Returns InvalidArgument when the sequence runs past the last representable
/// date.
pub fn generate_timestamps<R: Rng>(
    rng: &mut R,
    n: usize,
    start_time: NaiveDateTime,
) -> Result<Vec<NaiveDateTime>, TickError> {
    let mut elapsed_ms: i64 = 0;
    (0..n)
        .map(|_| {
            elapsed_ms += rng.random_range(MIN_DELAY_MS..=MAX_DELAY_MS);
            start_time
                .checked_add_signed(TimeDelta::milliseconds(elapsed_ms))
                .ok_or_else(|| {
                    TickError::InvalidArgument(format!(
                        "start time {} leaves no room for {} ticks",
                        start_time, n
                    ))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 10, 26)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    #[test]
    fn empty_request_yields_no_timestamps() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_timestamps(&mut rng, 0, start()).unwrap().is_empty());
    }

    #[test]
    fn gaps_stay_within_delay_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let timestamps = generate_timestamps(&mut rng, 1_000, start()).unwrap();

        let first_gap = (timestamps[0] - start()).num_milliseconds();
        assert!((MIN_DELAY_MS..=MAX_DELAY_MS).contains(&first_gap));
        for pair in timestamps.windows(2) {
            let gap = (pair[1] - pair[0]).num_milliseconds();
            assert!((MIN_DELAY_MS..=MAX_DELAY_MS).contains(&gap));
        }
    }

    #[test]
    fn start_time_near_the_calendar_end_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let late = NaiveDateTime::MAX - TimeDelta::milliseconds(50);
        assert!(matches!(
            generate_timestamps(&mut rng, 10, late),
            Err(TickError::InvalidArgument(_))
        ));
    }

    proptest! {
        #[test]
        fn timestamps_are_strictly_increasing_after_start(seed in any::<u64>(), n in 0usize..2_000) {
            let mut rng = StdRng::seed_from_u64(seed);
            let t0 = start();
            let timestamps = generate_timestamps(&mut rng, n, t0).unwrap();

            prop_assert_eq!(timestamps.len(), n);
            prop_assert!(timestamps.iter().all(|t| *t > t0));
            prop_assert!(timestamps.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

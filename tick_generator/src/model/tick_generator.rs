//! Batch tick table generator.
//!
//! The `TickGenerator` owns a validated `GeneratorConfig` and a random number
//! generator. A call to [`TickGenerator::generate`] materializes the whole
//! table at once:
//!
//! - prices — Gaussian random walk floored at `0.01` (`random_walk`).
//! - timestamps — start time plus cumulative 1..=100 ms delays (`timestamps`).
//! - volumes — uniform draws from `[1, max_volume]` (`volumes`).
//!
//! The three columns are then zipped by the `assembler`. With a seed the run is
//! fully reproducible; without one the RNG is seeded from the OS.

use crate::config::GeneratorConfig;
use crate::model::assembler::assemble;
use crate::model::random_walk::generate_prices;
use crate::model::timestamps::generate_timestamps;
use crate::model::volumes::generate_volumes;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tick_common::{Tick, TickError};

/// Generator for a complete tick table.
pub struct TickGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl TickGenerator {
    /// Validate `config` and prepare the RNG.
    pub fn new(config: GeneratorConfig) -> Result<Self, TickError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    /// Config this generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce a new tick table.
    ///
    /// Each call continues the RNG stream, so two calls on one generator give
    /// different tables.
    pub fn generate(&mut self) -> Result<Vec<Tick>, TickError> {
        let n = self.config.num_ticks;

        let prices = generate_prices(
            &mut self.rng,
            n,
            self.config.base_price,
            self.config.price_std_dev,
        )?;
        let timestamps = generate_timestamps(&mut self.rng, n, self.config.start_time)?;
        let volumes = generate_volumes(&mut self.rng, n, self.config.max_volume)?;
        debug!(
            "Generated columns: {} prices, {} timestamps, {} volumes",
            prices.len(),
            timestamps.len(),
            volumes.len()
        );

        assemble(&timestamps, &prices, &volumes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tick_common::tick::{PRICE_FLOOR, sort_by_timestamp};
    use tick_common::tick_csv::TickCsv;

    fn seeded(num_ticks: usize, seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            num_ticks,
            seed: Some(seed),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn generated_table_honours_invariants() {
        let config = seeded(5_000, 1);
        let mut generator = TickGenerator::new(config.clone()).unwrap();
        let ticks = generator.generate().unwrap();

        assert_eq!(ticks.len(), 5_000);
        assert!(ticks.iter().all(|t| t.price >= PRICE_FLOOR));
        assert!(ticks.iter().all(|t| (1..=config.max_volume).contains(&t.volume)));
        assert!(ticks.iter().all(|t| t.timestamp > config.start_time));
        assert!(ticks.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn same_seed_reproduces_the_table() {
        let a = TickGenerator::new(seeded(300, 77)).unwrap().generate().unwrap();
        let b = TickGenerator::new(seeded(300, 77)).unwrap().generate().unwrap();
        let c = TickGenerator::new(seeded(300, 78)).unwrap().generate().unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn zero_ticks_is_an_empty_table() {
        let ticks = TickGenerator::new(seeded(0, 5)).unwrap().generate().unwrap();
        assert!(ticks.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = GeneratorConfig {
            max_volume: 0,
            ..seeded(10, 1)
        };
        assert!(matches!(
            TickGenerator::new(config),
            Err(TickError::InvalidArgument(_))
        ));
    }

    #[test]
    fn late_start_time_is_an_error_not_a_panic() {
        let config = GeneratorConfig {
            start_time: chrono::NaiveDateTime::MAX - chrono::TimeDelta::milliseconds(50),
            ..seeded(10, 1)
        };
        let mut generator = TickGenerator::new(config).unwrap();
        assert!(matches!(
            generator.generate(),
            Err(TickError::InvalidArgument(_))
        ));
    }

    #[test]
    fn export_then_import_round_trips() {
        let ticks = TickGenerator::new(seeded(2_000, 2024))
            .unwrap()
            .generate()
            .unwrap();

        let mut buf = Vec::new();
        Tick::write_csv(&ticks, &mut buf).unwrap();
        let imported = sort_by_timestamp(&Tick::read_csv(buf.as_slice()).unwrap());

        assert_eq!(imported.len(), ticks.len());
        for (original, back) in ticks.iter().zip(&imported) {
            assert_eq!(back.timestamp, original.timestamp);
            assert_eq!(back.volume, original.volume);
            assert!((back.price - original.price).abs() < 1e-9);
        }
        assert_eq!(sort_by_timestamp(&ticks), ticks);
    }
}

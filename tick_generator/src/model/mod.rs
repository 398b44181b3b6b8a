//! Generation building blocks.
//!
//! - `random_walk` — Gaussian random-walk prices with a hard floor.
//! - `timestamps` — start time plus cumulative random millisecond delays.
//! - `volumes` — uniform per-tick volumes.
//! - `assembler` — zips the three columns into `Tick` rows.
//! - `tick_generator` — runs the whole pipeline from a `GeneratorConfig`.

pub mod assembler;
pub mod random_walk;
pub mod tick_generator;
pub mod timestamps;
pub mod volumes;

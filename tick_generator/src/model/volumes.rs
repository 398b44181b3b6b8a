//! Per-tick volume sampling.

use rand::Rng;
use tick_common::TickError;

/// Draw `n` independent volumes uniformly from `[1, max_volume]`.
///
/// Returns `TickError::InvalidArgument` when `max_volume` is zero.
pub fn generate_volumes<R: Rng>(
    rng: &mut R,
    n: usize,
    max_volume: u32,
) -> Result<Vec<u32>, TickError> {
    if max_volume < 1 {
        return Err(TickError::InvalidArgument(format!(
            "max volume must be at least 1, got {}",
            max_volume
        )));
    }
    Ok((0..n).map(|_| rng.random_range(1..=max_volume)).collect())
}

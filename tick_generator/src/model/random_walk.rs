//! Gaussian random-walk price path.
//!
//! Prices are `base_price + cumsum(N(0, std_dev))`, computed for the whole
//! path at once. The floor of [`PRICE_FLOOR`] is applied to the finished path
//! element by element; a clamped value never feeds back into the running sum,
//! so a walk that dips below the floor and recovers shows the recovery.

use rand::Rng;
use rand_distr::StandardNormal;
use tick_common::TickError;
use tick_common::tick::PRICE_FLOOR;

/// Generate `n` prices starting from `base_price`.
///
/// - n: number of prices to produce; `0` yields an empty path.
/// - base_price: level the walk starts from; must be finite.
/// - std_dev: standard deviation of each increment; must be finite and `>= 0`.
/// - Returns: `n` prices, each `>= PRICE_FLOOR`, or InvalidArgument when the
///   walk leaves the finite range of `f64`.
pub fn generate_prices<R: Rng>(
    rng: &mut R,
    n: usize,
    base_price: f64,
    std_dev: f64,
) -> Result<Vec<f64>, TickError> {
    if !base_price.is_finite() {
        return Err(TickError::InvalidArgument(format!(
            "base price must be finite, got {}",
            base_price
        )));
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(TickError::InvalidArgument(format!(
            "price standard deviation must be finite and non-negative, got {}",
            std_dev
        )));
    }

    let mut level = 0.0;
    let mut prices = Vec::with_capacity(n);
    for step in 0..n {
        let z: f64 = rng.sample(StandardNormal);
        level += z * std_dev;
        let price = base_price + level;
        if !price.is_finite() {
            return Err(TickError::InvalidArgument(format!(
                "price walk overflowed at step {} (base {}, std dev {})",
                step, base_price, std_dev
            )));
        }
        prices.push(price.max(PRICE_FLOOR));
    }
    Ok(prices)
}

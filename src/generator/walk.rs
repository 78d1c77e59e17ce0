//! Reference price random walk

use super::{ensure_non_negative, ensure_positive, standard_normal, GeneratorError};
use rand::Rng;

/// Standard deviation of the relative step used by the dashboard
pub const DEFAULT_WALK_VOLATILITY: f64 = 0.0005;

/// Advance the reference price by one multiplicative step.
///
/// Returns `current * (1 + volatility * z)` with `z ~ N(0, 1)`. Inputs are
/// checked before any randomness is drawn.
pub fn step_price<R: Rng + ?Sized>(
    rng: &mut R,
    current: f64,
    volatility: f64,
) -> Result<f64, GeneratorError> {
    ensure_positive("current", current)?;
    ensure_non_negative("volatility", volatility)?;

    let z = standard_normal(rng);
    Ok(current * (1.0 + volatility * z))
}

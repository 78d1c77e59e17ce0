//! Synthetic order book ladder

use super::{ensure_non_negative, ensure_positive, standard_normal, GeneratorError};
use crate::orderbook::{OrderBookSnapshot, PriceLevel};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Floor applied to every generated level volume
pub const MIN_LEVEL_VOLUME: f64 = 10.0;

/// Per-level decay rate of the liquidity profile
const VOLUME_DECAY: f64 = 0.1;

/// Shape of the generated book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookParams {
    /// Touch-to-touch spread in basis points of the mid price
    pub spread_bps: f64,
    /// Number of levels on each side
    pub levels: usize,
    /// Expected volume at the touch
    pub base_volume: f64,
    /// Relative noise applied to each level's volume
    pub volume_volatility: f64,
}

impl Default for BookParams {
    fn default() -> Self {
        Self {
            spread_bps: 8.0,
            levels: 25,
            base_volume: 1000.0,
            volume_volatility: 0.02,
        }
    }
}

impl BookParams {
    /// Check every field against its documented constraint
    pub fn validate(&self) -> Result<(), GeneratorError> {
        ensure_non_negative("spread_bps", self.spread_bps)?;
        if self.levels == 0 {
            return Err(GeneratorError::InvalidParameter {
                name: "levels",
                reason: "must be >= 1".to_string(),
            });
        }
        ensure_positive("base_volume", self.base_volume)?;
        ensure_non_negative("volume_volatility", self.volume_volatility)
    }
}

/// Build an order book around `mid_price`.
///
/// Level `i` sits `spread / 2 + i * spread / 2` away from the mid on each
/// side, so the book is never crossed while `spread_bps > 0`. Volumes decay
/// as `exp(-0.1 i)` with independent normal noise per level, floored at
/// [`MIN_LEVEL_VOLUME`]. The snapshot echoes `mid_price` rather than
/// recomputing it from the touch.
pub fn build_order_book<R: Rng + ?Sized>(
    rng: &mut R,
    mid_price: f64,
    params: &BookParams,
) -> Result<OrderBookSnapshot, GeneratorError> {
    ensure_positive("mid_price", mid_price)?;
    params.validate()?;

    let spread = mid_price * params.spread_bps / 10_000.0;
    let half_spread = spread / 2.0;
    let tick = spread * 0.5;

    let bids = build_side(rng, params, |i| mid_price - half_spread - i as f64 * tick);
    let asks = build_side(rng, params, |i| mid_price + half_spread + i as f64 * tick);

    Ok(OrderBookSnapshot {
        bids,
        asks,
        mid_price,
    })
}

fn build_side<R, F>(rng: &mut R, params: &BookParams, price_at: F) -> Vec<PriceLevel>
where
    R: Rng + ?Sized,
    F: Fn(usize) -> f64,
{
    let mut cumulative = 0.0;
    (0..params.levels)
        .map(|i| {
            let decay = (-VOLUME_DECAY * i as f64).exp();
            let noise = 1.0 + params.volume_volatility * standard_normal(rng);
            let volume = (params.base_volume * decay * noise).max(MIN_LEVEL_VOLUME);
            cumulative += volume;
            PriceLevel {
                price: price_at(i),
                volume,
                cumulative_volume: cumulative,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_default_dashboard_book() {
        let book = build_order_book(&mut rng(), 100.0, &BookParams::default()).unwrap();

        assert_eq!(book.bids.len(), 25);
        assert_eq!(book.asks.len(), 25);
        assert!((book.bids[0].price - 99.96).abs() < 1e-9);
        assert!((book.asks[0].price - 100.04).abs() < 1e-9);
        assert!(book.bids[24].price < book.bids[0].price);
        assert!(book.asks[24].price > book.asks[0].price);
        assert!(book.best_ask().unwrap() > book.best_bid().unwrap());
        assert_eq!(book.mid_price, 100.0);
    }

    #[test]
    fn test_price_ladder_step() {
        let params = BookParams {
            spread_bps: 10.0,
            levels: 3,
            ..Default::default()
        };
        let book = build_order_book(&mut rng(), 100.0, &params).unwrap();
        // spread = 0.1, step = 0.05
        let bids: Vec<f64> = book.bids.iter().map(|l| l.price).collect();
        let asks: Vec<f64> = book.asks.iter().map(|l| l.price).collect();
        for (got, want) in bids.iter().zip([99.95, 99.90, 99.85]) {
            assert!((got - want).abs() < 1e-9, "bid {} != {}", got, want);
        }
        for (got, want) in asks.iter().zip([100.05, 100.10, 100.15]) {
            assert!((got - want).abs() < 1e-9, "ask {} != {}", got, want);
        }
    }

    #[test]
    fn test_cumulative_volume_is_prefix_sum() {
        let book = build_order_book(&mut rng(), 100.0, &BookParams::default()).unwrap();
        for levels in [&book.bids, &book.asks] {
            let mut sum = 0.0;
            for level in levels.iter() {
                sum += level.volume;
                assert_eq!(level.cumulative_volume, sum);
                assert!(level.volume >= MIN_LEVEL_VOLUME);
            }
        }
    }

    #[test]
    fn test_zero_noise_volume_profile() {
        let params = BookParams {
            levels: 5,
            volume_volatility: 0.0,
            ..Default::default()
        };
        let book = build_order_book(&mut rng(), 100.0, &params).unwrap();
        for (i, level) in book.bids.iter().enumerate() {
            let expected = 1000.0 * (-0.1 * i as f64).exp();
            assert!((level.volume - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_volume_floor() {
        let params = BookParams {
            levels: 80,
            base_volume: 50.0,
            volume_volatility: 0.0,
            ..Default::default()
        };
        let book = build_order_book(&mut rng(), 100.0, &params).unwrap();
        // 50 * exp(-0.1 * 79) is far below the floor
        assert_eq!(book.asks[79].volume, MIN_LEVEL_VOLUME);
        assert!(book.asks.iter().all(|l| l.volume >= MIN_LEVEL_VOLUME));
    }

    #[test]
    fn test_zero_spread_touches_coincide() {
        let params = BookParams {
            spread_bps: 0.0,
            ..Default::default()
        };
        let book = build_order_book(&mut rng(), 100.0, &params).unwrap();
        assert_eq!(book.best_bid(), book.best_ask());
        assert_eq!(book.spread(), Some(0.0));
    }

    #[test]
    fn test_seeded_books_are_identical() {
        let params = BookParams::default();
        let a = build_order_book(&mut rng(), 101.5, &params).unwrap();
        let b = build_order_book(&mut rng(), 101.5, &params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_parameters() {
        let params = BookParams::default();
        assert!(matches!(
            build_order_book(&mut rng(), 0.0, &params),
            Err(GeneratorError::InvalidParameter { name: "mid_price", .. })
        ));
        assert!(matches!(
            build_order_book(&mut rng(), -5.0, &params),
            Err(GeneratorError::InvalidParameter { .. })
        ));

        let no_levels = BookParams {
            levels: 0,
            ..Default::default()
        };
        assert!(matches!(
            build_order_book(&mut rng(), 100.0, &no_levels),
            Err(GeneratorError::InvalidParameter { name: "levels", .. })
        ));

        let negative_spread = BookParams {
            spread_bps: -1.0,
            ..Default::default()
        };
        assert!(build_order_book(&mut rng(), 100.0, &negative_spread).is_err());

        let no_volume = BookParams {
            base_volume: 0.0,
            ..Default::default()
        };
        assert!(build_order_book(&mut rng(), 100.0, &no_volume).is_err());
    }
}

//! Synthetic trade tape

use super::{ensure_non_negative, ensure_positive, standard_normal, GeneratorError};
use crate::trades::{TradeRecord, TradeSide};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Gap between consecutive prints, in seconds
const PRINT_GAP_SECS: Range<f64> = 0.5..3.0;

/// Print volume bounds
const PRINT_VOLUME: Range<f64> = 10.0..500.0;

/// Shape of the generated tape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapeParams {
    /// Number of prints to generate
    pub trade_count: usize,
    /// Relative standard deviation of print prices around the mid
    pub price_volatility: f64,
}

impl Default for TapeParams {
    fn default() -> Self {
        Self {
            trade_count: 10,
            price_volatility: 0.001,
        }
    }
}

impl TapeParams {
    /// Check every field against its documented constraint
    pub fn validate(&self) -> Result<(), GeneratorError> {
        ensure_non_negative("price_volatility", self.price_volatility)
    }
}

/// Build `trade_count` prints ending at `now`, most recent first.
///
/// The newest print is stamped `now`; each later one is a random 0.5s to 3s
/// older than the one before it. Sides and
/// prices are drawn independently of each other and of any order book.
pub fn build_trade_history<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    mid_price: f64,
    params: &TapeParams,
) -> Result<Vec<TradeRecord>, GeneratorError> {
    ensure_positive("mid_price", mid_price)?;
    params.validate()?;

    let mut timestamp = now;
    let mut trades = Vec::with_capacity(params.trade_count);

    for i in 0..params.trade_count {
        if i > 0 {
            let gap_secs = rng.gen_range(PRINT_GAP_SECS);
            timestamp = timestamp - Duration::microseconds((gap_secs * 1_000_000.0) as i64);
        }

        let side = if rng.gen_bool(0.5) {
            TradeSide::Buy
        } else {
            TradeSide::Sell
        };

        let price = mid_price * (1.0 + params.price_volatility * standard_normal(rng));
        let volume = rng.gen_range(PRINT_VOLUME);

        trades.push(TradeRecord::new(
            timestamp,
            side,
            to_decimal("price", price)?,
            to_decimal("volume", volume)?,
        ));
    }

    Ok(trades)
}

fn to_decimal(name: &'static str, value: f64) -> Result<Decimal, GeneratorError> {
    Decimal::try_from(value).map_err(|_| GeneratorError::OutOfRange { name, value })
}

//! Trade tape types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggressor side of a trade print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "BUY"),
            TradeSide::Sell => write!(f, "SELL"),
        }
    }
}

/// A synthetic trade print
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Print time
    pub timestamp: DateTime<Utc>,
    /// Aggressor side
    pub side: TradeSide,
    /// Price, 4 decimal places
    pub price: Decimal,
    /// Volume, 2 decimal places
    pub volume: Decimal,
    /// Notional (price * volume), 2 decimal places
    pub value: Decimal,
}

impl TradeRecord {
    /// Build a record, rounding price, volume and notional to display precision
    pub fn new(timestamp: DateTime<Utc>, side: TradeSide, price: Decimal, volume: Decimal) -> Self {
        let price = price.round_dp(4);
        let volume = volume.round_dp(2);
        Self {
            timestamp,
            side,
            price,
            volume,
            value: (price * volume).round_dp(2),
        }
    }
}

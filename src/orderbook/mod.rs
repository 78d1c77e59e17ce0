//! Order book module
//!
//! Synthetic L2 snapshots consumed by the depth chart

mod book;

pub use book::OrderBookSnapshot;

use serde::{Deserialize, Serialize};

/// A price level in a synthetic order book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Price at this level
    pub price: f64,
    /// Volume resting at this level
    pub volume: f64,
    /// Running sum of volume from the touch up to and including this level
    pub cumulative_volume: f64,
}

/// Side of the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookSide {
    Bid,
    Ask,
}

//! Order book snapshot

use super::{BookSide, PriceLevel};
use serde::{Deserialize, Serialize};

/// One synthetic order book, built fresh each refresh cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// Bid levels, sorted best (highest) to worst
    pub bids: Vec<PriceLevel>,
    /// Ask levels, sorted best (lowest) to worst
    pub asks: Vec<PriceLevel>,
    /// Reference price the book was built around
    pub mid_price: f64,
}

impl OrderBookSnapshot {
    /// Levels for one side
    pub fn levels(&self, side: BookSide) -> &[PriceLevel] {
        match side {
            BookSide::Bid => &self.bids,
            BookSide::Ask => &self.asks,
        }
    }

    /// Get best bid price
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|l| l.price)
    }

    /// Get best ask price
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|l| l.price)
    }

    /// Get spread
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Spread in basis points of the reference price
    pub fn spread_bps(&self) -> Option<f64> {
        if self.mid_price <= 0.0 {
            return None;
        }
        self.spread().map(|s| s / self.mid_price * 10_000.0)
    }

    /// Total volume on one side
    pub fn total_volume(&self, side: BookSide) -> f64 {
        self.levels(side)
            .last()
            .map(|l| l.cumulative_volume)
            .unwrap_or(0.0)
    }

    /// Bid volume share of the visible book, in [0, 1]
    pub fn imbalance(&self) -> Option<f64> {
        let bid = self.total_volume(BookSide::Bid);
        let total = bid + self.total_volume(BookSide::Ask);
        if total > 0.0 {
            Some(bid / total)
        } else {
            None
        }
    }

    /// (price, cumulative volume) pairs for the depth chart
    pub fn depth_points(&self, side: BookSide) -> Vec<(f64, f64)> {
        self.levels(side)
            .iter()
            .map(|l| (l.price, l.cumulative_volume))
            .collect()
    }
}

//! Refresh cycle types

use crate::generator::GeneratorError;
use crate::orderbook::OrderBookSnapshot;
use crate::trades::TradeRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a render sink receives for one refresh cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardFrame {
    /// Cycle number, starting at 1
    pub cycle: u64,
    /// When the frame was generated
    pub generated_at: DateTime<Utc>,
    /// Order book around the current reference price
    pub book: OrderBookSnapshot,
    /// Recent prints, most recent first
    pub trades: Vec<TradeRecord>,
}

/// Outcome of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles generated
    pub cycles: u64,
    /// Cycles the sink rendered successfully
    pub rendered: u64,
    /// Cycles whose render failed
    pub render_failures: u64,
}

/// Driver errors
#[derive(Debug, Error)]
pub enum DriverError {
    /// Generator parameters are invalid; every cycle would fail the same way
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

//! lob-viz: terminal dashboard for a synthetic limit order book
//!
//! This library provides:
//! - A seeded random walk for the reference price
//! - Synthetic order book snapshots with cumulative depth
//! - Synthetic trade tapes
//! - A fixed-interval refresh driver feeding pluggable render sinks
//! - Terminal (ratatui) and JSON sinks
//! - Logging and metrics

pub mod cli;
pub mod config;
pub mod driver;
pub mod generator;
pub mod orderbook;
pub mod sink;
pub mod telemetry;
pub mod trades;

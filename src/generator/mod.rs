//! Synthetic market data generation
//!
//! Every generator takes an explicit random source so runs can be replayed
//! from a seed:
//! - `walk`: multiplicative random walk for the reference price
//! - `book`: order book ladder with a decaying liquidity profile
//! - `tape`: recent trade prints around the reference price

mod book;
mod tape;
mod walk;

pub use book::{build_order_book, BookParams, MIN_LEVEL_VOLUME};
pub use tape::{build_trade_history, TapeParams};
pub use walk::{step_price, DEFAULT_WALK_VOLATILITY};

use rand::Rng;
use rand_distr::StandardNormal;
use thiserror::Error;

/// Generator errors
#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// An input violates its documented constraint
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    /// A generated value cannot be represented in the output type
    #[error("Value out of range for {name}: {value}")]
    OutOfRange { name: &'static str, value: f64 },
}

pub(crate) fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.sample(StandardNormal)
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), GeneratorError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeneratorError::InvalidParameter {
            name,
            reason: format!("must be finite and > 0, got {}", value),
        })
    }
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), GeneratorError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeneratorError::InvalidParameter {
            name,
            reason: format!("must be finite and >= 0, got {}", value),
        })
    }
}

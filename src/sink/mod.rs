//! Render sinks
//!
//! A sink receives one [`DashboardFrame`] per refresh cycle. A failed render
//! only loses that cycle; the driver keeps going.

mod json;
pub mod tui;

pub use json::JsonSink;
pub use tui::{TuiSink, ViewConfig};

use crate::driver::DashboardFrame;
use thiserror::Error;

/// Render sink errors
#[derive(Debug, Error)]
pub enum SinkError {
    /// Terminal or writer I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Frame could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Consumer of dashboard frames
pub trait RenderSink {
    /// Draw or emit one frame
    fn render(&mut self, frame: &DashboardFrame) -> Result<(), SinkError>;

    /// Whether the operator asked to stop. Sinks without input never do.
    fn quit_requested(&mut self) -> Result<bool, SinkError> {
        Ok(false)
    }
}

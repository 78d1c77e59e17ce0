//! Dashboard view state

use crate::driver::DashboardFrame;
use serde::{Deserialize, Serialize};

/// Static labels shown around the live data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub title: String,
    pub asset: String,
    /// Most recent trades shown in the trade table
    pub trade_rows: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "LOB_OPERATOR // NEXUS-EYE".to_string(),
            asset: "BTC/USDT".to_string(),
            trade_rows: 10,
        }
    }
}

/// State drawn by the dashboard
#[derive(Debug, Default)]
pub struct TuiApp {
    pub view: ViewConfig,
    /// Latest frame, None until the first cycle
    pub frame: Option<DashboardFrame>,
    /// Cycles whose render failed so far
    pub render_failures: u64,
}

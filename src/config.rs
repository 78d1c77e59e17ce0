//! Configuration types for lob-viz

use crate::generator::{BookParams, TapeParams, DEFAULT_WALK_VOLATILITY};
use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub book: BookParams,
    #[serde(default)]
    pub trades: TapeParams,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Refresh loop and presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Header title
    #[serde(default = "default_title")]
    pub title: String,

    /// Asset label shown in the header
    #[serde(default = "default_asset")]
    pub asset: String,

    /// Pause between refresh cycles (milliseconds)
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Reference price on process start
    #[serde(default = "default_initial_price")]
    pub initial_price: f64,

    /// Seed for the random source; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Rows shown in the trade table
    #[serde(default = "default_trade_rows")]
    pub trade_rows: usize,
}

fn default_title() -> String {
    "LOB_OPERATOR // NEXUS-EYE".to_string()
}
fn default_asset() -> String {
    "BTC/USDT".to_string()
}
fn default_refresh_interval_ms() -> u64 {
    1500
}
fn default_initial_price() -> f64 {
    100.0
}
fn default_trade_rows() -> usize {
    10
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            asset: default_asset(),
            refresh_interval_ms: default_refresh_interval_ms(),
            initial_price: default_initial_price(),
            seed: None,
            trade_rows: default_trade_rows(),
        }
    }
}

impl DashboardConfig {
    /// Pause between refresh cycles
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

/// Reference price walk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Standard deviation of the relative step per cycle
    #[serde(default = "default_walk_volatility")]
    pub volatility: f64,
}

fn default_walk_volatility() -> f64 {
    DEFAULT_WALK_VOLATILITY
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            volatility: DEFAULT_WALK_VOLATILITY,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Log file; the terminal dashboard only logs when this is set
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Prometheus exporter port; no listener is started when absent
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            log_file: None,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

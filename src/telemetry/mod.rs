//! Telemetry module
//!
//! Logging and metrics

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat, LogTarget};
pub use metrics::{
    increment, init_metrics, record_latency, set_gauge, CounterMetric, GaugeMetric, LatencyMetric,
};

use crate::config::TelemetryConfig;

/// Guard that cleans up telemetry on drop
pub struct TelemetryGuard {
    _priv: (),
}

/// Pick the log target for a run: the configured file, else stderr unless
/// the terminal is taken over by the dashboard
pub fn log_target(config: &TelemetryConfig, owns_terminal: bool) -> LogTarget {
    match (&config.log_file, owns_terminal) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Discard,
        (None, false) => LogTarget::Stderr,
    }
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig, target: &LogTarget) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format, target)?;

    if let Some(port) = config.metrics_port {
        init_metrics(port)?;
    }

    Ok(TelemetryGuard { _priv: () })
}

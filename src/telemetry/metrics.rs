//! Prometheus metrics

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Generation plus render of one refresh cycle
    Cycle,
    /// Render sink only
    Render,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Current reference price
    ReferencePrice,
    /// Touch spread in basis points
    SpreadBps,
    /// Bid share of visible book volume
    BookImbalance,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Completed refresh cycles
    Cycles,
    /// Cycles whose render failed
    RenderFailures,
}

/// Install the Prometheus exporter on `port`
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;
    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::Cycle => "lobviz_cycle_duration_ms",
        LatencyMetric::Render => "lobviz_render_duration_ms",
    };

    ::metrics::histogram!(metric_name).record(duration.as_secs_f64() * 1_000.0);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let metric_name = match metric {
        GaugeMetric::ReferencePrice => "lobviz_reference_price",
        GaugeMetric::SpreadBps => "lobviz_spread_bps",
        GaugeMetric::BookImbalance => "lobviz_book_imbalance",
    };

    ::metrics::gauge!(metric_name).set(value);
}

/// Increment a counter
pub fn increment(metric: CounterMetric) {
    let metric_name = match metric {
        CounterMetric::Cycles => "lobviz_cycles_total",
        CounterMetric::RenderFailures => "lobviz_render_failures_total",
    };

    ::metrics::counter!(metric_name).increment(1);
}

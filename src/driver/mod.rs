//! Refresh cycle driver
//!
//! Owns the reference price and the random source. Each cycle advances the
//! price, builds a book and a tape around it, hands the frame to a render
//! sink, then pauses for the refresh interval.

mod types;

pub use types::{DashboardFrame, DriverError, RunSummary};

use crate::config::Config;
use crate::generator::{
    build_order_book, build_trade_history, ensure_non_negative, ensure_positive, step_price,
    BookParams, TapeParams,
};
use crate::sink::RenderSink;
use crate::telemetry::{self, CounterMetric, GaugeMetric, LatencyMetric};
use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

/// How often the pause between cycles checks the sink for a quit request
const INPUT_POLL_SLICE: Duration = Duration::from_millis(50);

/// Generator and pacing settings for a driver
#[derive(Debug, Clone, PartialEq)]
pub struct DriverSettings {
    pub initial_price: f64,
    pub walk_volatility: f64,
    pub book: BookParams,
    pub tape: TapeParams,
    pub refresh_interval: Duration,
}

impl From<&Config> for DriverSettings {
    fn from(config: &Config) -> Self {
        Self {
            initial_price: config.dashboard.initial_price,
            walk_volatility: config.walk.volatility,
            book: config.book.clone(),
            tape: config.trades.clone(),
            refresh_interval: config.dashboard.refresh_interval(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Refresh cycle driver
pub struct Driver<R = ChaCha8Rng> {
    settings: DriverSettings,
    reference_price: f64,
    cycle: u64,
    rng: R,
}

impl Driver<ChaCha8Rng> {
    /// Build a driver from configuration, seeding from `seed` or entropy
    pub fn from_config(config: &Config, seed: Option<u64>) -> Result<Self, DriverError> {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(DriverSettings::from(config), rng)
    }
}

impl<R: Rng> Driver<R> {
    /// Create a driver, rejecting invalid settings before any cycle runs
    pub fn new(settings: DriverSettings, rng: R) -> Result<Self, DriverError> {
        ensure_positive("initial_price", settings.initial_price)?;
        ensure_non_negative("walk_volatility", settings.walk_volatility)?;
        settings.book.validate()?;
        settings.tape.validate()?;

        Ok(Self {
            reference_price: settings.initial_price,
            settings,
            cycle: 0,
            rng,
        })
    }

    /// Current reference price
    pub fn reference_price(&self) -> f64 {
        self.reference_price
    }

    /// Cycles generated so far
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Advance the reference price and build the next frame
    pub fn next_frame(&mut self, now: DateTime<Utc>) -> Result<DashboardFrame, DriverError> {
        let stepped = step_price(
            &mut self.rng,
            self.reference_price,
            self.settings.walk_volatility,
        )?;
        if stepped.is_finite() && stepped > 0.0 {
            self.reference_price = stepped;
        } else {
            tracing::warn!(
                previous = self.reference_price,
                stepped,
                "Random walk left the positive range, keeping previous price"
            );
        }

        let book = build_order_book(&mut self.rng, self.reference_price, &self.settings.book)?;
        let trades = build_trade_history(
            &mut self.rng,
            now,
            self.reference_price,
            &self.settings.tape,
        )?;

        self.cycle += 1;
        Ok(DashboardFrame {
            cycle: self.cycle,
            generated_at: now,
            book,
            trades,
        })
    }

    /// Run refresh cycles until Ctrl-C, a sink quit request, or
    /// `max_cycles` frames have been generated.
    ///
    /// A failed render is logged and counted; the next cycle still runs.
    pub async fn run<S: RenderSink>(
        &mut self,
        sink: &mut S,
        max_cycles: Option<u64>,
    ) -> Result<RunSummary, DriverError> {
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        let mut summary = RunSummary::default();
        tracing::info!(
            reference_price = self.reference_price,
            interval_ms = self.settings.refresh_interval.as_millis() as u64,
            "Starting refresh loop"
        );

        loop {
            let started = Instant::now();
            let frame = self.next_frame(Utc::now())?;
            summary.cycles += 1;

            tracing::debug!(
                cycle = frame.cycle,
                reference_price = frame.book.mid_price,
                best_bid = ?frame.book.best_bid(),
                best_ask = ?frame.book.best_ask(),
                trades = frame.trades.len(),
                "Generated frame"
            );

            let render_started = Instant::now();
            match sink.render(&frame) {
                Ok(()) => summary.rendered += 1,
                Err(e) => {
                    summary.render_failures += 1;
                    telemetry::increment(CounterMetric::RenderFailures);
                    tracing::warn!(cycle = frame.cycle, error = %e, "Render failed, skipping cycle");
                }
            }
            telemetry::record_latency(LatencyMetric::Render, render_started.elapsed());
            record_frame_metrics(&frame);
            telemetry::record_latency(LatencyMetric::Cycle, started.elapsed());

            if max_cycles.is_some_and(|max| summary.cycles >= max) {
                break;
            }
            if self.pause(sink, shutdown.as_mut()).await == Flow::Stop {
                break;
            }
        }

        tracing::info!(
            cycles = summary.cycles,
            render_failures = summary.render_failures,
            "Refresh loop stopped"
        );
        Ok(summary)
    }

    async fn pause<S, F>(&self, sink: &mut S, mut shutdown: Pin<&mut F>) -> Flow
    where
        S: RenderSink,
        F: Future<Output = std::io::Result<()>>,
    {
        let deadline = tokio::time::Instant::now() + self.settings.refresh_interval;
        loop {
            match sink.quit_requested() {
                Ok(true) => {
                    tracing::info!("Quit requested by operator");
                    return Flow::Stop;
                }
                Ok(false) => {}
                Err(e) => tracing::warn!(error = %e, "Failed to poll sink input"),
            }

            let now = tokio::time::Instant::now();
            if now >= deadline {
                return Flow::Continue;
            }
            let slice = (deadline - now).min(INPUT_POLL_SLICE);

            tokio::select! {
                _ = tokio::time::sleep(slice) => {}
                res = shutdown.as_mut() => {
                    if let Err(e) = res {
                        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
                    }
                    tracing::info!("Shutdown signal received");
                    return Flow::Stop;
                }
            }
        }
    }
}

fn record_frame_metrics(frame: &DashboardFrame) {
    telemetry::increment(CounterMetric::Cycles);
    telemetry::set_gauge(GaugeMetric::ReferencePrice, frame.book.mid_price);
    if let Some(bps) = frame.book.spread_bps() {
        telemetry::set_gauge(GaugeMetric::SpreadBps, bps);
    }
    if let Some(imbalance) = frame.book.imbalance() {
        telemetry::set_gauge(GaugeMetric::BookImbalance, imbalance);
    }
}

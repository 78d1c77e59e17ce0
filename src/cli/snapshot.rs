//! Snapshot command implementation

use crate::config::Config;
use crate::driver::Driver;
use crate::sink::{JsonSink, RenderSink};
use chrono::Utc;
use clap::Args;
use std::io;

#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Seed for the random source (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print on a single line
    #[arg(long)]
    pub compact: bool,
}

impl SnapshotArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut driver = Driver::from_config(config, self.seed.or(config.dashboard.seed))?;
        let frame = driver.next_frame(Utc::now())?;

        let mut sink = JsonSink::new(io::stdout().lock(), !self.compact);
        sink.render(&frame)?;
        Ok(())
    }
}

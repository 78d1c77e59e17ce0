//! Stream command implementation

use crate::config::Config;
use crate::driver::Driver;
use crate::sink::JsonSink;
use clap::Args;
use std::io;

#[derive(Args, Debug)]
pub struct StreamArgs {
    /// Stop after this many refresh cycles
    #[arg(long)]
    pub cycles: Option<u64>,

    /// Seed for the random source (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pretty-print each frame
    #[arg(long)]
    pub pretty: bool,
}

impl StreamArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut driver = Driver::from_config(config, self.seed.or(config.dashboard.seed))?;
        let mut sink = JsonSink::new(io::stdout().lock(), self.pretty);

        let summary = driver.run(&mut sink, self.cycles).await?;
        tracing::info!(
            cycles = summary.cycles,
            render_failures = summary.render_failures,
            "Stream finished"
        );
        Ok(())
    }
}

//! Run command implementation

use crate::config::Config;
use crate::driver::Driver;
use crate::sink::{TuiSink, ViewConfig};
use clap::Args;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Stop after this many refresh cycles
    #[arg(long)]
    pub cycles: Option<u64>,

    /// Seed for the random source (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut driver = Driver::from_config(config, self.seed.or(config.dashboard.seed))?;
        let view = ViewConfig {
            title: config.dashboard.title.clone(),
            asset: config.dashboard.asset.clone(),
            trade_rows: config.dashboard.trade_rows,
        };

        // Setup terminal
        enable_raw_mode()?;
        let terminal = cleanup_on_err(enter_alternate_screen(), || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;
        let mut sink = TuiSink::new(terminal, view, true);

        let result = driver.run(&mut sink, self.cycles).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(sink.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
        sink.terminal_mut().show_cursor()?;

        let summary = result?;
        tracing::info!(
            cycles = summary.cycles,
            render_failures = summary.render_failures,
            "Dashboard closed"
        );
        Ok(())
    }
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Run `cleanup` if `result` is an error, then return it unchanged
fn cleanup_on_err<T, E>(result: Result<T, E>, cleanup: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        cleanup();
    }
    result
}

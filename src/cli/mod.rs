//! CLI interface for lob-viz
//!
//! Provides subcommands for:
//! - `run`: Full-screen terminal dashboard
//! - `stream`: Headless JSON frames on stdout
//! - `snapshot`: One frame as JSON
//! - `config`: Show the effective configuration

mod run;
mod snapshot;
mod stream;

pub use run::RunArgs;
pub use snapshot::SnapshotArgs;
pub use stream::StreamArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lob-viz")]
#[command(about = "Synthetic limit order book dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the terminal dashboard
    Run(RunArgs),
    /// Emit one JSON frame per refresh cycle on stdout
    Stream(StreamArgs),
    /// Generate a single frame and print it
    Snapshot(SnapshotArgs),
    /// Show configuration
    Config,
}

impl Commands {
    /// Whether the command takes over the terminal
    pub fn owns_terminal(&self) -> bool {
        matches!(self, Commands::Run(_))
    }
}

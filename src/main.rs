use clap::Parser;
use lob_viz::cli::{Cli, Commands};
use lob_viz::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let target = lob_viz::telemetry::log_target(&config.telemetry, cli.command.owns_terminal());
    let _telemetry = lob_viz::telemetry::init_telemetry(&config.telemetry, &target)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting dashboard");
            args.execute(&config).await?;
        }
        Commands::Stream(args) => {
            tracing::info!("Starting headless stream");
            args.execute(&config).await?;
        }
        Commands::Snapshot(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

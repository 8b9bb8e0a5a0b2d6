use clap::Parser;
use dcf_valuer::cli::{Cli, Commands};
use dcf_valuer::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if std::path::Path::new(&cli.config).exists() {
        Config::load(&cli.config)?
    } else {
        eprintln!("Warning: {} not found, using default configuration", cli.config);
        Config::default()
    };

    // Initialize telemetry
    dcf_valuer::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Value(args) => {
            tracing::debug!(?args, "Running valuation");
            args.execute(&config)?;
        }
        Commands::Grid(args) => {
            tracing::debug!(?args, "Building sensitivity grid");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
use commands::{detectors, scan, scan::ScanArgs};

#[derive(Parser)]
#[command(name = "kansa")]
#[command(about = "ERC20 heuristic detectors over a host analysis snapshot")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the detectors over an exported snapshot
    Scan(ScanArgs),

    /// List the registered detectors and their metadata
    Detectors,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => scan::execute(args),
        Commands::Detectors => detectors::execute(),
    }
}

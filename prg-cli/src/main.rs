mod commands;
mod config;

use clap::{Parser, Subcommand};
use prg_core::PrgError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "prg")]
#[command(about = "PRG betting game tracker")]
#[command(version)]
struct Cli {
    /// Data directory for per-peer state and record files
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a stream of round observations through the tracker
    Run(commands::RunArgs),

    /// Inspect persisted peer state
    #[command(subcommand)]
    State(commands::StateCommands),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "prg={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(config::default_data_dir);
    tokio::fs::create_dir_all(&data_dir).await?;

    let result = match cli.command {
        Commands::Run(args) => commands::handle_run_command(args, &data_dir).await,
        Commands::State(cmd) => commands::handle_state_command(cmd, &data_dir).await,
    };

    if let Err(e) = result {
        let core_error = e.downcast_ref::<PrgError>().or_else(|| {
            match e.downcast_ref::<prg_game::GameError>() {
                Some(prg_game::GameError::Core(inner)) => Some(inner),
                _ => None,
            }
        });
        match core_error {
            Some(PrgError::CorruptState { path, reason }) => {
                eprintln!("Error: state file {} is corrupt: {}", path, reason);
                eprintln!("Refusing to guess; repair or remove the file manually");
            }
            Some(PrgError::Config(msg)) => {
                eprintln!("Error: invalid configuration: {}", msg);
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

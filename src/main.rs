use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{Game, GameConfig};
use grid_snake::modes::HumanMode;
use rand::{SeedableRng, rngs::StdRng};
use std::{fs::File, path::Path, path::PathBuf, sync::Mutex};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Seed for apple placement and the starting direction
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the game owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::default();
    tracing::info!(
        config = %serde_json::to_string(&config).context("Failed to serialize config")?,
        seed = ?cli.seed,
        "Starting"
    );

    // Dispatch to appropriate mode
    let outcome = match cli.mode {
        Mode::Human => match cli.seed {
            Some(seed) => {
                let game = Game::with_rng(config, StdRng::seed_from_u64(seed));
                HumanMode::with_game(game).run().await?
            }
            None => HumanMode::new(config).run().await?,
        },
    };
    tracing::info!(?outcome, "Exiting");

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

//! Super Tic-Tac-Toe GUI
//!
//! Play N-in-a-row against the heuristic engine or another player.

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use super_tictactoe::ui::{Session, SuperTicTacToeApp};
use super_tictactoe::{Cell, GameConfig};

/// Command line options
#[derive(Parser, Debug)]
#[command(name = "super_tictactoe", version, about = "N-in-a-row tic-tac-toe")]
struct Cli {
    /// Board side length (3 to 14)
    #[arg(short, long, default_value_t = 3)]
    size: usize,

    /// Marks in a row needed to win
    #[arg(short, long, default_value_t = 3)]
    connections: usize,

    /// Who opens the game: x or o (anything else means x)
    #[arg(long, default_value = "x")]
    starter: String,

    /// Two players on one screen instead of playing the engine
    #[arg(long)]
    pvp: bool,

    /// Seed for the engine's random fallback
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.size, cli.connections, Cell::parse_starter(&cli.starter))
        .context("invalid game settings")?;
    let session = Session::new(config, !cli.pvp, cli.seed).context("could not start the engine")?;
    info!(size = config.size(), connections = config.connections(), pvp = cli.pvp, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Super Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Super Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(SuperTicTacToeApp::new(cc, session, config, cli.seed)))),
    )
    .map_err(|err| anyhow!("GUI failed: {err}"))
}

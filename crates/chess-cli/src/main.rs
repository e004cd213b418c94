//! Interactive chess console.
//!
//! Reads moves from stdin, checks them against the legality engine, and
//! redraws the board after every accepted move. Logs go to stderr and are
//! controlled with `RUST_LOG` (default `warn`).

mod command;
mod config;
mod render;
mod shell;

use anyhow::Context;
use chess_engine::Board;
use clap::Parser;
use config::Config;
use shell::{Options, Shell};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Play legal chess moves in the terminal.
#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Play legal chess moves in the terminal")]
struct Args {
    /// Starting placement, e.g. "4k3/8/8/8/8/8/8/4K3" (overrides the config)
    #[arg(long)]
    placement: Option<String>,

    /// Path to a chess.toml config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Draw pieces as letters instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(placement) = args.placement {
        config.placement = placement;
    }
    if args.ascii {
        config.unicode = false;
    }

    let board = Board::from_placement(&config.placement)
        .with_context(|| format!("Invalid placement '{}'", config.placement))?;
    tracing::info!(placement = %config.placement, "Starting session");

    let stdin = std::io::stdin();
    let mut shell = Shell::new(
        board,
        Options::from(&config),
        stdin.lock(),
        std::io::stdout(),
    );
    let outcome = shell.run()?;
    tracing::info!(?outcome, ply = shell.board().ply(), "Session ended");
    Ok(())
}

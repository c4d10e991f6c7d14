//! Pawns-only chess for two players at one console.

use anyhow::Context;
use clap::Parser;
use pawns_cli::{CliConfig, Session};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pawns")]
#[command(about = "Pawns-only chess for two players")]
struct Cli {
    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Name of the white player
    #[arg(long)]
    white: Option<String>,
    /// Name of the black player
    #[arg(long)]
    black: Option<String>,
    /// Line that ends the game
    #[arg(long)]
    quit_token: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let path = cli.config.unwrap_or_else(CliConfig::default_path);
    let mut config = CliConfig::load(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;

    if cli.white.is_some() {
        config.players.white = cli.white;
    }
    if cli.black.is_some() {
        config.players.black = cli.black;
    }
    if let Some(token) = cli.quit_token {
        config.quit_token = token;
    }

    tracing::info!(quit_token = %config.quit_token, "starting game");
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), &config);
    let end = session.run().context("console I/O failed")?;
    tracing::info!(?end, "session ended");
    Ok(())
}

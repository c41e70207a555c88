use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use snake_arena::config::AppConfig;
use snake_arena::logging;
use snake_arena::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake_arena")]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for egg placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "snake_arena=debug"
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    if cli.log_file.is_some() {
        config.logging.file = cli.log_file;
    }
    if cli.log_filter.is_some() {
        config.logging.filter = cli.log_filter;
    }

    logging::init(
        config.logging.file.as_deref(),
        config.logging.filter.as_deref(),
    )?;
    tracing::debug!(?config, "configuration loaded");

    let mut human_mode = HumanMode::new(&config);
    human_mode.run().await?;

    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Env, Target};
use std::fs::File;
use std::path::{Path, PathBuf};
use torus_snake::game::{CollisionPolicy, GameConfig};
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrapping grid, in the terminal")]
struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Playfield width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Playfield height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Cell size in pixels; must divide width and height
    #[arg(long)]
    cell_size: Option<u32>,

    /// Ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// What happens when the snake bites itself
    #[arg(long, value_enum)]
    on_collision: Option<OnCollision>,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OnCollision {
    /// Clear the board and keep playing
    Reset,
    /// End the game
    Quit,
}

impl From<OnCollision> for CollisionPolicy {
    fn from(value: OnCollision) -> Self {
        match value {
            OnCollision::Reset => CollisionPolicy::Reset,
            OnCollision::Quit => CollisionPolicy::Quit,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.screen_width = width;
        }
        if let Some(height) = self.height {
            config.screen_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate = tick_rate;
        }
        if let Some(policy) = self.on_collision {
            config.on_collision = policy.into();
        }
        Ok(config)
    }
}

/// The terminal owns stderr while playing, so logs only go to a file
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    let mut human_mode = HumanMode::new(config)?;
    let stats = human_mode.run().await?;

    println!("{stats}");
    Ok(())
}

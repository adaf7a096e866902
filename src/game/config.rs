use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::grid::Grid;

/// Largest accepted screen dimension in pixels
const MAX_SCREEN_SIDE: u32 = 1 << 16;

/// Fastest accepted simulation rate
pub const MAX_TICK_RATE: u32 = 1_000;

/// Terminal columns per cell plus the frame, as drawn by the renderer
const TERMINAL_COLUMNS_PER_CELL: u32 = 2;
const TERMINAL_FRAME: u32 = 2;

/// An RGB color, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors used to paint the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub food: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            food: Rgb(255, 0, 0),
            snake: Rgb(0, 255, 0),
        }
    }
}

/// What happens when the snake runs into itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Clear the board and start over in place
    #[default]
    Reset,
    /// Stop the game loop
    Quit,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playfield in pixels
    pub screen_width: u32,
    /// Height of the playfield in pixels
    pub screen_height: u32,
    /// Side of one cell in pixels; must divide both screen dimensions
    pub cell_size: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Length of a freshly spawned snake
    pub initial_length: usize,
    pub palette: Palette,
    pub on_collision: CollisionPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            tick_rate: 10,
            initial_length: 1,
            palette: Palette::default(),
            on_collision: CollisionPolicy::Reset,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom playfield size in pixels
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Default::default()
        }
    }

    /// Read a JSON configuration file; absent fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Check the constraints the game logic relies on
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.screen_width > 0 && self.screen_height > 0,
            "screen dimensions must be positive"
        );
        ensure!(
            self.screen_width <= MAX_SCREEN_SIDE && self.screen_height <= MAX_SCREEN_SIDE,
            "screen dimensions must not exceed {MAX_SCREEN_SIDE} pixels"
        );
        ensure!(
            self.screen_width % self.cell_size == 0 && self.screen_height % self.cell_size == 0,
            "cell size {} must evenly divide the screen {}x{}",
            self.cell_size,
            self.screen_width,
            self.screen_height
        );
        ensure!(
            (1..=MAX_TICK_RATE).contains(&self.tick_rate),
            "tick rate {} must be between 1 and {MAX_TICK_RATE}",
            self.tick_rate
        );
        ensure!(self.initial_length >= 1, "initial length must be at least 1");

        let columns = self.screen_width / self.cell_size;
        let rows = self.screen_height / self.cell_size;
        ensure!(
            columns * TERMINAL_COLUMNS_PER_CELL + TERMINAL_FRAME <= u32::from(u16::MAX)
                && rows + TERMINAL_FRAME <= u32::from(u16::MAX),
            "a {columns}x{rows} board does not fit in a terminal"
        );

        let columns = columns as usize;
        let rows = rows as usize;
        ensure!(
            self.initial_length <= columns,
            "initial length {} does not fit in {} columns",
            self.initial_length,
            columns
        );
        ensure!(
            self.initial_length < columns * rows,
            "initial length leaves no room for food"
        );
        Ok(())
    }

    /// Playfield geometry; call after `validate`
    pub fn grid(&self) -> Grid {
        Grid::new(
            self.screen_width as i32,
            self.screen_height as i32,
            self.cell_size as i32,
        )
    }
}

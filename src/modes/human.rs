use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stderr;

use super::clock::IntervalClock;
use super::game_loop::GameLoop;
use crate::game::{GameConfig, GameEngine};
use crate::input::TerminalInput;
use crate::metrics::SessionStats;
use crate::render::{required_size, TerminalCanvas};

/// Play snake with the keyboard in the terminal
pub struct HumanMode {
    config: GameConfig,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Take over the terminal, play until quit, then hand it back
    pub async fn run(&mut self) -> Result<SessionStats> {
        let session = TerminalSession::enter()?;

        let result = self.run_game_loop().await;

        // Restore even if the loop failed, but report the loop error first
        let restored = session.restore();
        let stats = result?;
        restored?;
        Ok(stats)
    }

    async fn run_game_loop(&mut self) -> Result<SessionStats> {
        let backend = CrosstermBackend::new(stderr());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let grid = self.config.grid();
        let (needed_width, needed_height) = required_size(&grid);
        let size = terminal.size().context("Failed to query terminal size")?;
        if size.width < needed_width || size.height < needed_height {
            warn!(
                "Terminal is {}x{}, the board needs {}x{}; it will be clipped",
                size.width, size.height, needed_width, needed_height
            );
        }

        info!(
            "Starting {}x{} board at {} ticks/s, collision policy {:?}",
            grid.columns(),
            grid.rows(),
            self.config.tick_rate,
            self.config.on_collision
        );

        let canvas = TerminalCanvas::new(terminal, grid, self.config.palette.background);
        let engine = GameEngine::new(self.config.clone());
        let mut game = GameLoop::new(engine, canvas, TerminalInput::new());
        let mut clock = IntervalClock::new(self.config.tick_rate);

        game.run(&mut clock).await?;
        Ok(game.stats().clone())
    }
}

/// Raw mode and the alternate screen, released when dropped
struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let session = Self { active: true };
        execute!(stderr(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(session)
    }

    fn restore(mut self) -> Result<()> {
        self.active = false;
        Self::leave()
    }

    fn leave() -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(stderr(), LeaveAlternateScreen, Show)
            .context("Failed to leave alternate screen")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = Self::leave() {
                warn!("Terminal not restored: {err:#}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::CollisionPolicy;

    #[test]
    fn test_mode_initialization() {
        let mode = HumanMode::new(GameConfig::default()).unwrap();
        assert_eq!(mode.config().tick_rate, 10);
        assert_eq!(mode.config().on_collision, CollisionPolicy::Reset);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_touching_terminal() {
        let config = GameConfig {
            cell_size: 7,
            ..Default::default()
        };
        let err = HumanMode::new(config).err().unwrap();
        assert!(format!("{err:#}").contains("evenly divide"));
    }
}

//! Keyboard input for the game loop

pub mod handler;

pub use handler::{InputHandler, TerminalInput};

use anyhow::Result;

use crate::game::Direction;

/// A discrete input event relevant to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the game
    Quit,
    /// Turn the snake
    Turn(Direction),
}

/// Source of input events, polled once per tick
pub trait InputSource {
    /// Drain every event pending since the previous call without blocking
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;
}

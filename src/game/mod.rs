//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Entities paint themselves through the [`crate::render::Canvas`] trait only.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use action::Direction;
pub use config::{CollisionPolicy, GameConfig, Palette, Rgb};
pub use engine::{GameEngine, TickOutcome};
pub use food::Food;
pub use grid::{cell_count, wrap, Cell, Grid};
pub use snake::Snake;

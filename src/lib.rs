//! Torus Snake - terminal Snake on a wrapping grid
//!
//! This library provides:
//! - Core game logic (game module)
//! - Drawing contracts and the ratatui renderer (render module)
//! - Keyboard input (input module)
//! - The fixed-rate game loop and terminal mode (modes module)
//! - Session counters (metrics module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

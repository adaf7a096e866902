//! Drawing contracts and the terminal renderer
//!
//! Game entities paint themselves through [`Canvas`], which knows nothing
//! about snakes or food. [`TerminalCanvas`] is the ratatui implementation.

pub mod renderer;

pub use renderer::{required_size, TerminalCanvas};

use anyhow::Result;

use crate::game::{Cell, Palette, Rgb};

/// Something that can paint grid cells and show the result
pub trait Canvas {
    /// Paint one cell with `fill`, optionally outlined with `border`
    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Option<Rgb>);

    /// Paint the whole playfield with one color
    fn clear(&mut self, color: Rgb);

    /// Flush everything painted so far to the display
    fn present(&mut self) -> Result<()>;
}

/// Shared render capability of the game entities
pub trait Drawable {
    fn draw(&self, canvas: &mut dyn Canvas, palette: &Palette);
}

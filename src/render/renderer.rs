use anyhow::{Context, Result};
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame, Terminal,
};

use super::Canvas;
use crate::game::{Cell, Grid, Rgb};

/// Terminal columns used to draw one grid cell
const CELL_COLUMNS: u16 = 2;

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// Terminal size needed to show the board and its frame without clipping.
///
/// Saturates at `u16::MAX` for boards no terminal can hold.
pub fn required_size(grid: &Grid) -> (u16, u16) {
    let columns = u16::try_from(grid.columns()).unwrap_or(u16::MAX);
    let rows = u16::try_from(grid.rows()).unwrap_or(u16::MAX);
    (
        columns.saturating_mul(CELL_COLUMNS).saturating_add(2),
        rows.saturating_add(2),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Paint {
    fill: Rgb,
    border: Option<Rgb>,
}

/// Canvas backed by a ratatui terminal.
///
/// Painted cells persist between frames, like a window surface; `present`
/// redraws the whole board from that buffer.
pub struct TerminalCanvas<B: Backend> {
    terminal: Terminal<B>,
    grid: Grid,
    cells: Vec<Paint>,
}

impl<B: Backend> TerminalCanvas<B> {
    pub fn new(terminal: Terminal<B>, grid: Grid, background: Rgb) -> Self {
        let blank = Paint {
            fill: background,
            border: None,
        };
        Self {
            terminal,
            grid,
            cells: vec![blank; grid.area()],
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn slot(&self, cell: Cell) -> Option<usize> {
        if !self.grid.contains(cell) {
            return None;
        }
        let (column, row) = self.grid.index_of(cell);
        Some((row * self.grid.columns() + column) as usize)
    }
}

impl<B: Backend> Canvas for TerminalCanvas<B> {
    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Option<Rgb>) {
        if let Some(slot) = self.slot(cell) {
            self.cells[slot] = Paint { fill, border };
        }
    }

    fn clear(&mut self, color: Rgb) {
        self.cells.fill(Paint {
            fill: color,
            border: None,
        });
    }

    fn present(&mut self) -> Result<()> {
        let Self {
            terminal,
            grid,
            cells,
        } = self;
        let (grid, cells) = (&*grid, cells.as_slice());
        terminal
            .draw(|frame| render_board(frame, grid, cells))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

fn render_board(frame: &mut Frame, grid: &Grid, cells: &[Paint]) {
    let columns = grid.columns() as usize;
    let lines: Vec<Line> = cells
        .chunks(columns)
        .map(|row| Line::from(row.iter().copied().map(paint_span).collect::<Vec<_>>()))
        .collect();

    let (width, height) = required_size(grid);
    let area = centered(frame.area(), width, height);

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake "),
    );
    frame.render_widget(board, area);
}

fn paint_span(paint: Paint) -> Span<'static> {
    let style = Style::default().bg(paint.fill.into());
    match paint.border {
        Some(border) => Span::styled("[]", style.fg(border.into())),
        None => Span::styled("  ", style),
    }
}

/// A `width` x `height` rectangle in the middle of `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

//! Grid geometry for the wrapping playfield
//!
//! Cells are addressed in pixel units: every coordinate is a multiple of the
//! cell size. Leaving one edge re-enters on the opposite edge.

use rand::Rng;

use super::action::Direction;

/// Wraps a coordinate onto `[0, axis_size)` using true modulo, so negative
/// inputs land on the far edge.
pub fn wrap(coordinate: i32, axis_size: i32) -> i32 {
    coordinate.rem_euclid(axis_size)
}

/// Number of whole cells along an axis
pub fn cell_count(axis_size: i32, cell_size: i32) -> i32 {
    axis_size / cell_size
}

/// A grid-aligned position, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Side of one square cell in pixels
    pub cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Number of columns
    pub fn columns(&self) -> i32 {
        cell_count(self.width, self.cell_size)
    }

    /// Number of rows
    pub fn rows(&self) -> i32 {
        cell_count(self.height, self.cell_size)
    }

    /// Total number of cells on the board
    pub fn area(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Cell at the given column and row
    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.cell_size, row * self.cell_size)
    }

    /// Column and row of a cell
    pub fn index_of(&self, cell: Cell) -> (i32, i32) {
        (cell.x / self.cell_size, cell.y / self.cell_size)
    }

    /// The cell containing the middle of the screen
    pub fn center(&self) -> Cell {
        self.cell_at(self.columns() / 2, self.rows() / 2)
    }

    /// Whether a cell lies on the board and is grid-aligned
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x)
            && (0..self.height).contains(&cell.y)
            && cell.x % self.cell_size == 0
            && cell.y % self.cell_size == 0
    }

    /// The neighbour of `cell` one step towards `direction`, wrapped per axis
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(
            wrap(cell.x + dx * self.cell_size, self.width),
            wrap(cell.y + dy * self.cell_size, self.height),
        )
    }

    /// A uniformly random cell anywhere on the board
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        self.cell_at(
            rng.gen_range(0..self.columns()),
            rng.gen_range(0..self.rows()),
        )
    }

    /// Iterates every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows())
            .flat_map(move |row| (0..self.columns()).map(move |col| self.cell_at(col, row)))
    }
}

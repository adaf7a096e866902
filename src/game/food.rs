use rand::Rng;

use super::config::Palette;
use super::grid::{Cell, Grid};
use crate::render::{Canvas, Drawable};

/// The single piece of food on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Food at a fixed cell
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Place food on a random cell not in `occupied`
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, occupied: &[Cell], rng: &mut R) -> Self {
        let mut food = Self::new(Cell::new(0, 0));
        food.relocate(grid, occupied, rng);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move to a uniformly random cell outside `occupied`.
    ///
    /// Samples the whole board until a free cell comes up, so it never
    /// returns if `occupied` covers every cell. Returns the number of draws.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        occupied: &[Cell],
        rng: &mut R,
    ) -> usize {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let candidate = grid.random_cell(rng);
            if !occupied.contains(&candidate) {
                self.position = candidate;
                return attempts;
            }
        }
    }
}

impl Drawable for Food {
    fn draw(&self, canvas: &mut dyn Canvas, palette: &Palette) {
        canvas.draw_cell(self.position, palette.food, Some(palette.border));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::Rgb;
    use rand::{rngs::StdRng, SeedableRng};

    #[derive(Default)]
    struct Recorder {
        cells: Vec<(Cell, Rgb, Option<Rgb>)>,
    }

    impl Canvas for Recorder {
        fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Option<Rgb>) {
            self.cells.push((cell, fill, border));
        }

        fn clear(&mut self, _color: Rgb) {}

        fn present(&mut self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_relocate_avoids_occupied() {
        let grid = Grid::new(100, 100, 20);
        let mut rng = StdRng::seed_from_u64(42);
        // Everything but the bottom-right corner is taken
        let occupied: Vec<Cell> = grid.cells().filter(|c| *c != Cell::new(80, 80)).collect();

        let mut food = Food::new(Cell::new(0, 0));
        for _ in 0..20 {
            food.relocate(&grid, &occupied, &mut rng);
            assert_eq!(food.position(), Cell::new(80, 80));
        }
    }

    #[test]
    fn test_relocate_is_disjoint_from_snake() {
        let grid = Grid::new(640, 480, 20);
        let mut rng = StdRng::seed_from_u64(1);
        let occupied: Vec<Cell> = (0..10).map(|col| grid.cell_at(col, 3)).collect();

        let mut food = Food::spawn(&grid, &occupied, &mut rng);
        for _ in 0..500 {
            assert!(!occupied.contains(&food.position()));
            assert!(grid.contains(food.position()));
            let attempts = food.relocate(&grid, &occupied, &mut rng);
            assert!(attempts >= 1);
        }
    }

    #[test]
    fn test_draw_uses_food_color_with_border() {
        let palette = Palette::default();
        let food = Food::new(Cell::new(40, 60));
        let mut canvas = Recorder::default();

        food.draw(&mut canvas, &palette);

        assert_eq!(
            canvas.cells,
            vec![(Cell::new(40, 60), palette.food, Some(palette.border))]
        );
    }
}

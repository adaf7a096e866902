use super::action::Direction;
use super::config::Palette;
use super::grid::{Cell, Grid};
use crate::render::{Canvas, Drawable};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, with head at index 0
    positions: Vec<Cell>,
    /// Current direction of movement
    direction: Direction,
    /// Turn requested since the last tick, applied on the next `advance`
    pending_direction: Option<Direction>,
    /// Length the body grows towards
    target_length: usize,
    /// Cell vacated by the most recent move, still painted on screen
    last_tail: Option<Cell>,
}

impl Snake {
    /// Create a snake of `length` cells with its body trailing behind `head`
    pub fn new(head: Cell, direction: Direction, length: usize, grid: &Grid) -> Self {
        let mut snake = Self {
            positions: Vec::new(),
            direction,
            pending_direction: None,
            target_length: 1,
            last_tail: None,
        };
        snake.reset(head, direction);

        let behind = direction.opposite();
        for _ in 1..length {
            let next = grid.step(snake.tail(), behind);
            snake.positions.push(next);
        }
        snake.target_length = length.max(1);
        snake
    }

    /// Back to a single cell at `start` heading `direction`
    pub fn reset(&mut self, start: Cell, direction: Direction) {
        self.positions.clear();
        self.positions.push(start);
        self.direction = direction;
        self.pending_direction = None;
        self.target_length = 1;
        self.last_tail = None;
    }

    /// Request a turn for the next tick. Reversals are ignored.
    pub fn queue_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Move one cell, wrapping at the edges
    pub fn advance(&mut self, grid: &Grid) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = grid.step(self.head(), self.direction);
        self.last_tail = Some(self.tail());
        self.positions.insert(0, new_head);

        if self.positions.len() > self.target_length {
            self.positions.pop();
        }
    }

    /// Whether the head sits on the food
    pub fn ate(&self, food: Cell) -> bool {
        self.head() == food
    }

    /// Lengthen the target by one cell
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Whether the head overlaps any other segment.
    ///
    /// Only meaningful after `advance`, once the vacated tail is gone.
    pub fn self_collided(&self) -> bool {
        let head = self.head();
        self.body_segments().contains(&head)
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.positions[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.positions[self.positions.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.positions[1..]
    }

    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn last_tail(&self) -> Option<Cell> {
        self.last_tail
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Drawable for Snake {
    fn draw(&self, canvas: &mut dyn Canvas, palette: &Palette) {
        // Erase first; a tail that did not move gets repainted below
        if let Some(tail) = self.last_tail {
            canvas.draw_cell(tail, palette.background, None);
        }
        for &cell in &self.positions {
            canvas.draw_cell(cell, palette.snake, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::Rgb;

    fn grid() -> Grid {
        Grid::new(640, 480, 20)
    }

    #[derive(Default)]
    struct Recorder {
        cells: Vec<(Cell, Rgb)>,
    }

    impl Canvas for Recorder {
        fn draw_cell(&mut self, cell: Cell, fill: Rgb, _border: Option<Rgb>) {
            self.cells.push((cell, fill));
        }

        fn clear(&mut self, _color: Rgb) {}

        fn present(&mut self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(100, 100), Direction::Right, 3, &grid());
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.target_length(), 3);
        assert_eq!(snake.head(), Cell::new(100, 100));
        assert_eq!(
            snake.positions(),
            &[Cell::new(100, 100), Cell::new(80, 100), Cell::new(60, 100)]
        );
    }

    #[test]
    fn test_creation_wraps_behind_edge() {
        let snake = Snake::new(Cell::new(0, 0), Direction::Right, 2, &grid());
        assert_eq!(snake.tail(), Cell::new(620, 0));
    }

    #[test]
    fn test_reset() {
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right, 3, &grid());
        snake.queue_direction(Direction::Up);
        snake.advance(&grid());

        snake.reset(Cell::new(320, 240), Direction::Left);

        assert_eq!(snake.positions(), &[Cell::new(320, 240)]);
        assert!(!snake.is_empty());
        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.target_length(), 1);
        assert_eq!(snake.last_tail(), None);
    }

    #[test]
    fn test_opposite_turn_is_ignored() {
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Up, 1, &grid());
        snake.queue_direction(Direction::Down);
        assert_eq!(snake.pending_direction(), None);

        snake.advance(&grid());
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), Cell::new(100, 80));
    }

    #[test]
    fn test_non_opposite_turn_applies_on_advance() {
        for turn in [Direction::Up, Direction::Left, Direction::Right] {
            let mut snake = Snake::new(Cell::new(100, 100), Direction::Up, 1, &grid());
            snake.queue_direction(turn);
            assert_eq!(snake.direction(), Direction::Up);

            snake.advance(&grid());
            assert_eq!(snake.direction(), turn);
            assert_eq!(snake.pending_direction(), None);
        }
    }

    #[test]
    fn test_double_turn_within_tick_cannot_reverse() {
        // Heading right, Up then Left in one tick: Left is checked against
        // the committed direction (Right) and rejected, Up survives.
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right, 3, &grid());
        snake.queue_direction(Direction::Up);
        snake.queue_direction(Direction::Left);
        snake.advance(&grid());

        assert_eq!(snake.direction(), Direction::Up);
        assert!(!snake.self_collided());
    }

    #[test]
    fn test_last_queued_turn_wins() {
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right, 1, &grid());
        snake.queue_direction(Direction::Up);
        snake.queue_direction(Direction::Down);
        snake.advance(&grid());
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn test_advance_records_vacated_tail() {
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right, 3, &grid());
        snake.advance(&grid());

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(120, 100));
        assert_eq!(snake.last_tail(), Some(Cell::new(60, 100)));
        assert!(!snake.positions().contains(&Cell::new(60, 100)));
    }

    #[test]
    fn test_wraparound_right_edge() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(620, 200), Direction::Right, 1, &g);
        snake.advance(&g);
        assert_eq!(snake.head(), Cell::new(0, 200));
    }

    #[test]
    fn test_growth_adds_one_cell_per_meal() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right, 2, &g);
        let food = g.step(snake.head(), Direction::Right);

        snake.advance(&g);
        assert!(snake.ate(food));
        snake.grow();
        assert_eq!(snake.len(), 2);

        // Grows on the next tick, then holds at the target
        snake.advance(&g);
        assert_eq!(snake.len(), 3);
        for _ in 0..5 {
            snake.advance(&g);
            assert_eq!(snake.len(), 3);
        }
    }

    #[test]
    fn test_growth_never_shrinks_below_previous_length() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right, 1, &g);
        snake.grow();
        snake.grow();
        snake.grow();

        let mut previous = snake.len();
        for _ in 0..3 {
            snake.advance(&g);
            assert_eq!(snake.len(), previous + 1);
            previous = snake.len();
        }
        snake.advance(&g);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_straight_line_never_self_collides() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(60, 100), Direction::Right, 3, &g);
        for _ in 0..(g.columns() * 3) {
            snake.advance(&g);
            assert!(!snake.self_collided());
        }
    }

    #[test]
    fn test_following_own_tail_is_not_a_collision() {
        // A 4-cell snake turning in a 2x2 square chases its tail forever
        let g = grid();
        let mut snake = Snake::new(Cell::new(120, 100), Direction::Right, 4, &g);
        // Body: (120,100) (100,100) (80,100) (60,100); curl it into a square
        snake.advance(&g);
        snake.queue_direction(Direction::Down);
        snake.advance(&g);
        snake.queue_direction(Direction::Left);
        snake.advance(&g);

        let lap = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];
        for turn in lap.repeat(3) {
            snake.queue_direction(turn);
            snake.advance(&g);
            assert!(!snake.self_collided(), "false collision at {:?}", snake.head());
        }
    }

    #[test]
    fn test_self_collision() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right, 5, &g);
        snake.queue_direction(Direction::Down);
        snake.advance(&g);
        snake.queue_direction(Direction::Left);
        snake.advance(&g);
        snake.queue_direction(Direction::Up);
        snake.advance(&g);

        assert_eq!(snake.head(), Cell::new(80, 100));
        assert_eq!(snake.tail(), Cell::new(80, 100));
        assert!(snake.self_collided());
    }

    #[test]
    fn test_draw_erases_tail_before_body() {
        let g = grid();
        let palette = Palette::default();
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Right, 2, &g);
        snake.advance(&g);

        let mut canvas = Recorder::default();
        snake.draw(&mut canvas, &palette);

        assert_eq!(
            canvas.cells,
            vec![
                (Cell::new(80, 100), palette.background),
                (Cell::new(120, 100), palette.snake),
                (Cell::new(100, 100), palette.snake),
            ]
        );
    }
}

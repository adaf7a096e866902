use log::{debug, trace};
use rand::{rngs::StdRng, SeedableRng};

use super::{
    action::Direction,
    config::GameConfig,
    food::Food,
    grid::{Cell, Grid},
    snake::Snake,
};
use crate::render::{Canvas, Drawable};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Plain move
    Moved,
    /// Head reached the food; the snake will grow
    Ate,
    /// Head ran into the body
    Collided,
}

/// Owns the snake and the food and applies one tick of game rules
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic engine for reproducible runs
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let grid = config.grid();
        let snake = Self::spawn_snake(&config, &grid);
        let food = Food::spawn(&grid, snake.positions(), &mut rng);

        Self {
            config,
            grid,
            snake,
            food,
            rng,
        }
    }

    fn spawn_snake(config: &GameConfig, grid: &Grid) -> Snake {
        Snake::new(grid.center(), Direction::Right, config.initial_length, grid)
    }

    /// Start over: fresh snake in the middle, food somewhere free
    pub fn reset(&mut self) {
        self.snake = Self::spawn_snake(&self.config, &self.grid);
        self.relocate_food();
    }

    /// Buffer a turn for the next tick
    pub fn queue_direction(&mut self, direction: Direction) {
        self.snake.queue_direction(direction);
    }

    /// Execute one step of the game
    pub fn step(&mut self) -> TickOutcome {
        self.snake.advance(&self.grid);

        if self.snake.ate(self.food.position()) {
            self.snake.grow();
            debug!(
                "Food eaten at {:?}, target length {}",
                self.food.position(),
                self.snake.target_length()
            );
            self.relocate_food();
            TickOutcome::Ate
        } else if self.snake.self_collided() {
            TickOutcome::Collided
        } else {
            TickOutcome::Moved
        }
    }

    fn relocate_food(&mut self) {
        let attempts = self
            .food
            .relocate(&self.grid, self.snake.positions(), &mut self.rng);
        if attempts > 1 {
            trace!("Food placed after {attempts} draws");
        }
    }

    /// Paint the current tick: tail erase, snake, then food
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.snake.draw(canvas, &self.config.palette);
        self.food.draw(canvas, &self.config.palette);
    }

    /// Force the food onto a cell, e.g. to script a scenario
    pub fn place_food(&mut self, cell: Cell) {
        self.food = Food::new(cell);
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

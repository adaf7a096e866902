use std::fmt;
use std::time::{Duration, Instant};

/// In-memory counters for one run of the program
#[derive(Debug, Clone)]
pub struct SessionStats {
    pub start_time: Instant,
    pub ticks: u64,
    pub food_eaten: u32,
    pub games_played: u32,
    pub longest_snake: usize,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            ticks: 0,
            food_eaten: 0,
            games_played: 0,
            longest_snake: 1,
        }
    }

    pub fn on_tick(&mut self, snake_length: usize) {
        self.ticks += 1;
        self.longest_snake = self.longest_snake.max(snake_length);
    }

    pub fn on_food(&mut self) {
        self.food_eaten += 1;
    }

    /// A game ended by self-collision
    pub fn on_game_over(&mut self) {
        self.games_played += 1;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        format_duration(total_secs)
    }
}

fn format_duration(total_secs: u64) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ticks in {}, {} food eaten, {} collisions, longest snake {}",
            self.ticks,
            self.format_time(),
            self.food_eaten,
            self.games_played,
            self.longest_snake
        )
    }
}

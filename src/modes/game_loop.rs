use anyhow::{Context, Result};
use log::info;

use super::clock::Clock;
use crate::game::{CollisionPolicy, GameEngine, TickOutcome};
use crate::input::{InputEvent, InputSource};
use crate::metrics::SessionStats;
use crate::render::Canvas;

/// Whether the loop keeps going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Drives input, game rules and rendering once per tick
pub struct GameLoop<C: Canvas, I: InputSource> {
    engine: GameEngine,
    canvas: C,
    input: I,
    stats: SessionStats,
}

impl<C: Canvas, I: InputSource> GameLoop<C, I> {
    pub fn new(engine: GameEngine, canvas: C, input: I) -> Self {
        Self {
            engine,
            canvas,
            input,
            stats: SessionStats::new(),
        }
    }

    /// Paint the opening board
    pub fn start(&mut self) -> Result<()> {
        self.canvas.clear(self.engine.config().palette.background);
        self.engine.draw(&mut self.canvas);
        self.canvas.present()
    }

    /// Run one tick: input, move, feed or collide, render
    pub fn tick(&mut self) -> Result<LoopControl> {
        for event in self.input.poll_events()? {
            match event {
                InputEvent::Quit => return Ok(LoopControl::Stop),
                InputEvent::Turn(direction) => self.engine.queue_direction(direction),
            }
        }

        let outcome = self.engine.step();
        self.stats.on_tick(self.engine.snake().len());

        let mut control = LoopControl::Continue;
        match outcome {
            TickOutcome::Moved => {}
            TickOutcome::Ate => self.stats.on_food(),
            TickOutcome::Collided => {
                self.stats.on_game_over();
                info!(
                    "Snake ran into itself at length {}",
                    self.engine.snake().len()
                );
                match self.engine.config().on_collision {
                    CollisionPolicy::Reset => {
                        self.engine.reset();
                        self.canvas.clear(self.engine.config().palette.background);
                    }
                    CollisionPolicy::Quit => control = LoopControl::Stop,
                }
            }
        }

        self.engine.draw(&mut self.canvas);
        self.canvas.present()?;
        Ok(control)
    }

    /// Tick until the player quits, the game ends or SIGINT arrives.
    ///
    /// In raw mode Ctrl+C is read as a key and handled as a quit event by
    /// the input source; the signal branch only fires for an interrupt sent
    /// from outside the terminal, e.g. `kill -INT`.
    pub async fn run<K: Clock>(&mut self, clock: &mut K) -> Result<()> {
        self.start()?;

        loop {
            if self.tick()? == LoopControl::Stop {
                break;
            }

            tokio::select! {
                _ = clock.tick() => {}
                signal = tokio::signal::ctrl_c() => {
                    signal.context("Failed to listen for Ctrl+C")?;
                    info!("Interrupted");
                    break;
                }
            }
        }

        info!("Session over: {}", self.stats);
        Ok(())
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}

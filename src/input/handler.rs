use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{FutureExt, StreamExt};

use super::{InputEvent, InputSource};
use crate::game::Direction;

/// Maps key presses to game input
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<InputEvent> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        let event = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => InputEvent::Turn(Direction::Up),
            KeyCode::Down => InputEvent::Turn(Direction::Down),
            KeyCode::Left => InputEvent::Turn(Direction::Left),
            KeyCode::Right => InputEvent::Turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => InputEvent::Turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => InputEvent::Turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => InputEvent::Turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => InputEvent::Turn(Direction::Right),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,

            _ => return None,
        };
        Some(event)
    }

    /// Translate a raw terminal event; releases and repeats are dropped
    pub fn handle_event(&self, event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard input read from the terminal
pub struct TerminalInput {
    events: EventStream,
    handler: InputHandler,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            events: EventStream::new(),
            handler: InputHandler::new(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut polled = Vec::new();
        // The stream answers immediately while events are queued
        while let Some(next) = self.events.next().now_or_never() {
            let Some(event) = next else {
                // Stream closed: nothing more will ever arrive
                polled.push(InputEvent::Quit);
                break;
            };
            let event = event.context("Failed to read terminal event")?;
            polled.extend(self.handler.handle_event(event));
        }
        Ok(polled)
    }
}

//! Keypress detection for the animation loop.
//!
//! The loop never reads key *values*; the only question it asks is "was any
//! key pressed while this frame was on screen". The wait doubles as the
//! inter-frame pause, so a keypress ends the run without sitting out the
//! rest of the frame delay.

use std::time::{Duration, Instant};

use anyhow::Result;

use crossterm::event::{self, Event, KeyEventKind};

/// Source of the "stop now" signal.
///
/// The loop is generic over this so tests can drive it without a terminal.
pub trait InputSource {
    /// Wait up to `wait` for a keypress. `Ok(true)` means stop the animation.
    fn key_pressed(&mut self, wait: Duration) -> Result<bool>;
}

/// Real-terminal input over the crossterm event queue.
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn key_pressed(&mut self, wait: Duration) -> Result<bool> {
        let deadline = Instant::now() + wait;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(false);
            }
            match event::read()? {
                // Any key stops the run; the key itself is not interpreted.
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(true),
                // Resize, focus, key release/repeat: drained and ignored.
                _ => {}
            }
        }
    }
}

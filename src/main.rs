//! Digital rain runner.
//!
//! Sizes the matrix to the terminal once at startup, then renders frames at a
//! fixed cadence until any key is pressed. There are no flags and no config;
//! the terminal is the whole interface.

use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use tui_rain::core::RainState;
use tui_rain::term::{run_loop, TerminalInput, TerminalSession};
use tui_rain::types::FRAME_DELAY_MS;

fn main() -> Result<()> {
    let (width, height) = crossterm::terminal::size()?;
    let mut state = RainState::new(width, height, time_seed())
        .ok_or_else(|| anyhow!("terminal reports a degenerate size ({}x{})", width, height))?;

    let mut term = TerminalSession::new();
    term.enter()?;

    let result = run(&mut state);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(state: &mut RainState) -> Result<()> {
    let mut out = io::stdout();
    let mut input = TerminalInput;
    run_loop(
        state,
        &mut out,
        &mut input,
        Duration::from_millis(FRAME_DELAY_MS),
    )
}

/// Seed the glyph stream from wall-clock time so every run looks different.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}

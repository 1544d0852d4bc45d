//! Frame encoding and terminal session management.
//!
//! Frames are full redraws: the cursor is homed to the top-left and every row
//! is rewritten in place. At a 40 ms cadence with most columns moving every
//! frame there is nothing to gain from diffing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::RainMatrix;

/// Encode one full frame into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Rows are joined with `\r\n`; the final row gets no line break, so the
/// bottom row of the terminal never scrolls a blank line in.
pub fn encode_frame_into(matrix: &RainMatrix, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut line = String::with_capacity(matrix.width() as usize);
    for y in 0..matrix.height() {
        line.clear();
        line.extend(matrix.row(y));
        out.queue(Print(line.as_str()))?;
        if y + 1 < matrix.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    Ok(())
}

/// Owns stdout for the duration of a run and restores the terminal on exit.
pub struct TerminalSession {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(256),
        }
    }

    /// One-time terminal setup: raw mode, alternate screen, hidden cursor,
    /// no line wrap, green foreground.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(SetForegroundColor(Color::Green))?;
        self.flush_buf()?;
        Ok(())
    }

    /// Undo everything `enter` did, cursor visibility included.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

//! The timed animation loop.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;

use crate::core::RainState;
use crate::input::InputSource;
use crate::renderer::encode_frame_into;

/// Run the animation until `input` reports a keypress.
///
/// Each iteration writes one full frame to `out`, waits up to `frame_delay`
/// for a keypress, and advances the state by one tick. The frame buffer is
/// reused across iterations.
pub fn run_loop<W, I>(
    state: &mut RainState,
    out: &mut W,
    input: &mut I,
    frame_delay: Duration,
) -> Result<()>
where
    W: Write,
    I: InputSource,
{
    let mut frame = Vec::with_capacity(64 * 1024);
    loop {
        frame.clear();
        encode_frame_into(state.matrix(), &mut frame)?;
        out.write_all(&frame)?;
        out.flush()?;

        if input.key_pressed(frame_delay)? {
            return Ok(());
        }

        state.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted input: reports a keypress once `presses_after` polls have
    /// gone by.
    struct ScriptedInput {
        presses_after: u32,
        polls: u32,
    }

    impl ScriptedInput {
        fn new(presses_after: u32) -> Self {
            Self {
                presses_after,
                polls: 0,
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn key_pressed(&mut self, _wait: Duration) -> Result<bool> {
            let pressed = self.polls >= self.presses_after;
            self.polls += 1;
            Ok(pressed)
        }
    }

    fn frame_count(output: &[u8]) -> usize {
        // Every frame starts with the cursor-home sequence.
        let needle: &[u8] = b"\x1b[1;1H";
        output.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn key_at_first_check_exits_after_a_single_frame() {
        let mut state = RainState::new(6, 4, 1).unwrap();
        let mut out = Vec::new();
        let mut input = ScriptedInput::new(0);

        run_loop(&mut state, &mut out, &mut input, Duration::ZERO).unwrap();

        assert_eq!(frame_count(&out), 1);
        // No tick ran: the cycle counter never moved off its start value.
        assert_eq!(state.cycle(), 1);
    }

    #[test]
    fn loop_ticks_once_per_idle_poll() {
        let mut state = RainState::new(6, 4, 1).unwrap();
        let mut out = Vec::new();
        let mut input = ScriptedInput::new(5);

        run_loop(&mut state, &mut out, &mut input, Duration::ZERO).unwrap();

        assert_eq!(frame_count(&out), 6);
        assert_eq!(state.cycle(), 6);
    }
}

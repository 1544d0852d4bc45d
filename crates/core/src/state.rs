//! Animation driver state: matrix + RNG + cycle counter.
//!
//! [`RainState`] advances the animation one frame at a time. The timed loop,
//! rendering, and input live elsewhere; this type only knows which columns
//! move on which frame.

use crate::matrix::RainMatrix;
use crate::rng::SimpleRng;
use crate::types::{COLUMN_PERIOD, CYCLE_WRAP};

/// Whether an active column shifts on the frame with the given cycle count.
///
/// Columns at a multiple of [`COLUMN_PERIOD`] shift every frame; the further
/// a column index is from one, the more frames it sits out. This is the whole
/// of the variable-speed effect.
pub fn should_shift(column: u16, cycle: u32) -> bool {
    u32::from(column) % COLUMN_PERIOD <= cycle % COLUMN_PERIOD
}

/// Complete animation state for one run.
#[derive(Debug, Clone)]
pub struct RainState {
    matrix: RainMatrix,
    rng: SimpleRng,
    cycle: u32,
}

impl RainState {
    /// Build the initial state for a `width x height` terminal.
    ///
    /// The cycle counter starts at 1. Returns `None` for a zero dimension.
    pub fn new(width: u16, height: u16, seed: u32) -> Option<Self> {
        let mut rng = SimpleRng::new(seed);
        let matrix = RainMatrix::new(width, height, &mut rng)?;
        Some(Self {
            matrix,
            rng,
            cycle: 1,
        })
    }

    pub fn matrix(&self) -> &RainMatrix {
        &self.matrix
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Advance the animation one frame: shift every active column due on this
    /// cycle, then step the cycle counter (wrapping at [`CYCLE_WRAP`]).
    pub fn tick(&mut self) {
        let width = self.matrix.width();
        for column in (0..width).step_by(2) {
            if should_shift(column, self.cycle) {
                self.matrix.shift_column(column, &mut self.rng);
            }
        }
        self.cycle = (self.cycle + 1) % CYCLE_WRAP;
    }
}

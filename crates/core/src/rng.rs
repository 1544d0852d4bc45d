//! RNG module - seeded randomness for glyph selection
//!
//! Provides a simple LCG so the animation is deterministic under a fixed
//! seed, and [`random_glyph`], the single draw function used both when the
//! matrix is first filled and when a column shifts a fresh glyph in at the
//! top.

use crate::types::SYMBOLS;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Draw one glyph uniformly from the palette.
///
/// Construction and shifting both go through this function, so a cloned RNG
/// replays the exact glyph sequence.
pub fn random_glyph(rng: &mut SimpleRng) -> char {
    SYMBOLS[rng.next_range(SYMBOLS.len() as u32) as usize]
}

//! Core animation model - pure, deterministic, and testable
//!
//! This crate contains the rain matrix and the per-frame driver logic. It has
//! **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces an identical animation
//! - **Testable**: Every frame transition can be asserted cell by cell
//! - **Portable**: Runs headless against any output sink
//!
//! # Module Structure
//!
//! - [`matrix`]: the character grid with its blank/active column partition
//!   and the downward column shift
//! - [`rng`]: seeded LCG and uniform glyph selection from the palette
//! - [`state`]: [`RainState`](state::RainState), which owns the matrix, the
//!   RNG, and the cycle counter, and applies the per-column cadence rule
//!
//! # Example
//!
//! ```
//! use tui_rain_core::RainState;
//!
//! let mut rain = RainState::new(8, 4, 12345).unwrap();
//! rain.tick();
//! // Odd columns stay blank forever; even columns carry glyphs.
//! assert_eq!(rain.matrix().get(1, 0), Some(' '));
//! ```

pub mod matrix;
pub mod rng;
pub mod state;

pub use tui_rain_types as types;

// Re-export commonly used items for convenience
pub use matrix::{is_active_column, RainMatrix};
pub use rng::{random_glyph, SimpleRng};
pub use state::{should_shift, RainState};

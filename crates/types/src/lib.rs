//! Shared constants for the digital rain animation.
//!
//! This crate defines the timing constants and the glyph palette used
//! throughout the application. Everything here is pure data with no external
//! dependencies, usable from the core model, the terminal layer, and tests.
//!
//! # Animation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_DELAY_MS` | 40 | Pause between frames in milliseconds |
//! | `CYCLE_WRAP` | 1000 | Cycle counter modulus (overflow guard) |
//! | `COLUMN_PERIOD` | 6 | Number of distinct fall-speed tiers across columns |
//!
//! # Column Cadence
//!
//! An active column `w` shifts on a given frame iff
//! `w % COLUMN_PERIOD <= cycle % COLUMN_PERIOD`. Columns at a multiple of the
//! period shift every frame; the further a column index is from one, the more
//! frames it sits out, which produces the staggered fall speeds.
//!
//! # Examples
//!
//! ```
//! use tui_rain_types::{BLANK, CYCLE_WRAP, SYMBOLS};
//!
//! assert_eq!(CYCLE_WRAP, 1000);
//! assert!(SYMBOLS.contains(&BLANK));
//! ```

/// Pause between frames in milliseconds.
pub const FRAME_DELAY_MS: u64 = 40;

/// Cycle counter modulus. The counter wraps here so it can never overflow.
pub const CYCLE_WRAP: u32 = 1000;

/// Number of distinct fall-speed tiers across columns.
pub const COLUMN_PERIOD: u32 = 6;

/// Marker for cells in blank spacer columns.
pub const BLANK: char = ' ';

/// Glyph palette for active cells.
///
/// Drawn from uniformly at random. Duplicate entries weight the distribution
/// toward `@`, `Y`, and `y`; the trailing space lets glyph streams break up
/// instead of running solid from top to bottom.
pub const SYMBOLS: [char; 27] = [
    '&', '%', '#', '$', '@', '@', '*', '(', '@', 'Y', 'y', 'y', 'u', 'U', 'j', 'J', 'h', 'H', 'F',
    'f', 's', 'q', 'V', 'N', 'n', 'v', ' ',
];

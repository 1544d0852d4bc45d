//! The rain matrix: a character grid with alternating glyph and spacer
//! columns.
//!
//! Cells are plain `char`s stored row-major in a flat `Vec`. Dimensions are
//! fixed at construction; there is no resize path. Even-indexed columns are
//! *active* and carry glyphs, odd-indexed columns hold [`BLANK`] in every row
//! for the lifetime of the matrix.

use crate::rng::{random_glyph, SimpleRng};
use crate::types::BLANK;

/// Whether a column may carry glyphs (even index) or is a permanent spacer
/// (odd index).
pub fn is_active_column(x: u16) -> bool {
    x % 2 == 0
}

/// 2D grid of animation cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainMatrix {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl RainMatrix {
    /// Build a matrix with active columns filled from the palette and spacer
    /// columns blank.
    ///
    /// Returns `None` if either dimension is 0; callers decide how to report
    /// the degenerate geometry.
    pub fn new(width: u16, height: u16, rng: &mut SimpleRng) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let len = (width as usize) * (height as usize);
        let mut cells = Vec::with_capacity(len);
        for _ in 0..height {
            for x in 0..width {
                if is_active_column(x) {
                    cells.push(random_glyph(rng));
                } else {
                    cells.push(BLANK);
                }
            }
        }

        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// One row of cells in column order.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: u16) -> &[char] {
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    /// Shift one active column down a row and feed a fresh glyph in at the
    /// top.
    ///
    /// Rows are processed bottom-to-top so each source cell is read before it
    /// is overwritten. Blank and out-of-range columns are left untouched,
    /// which keeps the column partition invariant no matter what the caller
    /// passes.
    pub fn shift_column(&mut self, x: u16, rng: &mut SimpleRng) {
        if !is_active_column(x) || x >= self.width {
            return;
        }

        let w = self.width as usize;
        let col = x as usize;
        for y in (1..self.height as usize).rev() {
            self.cells[y * w + col] = self.cells[(y - 1) * w + col];
        }
        self.cells[col] = random_glyph(rng);
    }
}

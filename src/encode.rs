//! Dot-matrix encoder: packs 2×4 pixel blocks into braille glyphs.
//!
//! Each terminal cell covers pixels `(col*2 + dx, row*4 + dy)` for
//! `dx ∈ {0, 1}`, `dy ∈ {0, 1, 2, 3}`. Every lit pixel sets one bit of the
//! offset from U+2800, using the braille dot numbering:
//!
//! ```text
//!   dx=0 dx=1
//!   ●1   ●4     dy=0
//!   ●2   ●5     dy=1
//!   ●3   ●6     dy=2
//!   ●7   ●8     dy=3
//! ```

use thiserror::Error;

use crate::buffer::GlyphGrid;
use crate::raster::{Bitmap, CELL_PIXELS_X, CELL_PIXELS_Y};

/// First code point of the braille patterns block (no dots raised).
pub const DOT_MATRIX_BASE: u32 = 0x2800;

/// Glyph written when a cell cannot be encoded.
pub const BLANK: char = ' ';

/// Bit for the dot at `(dx, dy)`, indexed `[dy][dx]`.
const DOT_BITS: [[u8; CELL_PIXELS_X]; CELL_PIXELS_Y] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// A cell whose dot pattern did not map to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dot pattern {mask:#04x} has no glyph (code point {code_point:#x})")]
pub struct GlyphError {
    /// The dot bits that were set.
    pub mask: u8,
    /// The code point that was rejected.
    pub code_point: u32,
}

/// Bit for the dot at `(dx, dy)` within a cell, or 0 outside the block.
#[inline]
pub fn dot_bit(dx: usize, dy: usize) -> u8 {
    DOT_BITS
        .get(dy)
        .and_then(|row| row.get(dx))
        .copied()
        .unwrap_or(0)
}

/// The braille glyph for a set of dot bits.
pub fn glyph_for(mask: u8) -> Result<char, GlyphError> {
    let code_point = DOT_MATRIX_BASE + u32::from(mask);
    char::from_u32(code_point).ok_or(GlyphError { mask, code_point })
}

/// Dot bits for cell `(col, row)`. Pixels outside `bitmap` count as off.
pub fn cell_mask(bitmap: &Bitmap, col: usize, row: usize) -> u8 {
    let x0 = col * CELL_PIXELS_X;
    let y0 = row * CELL_PIXELS_Y;
    let mut mask = 0u8;
    for (dy, bits) in DOT_BITS.iter().enumerate() {
        for (dx, bit) in bits.iter().enumerate() {
            if bitmap.get(x0 + dx, y0 + dy) {
                mask |= bit;
            }
        }
    }
    mask
}

/// Outcome of encoding one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeReport {
    /// Cells written.
    pub cells: usize,
    /// Cells left blank because their glyph could not be produced.
    pub blanked: usize,
}

/// Encode `bitmap` into `grid`, overwriting every cell.
pub fn encode(bitmap: &Bitmap, grid: &mut GlyphGrid) -> EncodeReport {
    encode_with(bitmap, grid, glyph_for)
}

/// Encode `bitmap` into `grid`, mapping each cell's dot bits with `glyph`.
///
/// A cell whose glyph cannot be produced is logged and left blank; the rest
/// of the frame is still encoded.
pub fn encode_with<F>(bitmap: &Bitmap, grid: &mut GlyphGrid, glyph: F) -> EncodeReport
where
    F: Fn(u8) -> Result<char, GlyphError>,
{
    let mut report = EncodeReport::default();
    if grid.is_empty() {
        return report;
    }

    let width = usize::from(grid.width());
    for (index, cell) in grid.cells_mut().iter_mut().enumerate() {
        let (col, row) = (index % width, index / width);
        *cell = match glyph(cell_mask(bitmap, col, row)) {
            Ok(c) => c,
            Err(err) => {
                log::warn!("cell ({col}, {row}): {err}");
                report.blanked += 1;
                BLANK
            }
        };
        report.cells += 1;
    }
    report
}

//! Rasterizer: draws a scene onto a monochrome canvas.
//!
//! The canvas is sized at two pixels per terminal column and four per row,
//! matching the 2×4 dots of a braille cell.

mod bitmap;
mod canvas;

pub use bitmap::Bitmap;
pub use canvas::{BitmapCanvas, Canvas, Ink};

use crate::scene::Circle;

/// Horizontal pixels per terminal cell.
pub const CELL_PIXELS_X: usize = 2;
/// Vertical pixels per terminal cell.
pub const CELL_PIXELS_Y: usize = 4;

/// Pixel size of the canvas backing a `cols`×`rows` terminal.
pub fn canvas_size(cols: u16, rows: u16) -> (usize, usize) {
    (
        usize::from(cols) * CELL_PIXELS_X,
        usize::from(rows) * CELL_PIXELS_Y,
    )
}

/// Clear `canvas` and fill every circle of `scene` in order.
pub fn rasterize<C: Canvas + ?Sized>(canvas: &mut C, scene: &[Circle]) {
    canvas.set_fill(Ink::Background);
    canvas.clear();
    canvas.set_fill(Ink::Foreground);
    for circle in scene {
        canvas.fill_circle(circle);
    }
}

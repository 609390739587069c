//! Canvas: the vector drawing capability the rasterizer draws through.

use super::Bitmap;
use crate::scene::Circle;

/// Paint used by fill operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ink {
    /// Pixels off.
    #[default]
    Background,
    /// Pixels on.
    Foreground,
}

impl Ink {
    #[inline]
    const fn is_on(self) -> bool {
        matches!(self, Self::Foreground)
    }
}

/// A pixel surface that can be cleared and filled with circles.
pub trait Canvas {
    /// Width in pixels.
    fn width(&self) -> usize;

    /// Height in pixels.
    fn height(&self) -> usize;

    /// Reallocate the surface; all content is discarded.
    fn resize(&mut self, width: usize, height: usize);

    /// Select the ink used by subsequent fills.
    fn set_fill(&mut self, ink: Ink);

    /// Reset every pixel to the background.
    fn clear(&mut self);

    /// Fill `circle` with the current ink.
    fn fill_circle(&mut self, circle: &Circle);

    /// The pixels drawn so far.
    fn bitmap(&self) -> &Bitmap;
}

/// A [`Canvas`] that paints straight into a [`Bitmap`].
///
/// A pixel belongs to a circle when its center `(x + 0.5, y + 0.5)` lies
/// inside it. Fills are boolean, so overlapping circles give the same result
/// in any order.
#[derive(Debug, Clone)]
pub struct BitmapCanvas {
    bitmap: Bitmap,
    ink: Ink,
}

impl BitmapCanvas {
    /// Create a canvas with every pixel off.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bitmap: Bitmap::new(width, height),
            ink: Ink::Foreground,
        }
    }
}

impl Canvas for BitmapCanvas {
    fn width(&self) -> usize {
        self.bitmap.width()
    }

    fn height(&self) -> usize {
        self.bitmap.height()
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.bitmap.resize(width, height);
    }

    fn set_fill(&mut self, ink: Ink) {
        self.ink = ink;
    }

    fn clear(&mut self) {
        self.bitmap.fill(false);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn fill_circle(&mut self, circle: &Circle) {
        let Circle { x: cx, y: cy, r } = *circle;
        if !(cx.is_finite() && cy.is_finite() && r.is_finite()) || r <= 0.0 {
            return;
        }

        let height = self.bitmap.height() as f64;
        let width = self.bitmap.width() as f64;

        // Rows whose pixel centers fall within [cy - r, cy + r].
        let y_first = (cy - r - 0.5).ceil().max(0.0);
        let y_last = (cy + r - 0.5).floor().min(height - 1.0);
        if y_first > y_last {
            return;
        }

        let on = self.ink.is_on();
        let r2 = r * r;
        let mut y = y_first;
        while y <= y_last {
            let dy = y + 0.5 - cy;
            let half = (r2 - dy * dy).max(0.0).sqrt();
            let x_first = (cx - half - 0.5).ceil().max(0.0);
            let x_last = (cx + half - 0.5).floor().min(width - 1.0);
            if x_first <= x_last {
                self.bitmap
                    .fill_span(y as usize, x_first as usize, x_last as usize + 1, on);
            }
            y += 1.0;
        }
    }

    fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }
}

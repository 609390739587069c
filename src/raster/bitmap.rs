//! Bitmap: a monochrome pixel grid.

/// A `width`×`height` grid of on/off pixels in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    pixels: Vec<bool>,
    width: usize,
    height: usize,
}

impl Bitmap {
    /// Create an all-off bitmap.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![false; width * height],
            width,
            height,
        }
    }

    /// Build a bitmap by evaluating `on(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut on: impl FnMut(usize, usize) -> bool) -> Self {
        let mut bitmap = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                bitmap.pixels[y * width + x] = on(x, y);
            }
        }
        bitmap
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at `(x, y)` is on. Out-of-range pixels are off.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    /// Set one pixel. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = on;
        }
    }

    /// Set pixels `x_start..x_end` of row `y`, clipped to the bitmap.
    pub fn fill_span(&mut self, y: usize, x_start: usize, x_end: usize, on: bool) {
        if y >= self.height {
            return;
        }
        let x_end = x_end.min(self.width);
        if x_start >= x_end {
            return;
        }
        let row = y * self.width;
        self.pixels[row + x_start..row + x_end].fill(on);
    }

    /// Set every pixel.
    pub fn fill(&mut self, on: bool) {
        self.pixels.fill(on);
    }

    /// Reallocate to new dimensions with every pixel off.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.pixels = vec![false; width * height];
        self.width = width;
        self.height = height;
    }

    /// Number of pixels that are on.
    pub fn count_on(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("on", &self.count_on())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_off() {
        let mut bitmap = Bitmap::new(4, 4);
        bitmap.set(9, 9, true);
        assert!(!bitmap.get(9, 9));
        assert_eq!(bitmap.count_on(), 0);
    }

    #[test]
    fn test_fill_span_clips() {
        let mut bitmap = Bitmap::new(4, 2);
        bitmap.fill_span(1, 2, 10, true);
        assert!(!bitmap.get(1, 1));
        assert!(bitmap.get(2, 1));
        assert!(bitmap.get(3, 1));
        assert_eq!(bitmap.count_on(), 2);

        bitmap.fill_span(5, 0, 4, true);
        assert_eq!(bitmap.count_on(), 2);
    }

    #[test]
    fn test_from_fn() {
        let bitmap = Bitmap::from_fn(3, 3, |x, y| x == y);
        assert!(bitmap.get(0, 0) && bitmap.get(1, 1) && bitmap.get(2, 2));
        assert_eq!(bitmap.count_on(), 3);
    }
}

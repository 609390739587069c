//! Grid: a fixed-size, row-major arena of terminal cells.
//!
//! The same container backs the glyph grid produced by the encoder
//! ([`GlyphGrid`]) and the styled screens the display diffs ([`Screen`]).

use super::cell::Cell;

/// Glyph per terminal cell, as produced by the dot-matrix encoder.
pub type GlyphGrid = Grid<char>;

/// Styled cells as they are (or will be) shown on the terminal.
pub type Screen = Grid<Cell>;

/// A grid of values addressed by `(col, row)`.
///
/// Values are stored contiguously in row-major order:
/// `index = row * width + col`. Zero-sized grids are valid and hold nothing.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: u16,
    height: u16,
    blank: T,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `blank`.
    pub fn new(width: u16, height: u16, blank: T) -> Self {
        Self {
            cells: vec![blank; Self::area(width, height)],
            width,
            height,
            blank,
        }
    }

    #[inline]
    fn area(width: u16, height: u16) -> usize {
        usize::from(width) * usize::from(height)
    }

    /// Width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells (zero width or height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// All cells in row-major order, mutably.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Convert `(col, row)` to a linear index, or `None` when out of bounds.
    #[inline]
    pub fn index_of(&self, col: u16, row: u16) -> Option<usize> {
        if col < self.width && row < self.height {
            Some(usize::from(row) * usize::from(self.width) + usize::from(col))
        } else {
            None
        }
    }

    /// The cell at `(col, row)`.
    #[inline]
    pub fn get(&self, col: u16, row: u16) -> Option<&T> {
        self.index_of(col, row).map(|i| &self.cells[i])
    }

    /// Set the cell at `(col, row)`.
    ///
    /// Returns `false` if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, col: u16, row: u16, value: T) -> bool {
        if let Some(idx) = self.index_of(col, row) {
            self.cells[idx] = value;
            true
        } else {
            false
        }
    }

    /// Reallocate to new dimensions, discarding all content.
    ///
    /// Every cell of the new grid is blank, so nothing from a previous size
    /// survives a shrink-then-grow sequence.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.cells = vec![self.blank; Self::area(width, height)];
        self.width = width;
        self.height = height;
    }

    /// Copy content from a grid of the same dimensions.
    pub fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.width, other.width);
        debug_assert_eq!(self.height, other.height);
        self.cells.copy_from_slice(&other.cells);
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(usize::from(self.width.max(1)))
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("blank", &self.blank)
            .finish_non_exhaustive()
    }
}

impl GlyphGrid {
    /// A glyph grid filled with spaces.
    pub fn blank_glyphs(width: u16, height: u16) -> Self {
        Self::new(width, height, ' ')
    }
}

impl Screen {
    /// A screen filled with [`Cell::EMPTY`].
    pub fn empty(width: u16, height: u16) -> Self {
        Self::new(width, height, Cell::EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = GlyphGrid::blank_glyphs(80, 24);
        assert_eq!(grid.width(), 80);
        assert_eq!(grid.height(), 24);
        assert_eq!(grid.len(), 80 * 24);
        assert!(grid.cells().iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_grid_zero_sized() {
        let grid = GlyphGrid::blank_glyphs(0, 24);
        assert!(grid.is_empty());
        assert!(grid.get(0, 0).is_none());
        assert_eq!(grid.rows().count(), 0);
    }

    #[test]
    fn test_grid_bounds() {
        let grid = Screen::empty(80, 24);
        assert!(grid.get(79, 23).is_some());
        assert!(grid.get(80, 23).is_none());
        assert!(grid.get(79, 24).is_none());
    }

    #[test]
    fn test_grid_index() {
        let grid = Screen::empty(80, 24);
        assert_eq!(grid.index_of(5, 10), Some(10 * 80 + 5));
    }

    #[test]
    fn test_grid_get_set() {
        let mut grid = Screen::empty(80, 24);
        assert!(grid.set(5, 10, Cell::new('X')));
        assert_eq!(grid.get(5, 10).map(Cell::glyph), Some('X'));
        assert!(!grid.set(80, 0, Cell::new('Y')));
    }

    #[test]
    fn test_grid_resize_discards_content() {
        let mut grid = GlyphGrid::blank_glyphs(10, 5);
        grid.set(2, 2, '⠿');

        grid.resize(4, 3);
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.len(), 12);

        grid.resize(10, 5);
        assert_eq!(grid.get(2, 2), Some(&' '));
    }
}

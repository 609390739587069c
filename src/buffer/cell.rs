//! Cell: one styled character position on the screen.
//!
//! # Memory Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Cell Layout (12 bytes)                     │
//! ├────────────┬───────────┬───────────┬────────┤
//! │   glyph    │    fg     │    bg     │  mod   │
//! │   char     │  [u8; 3]  │  [u8; 3]  │  u8    │
//! │  4 bytes   │  3 bytes  │  3 bytes  │  1b    │
//! └────────────┴───────────┴───────────┴────────┘
//! ```
//!
//! Every glyph this crate draws is a single code point of display width 1
//! (dot-matrix patterns and ASCII overlay text), so the glyph is stored as a
//! plain `char` with no overflow storage.

use bitflags::bitflags;

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure red, used for warnings.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green (xterm palette index 2).
    pub const GREEN: Self = Self::new(0, 128, 0);
    /// Yellow (xterm palette index 3).
    pub const YELLOW: Self = Self::new(128, 128, 0);
    /// Light sky blue (xterm palette index 111).
    pub const SKY: Self = Self::new(0x87, 0xaf, 0xff);
    /// Default foreground.
    pub const DEFAULT_FG: Self = Self::SKY;
    /// Default background.
    pub const DEFAULT_BG: Self = Self::BLACK;
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

bitflags! {
    /// Text style modifiers.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single screen cell: a glyph plus its style.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    glyph: char,
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
}

const _: () = assert!(
    std::mem::size_of::<Cell>() == 12,
    "Cell must stay 12 bytes"
);

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space with default colors).
    pub const EMPTY: Self = Self {
        glyph: ' ',
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        modifiers: Modifiers::empty(),
    };

    /// Create a cell holding `glyph` with default colors.
    #[inline]
    pub const fn new(glyph: char) -> Self {
        Self {
            glyph,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// The glyph shown in this cell.
    #[inline]
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Get the modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Replace the glyph, keeping the style.
    #[inline]
    pub const fn set_glyph(&mut self, glyph: char) -> &mut Self {
        self.glyph = glyph;
        self
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("glyph", &self.glyph)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

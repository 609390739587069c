//! Buffer module: cell grids shared by the encoder and the display.
//!
//! - [`Cell`]: a glyph plus its colors and modifiers
//! - [`Grid`]: a row-major arena, used as [`GlyphGrid`] and [`Screen`]
//! - [`Rgb`]: true-color representation
//! - [`Modifiers`]: text style bitflags
//! - [`diff`]: turns screen changes into minimal ANSI output

mod cell;
mod grid;
pub mod diff;

pub use cell::{Cell, Modifiers, Rgb};
pub use grid::{GlyphGrid, Grid, Screen};

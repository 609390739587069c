//! # Dotspin
//!
//! A rotating spiral of circles drawn in the terminal with braille dots.
//!
//! Every frame the scene is rasterized at two pixels per column and four per
//! row, then each 2×4 block is packed into one dot-matrix glyph, so a
//! terminal of `cols`×`rows` cells shows a `cols*2`×`rows*4` image.
//!
//! ## Core Concepts
//!
//! - **One-way pipeline**: state → circles → bitmap → glyphs → screen
//! - **Double-buffered rendering**: only changed cells are written each frame
//! - **Actor model**: an input thread sends controls to the frame scheduler
//!
//! ## Example
//!
//! ```rust
//! use dotspin::buffer::GlyphGrid;
//! use dotspin::raster::{canvas_size, rasterize, BitmapCanvas, Canvas};
//! use dotspin::scene::{generate, AnimationState};
//!
//! let (w, h) = canvas_size(40, 20);
//! let mut canvas = BitmapCanvas::new(w, h);
//! rasterize(&mut canvas, &generate(&AnimationState::default(), 40, 20));
//!
//! let mut glyphs = GlyphGrid::blank_glyphs(40, 20);
//! dotspin::encode::encode(canvas.bitmap(), &mut glyphs);
//! assert_eq!(glyphs.width(), 40);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod display;
pub mod encode;
pub mod raster;
pub mod scene;
pub mod terminal;

// Re-exports for convenience
pub use actor::{Control, InputActor, Scheduler, SchedulerConfig};
pub use buffer::{Cell, GlyphGrid, Modifiers, Rgb, Screen};
pub use display::{Display, FrameTiming};
pub use scene::{Adjustment, AnimationState, Circle};

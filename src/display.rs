//! Terminal display: composes glyphs and overlays into a screen and presents it.
//!
//! The display keeps two screens, the one last presented and the one being
//! composed. Presenting diffs them and writes the whole frame with a single
//! `write_all` + `flush`, so a frame is never visible half drawn.

use std::io::{self, Write};
use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::buffer::diff::{render_diff, render_full, DiffState};
use crate::buffer::{Cell, GlyphGrid, Modifiers, Rgb, Screen};
use crate::encode::BLANK;
use crate::scene::AnimationState;
use crate::terminal::OutputBuffer;

/// Foreground of dot-matrix glyphs.
pub const GLYPH_FG: Rgb = Rgb::SKY;
/// Background of dot-matrix glyphs.
pub const GLYPH_BG: Rgb = Rgb::BLACK;

/// First column of the timing overlay.
pub const TIMING_COLUMN: u16 = 1;
/// First column of the parameter overlay.
pub const PARAMS_COLUMN: u16 = 20;

/// Foreground per overlay line.
const OVERLAY_FG: [Rgb; 3] = [Rgb::SKY, Rgb::GREEN, Rgb::YELLOW];
/// Background per overlay line.
const OVERLAY_BG: [Rgb; 3] = [
    Rgb::new(43, 43, 43),
    Rgb::new(40, 40, 40),
    Rgb::new(30, 30, 30),
];
/// Background of the frame-time line once it exceeds the warning threshold.
const WARNING_BG: Rgb = Rgb::RED;

/// Stage durations shown in the timing overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameTiming {
    /// Scene generation plus rasterization.
    pub raster: Duration,
    /// Encoding plus painting the glyph grid.
    pub encode: Duration,
    /// Busy time of the previous frame.
    pub frame: Duration,
}

/// Present statistics for debugging/profiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentStats {
    /// Frames presented.
    pub frames: u64,
    /// Total bytes written to the terminal.
    pub bytes_written: u64,
    /// Cells written by the last present.
    pub last_cells_changed: usize,
}

/// Paints frames to a terminal-like writer.
pub struct Display<W: Write> {
    out: W,
    /// What the terminal shows.
    current: Screen,
    /// What the next present will show.
    next: Screen,
    diff_state: DiffState,
    output: OutputBuffer,
    needs_full_redraw: bool,
    clear_screen: bool,
    stats: PresentStats,
}

impl<W: Write> Display<W> {
    /// Create a display for a `width`×`height` cell terminal.
    ///
    /// The first present is always a full redraw.
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            current: Screen::empty(width, height),
            next: Screen::empty(width, height),
            diff_state: DiffState::new(),
            output: OutputBuffer::new(),
            needs_full_redraw: true,
            clear_screen: true,
            stats: PresentStats::default(),
        }
    }

    /// Width in cells.
    pub const fn width(&self) -> u16 {
        self.next.width()
    }

    /// Height in cells.
    pub const fn height(&self) -> u16 {
        self.next.height()
    }

    /// The screen being composed.
    pub const fn screen(&self) -> &Screen {
        &self.next
    }

    /// Present statistics.
    pub const fn stats(&self) -> &PresentStats {
        &self.stats
    }

    /// The underlying writer.
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Reallocate both screens; the next present clears and redraws.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.current.resize(width, height);
        self.next.resize(width, height);
        self.request_clear();
    }

    /// Clear the terminal and redraw everything on the next present.
    pub const fn request_clear(&mut self) {
        self.needs_full_redraw = true;
        self.clear_screen = true;
    }

    /// Copy `glyphs` onto the screen in the fixed glyph style.
    ///
    /// Every screen cell is written; cells `glyphs` does not cover are blank.
    pub fn paint(&mut self, glyphs: &GlyphGrid) {
        let base = Cell::new(BLANK).with_fg(GLYPH_FG).with_bg(GLYPH_BG);
        let width = self.next.width();
        for (row, cells) in (0u16..).zip(self.next.cells_mut().chunks_mut(usize::from(width.max(1)))) {
            for (col, cell) in (0u16..).zip(cells.iter_mut()) {
                let glyph = glyphs.get(col, row).copied().unwrap_or(BLANK);
                *cell = base;
                cell.set_glyph(glyph);
            }
        }
    }

    /// Draw the three timing lines at the bottom left.
    ///
    /// Durations are truncated to whole milliseconds. The frame line turns
    /// red once `timing.frame` exceeds `warn_after`.
    pub fn draw_timing(&mut self, timing: &FrameTiming, warn_after: Duration) {
        let lines = [
            format!("mkimg:  {:>3}ms", timing.raster.as_millis()),
            format!("mkdots: {:>3}ms", timing.encode.as_millis()),
            format!("screen: {:>3}ms", timing.frame.as_millis()),
        ];
        let slow = timing.frame > warn_after;
        for (i, line) in lines.iter().enumerate() {
            let (bg, modifiers) = if i == 2 && slow {
                (WARNING_BG, Modifiers::BOLD)
            } else {
                (OVERLAY_BG[i], Modifiers::empty())
            };
            if let Some(row) = self.overlay_row(i) {
                self.draw_text(TIMING_COLUMN, row, line, OVERLAY_FG[i], bg, modifiers);
            }
        }
    }

    /// Draw the three parameter lines with their controlling keys.
    pub fn draw_params(&mut self, state: &AnimationState) {
        let lines = [
            format!("radius [A-Z]: {:.0}", state.radius.trunc()),
            format!("circles[S-X]: {}", state.circle_count),
            format!("offset [D-C]: {}", state.offset),
        ];
        for (i, line) in lines.iter().enumerate() {
            if let Some(row) = self.overlay_row(i) {
                self.draw_text(PARAMS_COLUMN, row, line, OVERLAY_FG[i], OVERLAY_BG[i], Modifiers::empty());
            }
        }
    }

    /// Row of overlay line `line` (0..3) counted from three rows above the bottom.
    fn overlay_row(&self, line: usize) -> Option<u16> {
        let line = u16::try_from(line).ok()?;
        self.height().checked_add(line)?.checked_sub(3)
    }

    /// Draw `text` starting at `(col, row)`, clipped at the right edge.
    ///
    /// Graphemes that would not occupy exactly one cell are shown as `?`.
    /// Returns the number of columns used.
    pub fn draw_text(
        &mut self,
        col: u16,
        row: u16,
        text: &str,
        fg: Rgb,
        bg: Rgb,
        modifiers: Modifiers,
    ) -> u16 {
        let style = Cell::new(BLANK)
            .with_fg(fg)
            .with_bg(bg)
            .with_modifiers(modifiers);
        let mut x = col;
        for grapheme in text.graphemes(true) {
            let mut chars = grapheme.chars();
            let glyph = match (chars.next(), chars.next()) {
                (Some(c), None) if grapheme.width() == 1 => c,
                _ => '?',
            };
            let mut cell = style;
            cell.set_glyph(glyph);
            if !self.next.set(x, row, cell) {
                break;
            }
            x += 1;
        }
        x - col
    }

    /// Write the composed screen to the terminal.
    ///
    /// # Errors
    ///
    /// Returns the writer's error. The next present then redraws everything,
    /// since the terminal may hold a partial frame.
    pub fn present(&mut self) -> io::Result<()> {
        self.output.clear();

        let cells_changed = if self.needs_full_redraw {
            if self.clear_screen {
                self.output.reset_attrs();
                self.output.clear_screen();
            }
            render_full(&self.next, &mut self.output, &mut self.diff_state);
            self.next.len()
        } else {
            render_diff(&self.current, &self.next, &mut self.output, &mut self.diff_state)
                .cells_changed
        };

        if !self.output.is_empty() {
            if let Err(err) = self.output.flush_to(&mut self.out) {
                self.request_clear();
                self.diff_state.reset();
                return Err(err);
            }
        }

        self.needs_full_redraw = false;
        self.clear_screen = false;
        self.current.copy_from(&self.next);

        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        self.stats.last_cells_changed = cells_changed;
        Ok(())
    }
}

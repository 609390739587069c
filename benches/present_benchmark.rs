//! Present benchmark: diff and write a frame of dot glyphs.
//!
//! Target: < 500µs for 200×50

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dotspin::buffer::diff::{render_diff, render_full, DiffState};
use dotspin::buffer::{GlyphGrid, Screen};
use dotspin::display::Display;
use dotspin::encode::encode;
use dotspin::raster::{canvas_size, rasterize, BitmapCanvas, Canvas};
use dotspin::scene::{generate, AnimationState};
use dotspin::terminal::OutputBuffer;
use dotspin::{Cell, Rgb};

/// Glyphs for the default scene at `phase`.
fn frame_glyphs(cols: u16, rows: u16, phase: f64) -> GlyphGrid {
    let state = AnimationState {
        rotation_phase: phase,
        ..AnimationState::default()
    };
    let (w, h) = canvas_size(cols, rows);
    let mut canvas = BitmapCanvas::new(w, h);
    rasterize(&mut canvas, &generate(&state, cols, rows));
    let mut glyphs = GlyphGrid::blank_glyphs(cols, rows);
    encode(canvas.bitmap(), &mut glyphs);
    glyphs
}

fn screen_from(glyphs: &GlyphGrid) -> Screen {
    let mut screen = Screen::empty(glyphs.width(), glyphs.height());
    for (cell, &glyph) in screen.cells_mut().iter_mut().zip(glyphs.cells()) {
        *cell = Cell::new(glyph).with_fg(Rgb::SKY);
    }
    screen
}

fn diff_consecutive_frames(c: &mut Criterion) {
    let current = screen_from(&frame_glyphs(200, 50, 100.0));
    let next = screen_from(&frame_glyphs(200, 50, 102.0));
    let mut output = OutputBuffer::new();

    c.bench_function("diff_200x50_next_frame", |b| {
        b.iter(|| {
            output.clear();
            let mut state = DiffState::new();
            render_diff(black_box(&current), black_box(&next), &mut output, &mut state)
        })
    });
}

fn full_redraw(c: &mut Criterion) {
    let screen = screen_from(&frame_glyphs(200, 50, 100.0));
    let mut output = OutputBuffer::new();

    c.bench_function("full_redraw_200x50", |b| {
        b.iter(|| {
            output.clear();
            let mut state = DiffState::new();
            render_full(black_box(&screen), &mut output, &mut state);
            output.len()
        })
    });
}

fn display_present(c: &mut Criterion) {
    let frames = [frame_glyphs(200, 50, 100.0), frame_glyphs(200, 50, 102.0)];
    let mut display = Display::new(std::io::sink(), 200, 50);
    let mut i = 0;

    c.bench_function("display_present_200x50", |b| {
        b.iter(|| {
            display.paint(&frames[i % 2]);
            i += 1;
            display.present()
        })
    });
}

criterion_group!(benches, diff_consecutive_frames, full_redraw, display_present);
criterion_main!(benches);

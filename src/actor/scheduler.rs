//! Frame Scheduler: the fixed-cadence loop that owns every frame buffer.
//!
//! Each tick runs generate → rasterize → encode → paint → present and then
//! advances the animation. Controls from the input actor are queued as they
//! arrive and applied together at the start of the next tick, so a frame
//! never sees a half-applied change. Quit is the exception: it stops the
//! loop immediately.

use super::messages::Control;
use crate::buffer::GlyphGrid;
use crate::display::{Display, FrameTiming};
use crate::encode::encode;
use crate::raster::{canvas_size, rasterize, Bitmap, BitmapCanvas, Canvas};
use crate::scene::{generate_into, AnimationState, Circle};
use crossbeam_channel::{after, select, Receiver};
use std::io::Write;
use std::mem;
use std::time::{Duration, Instant};

/// Configuration for the scheduler and the terminal it drives.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Target interval between tick starts.
    pub frame_interval: Duration,
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Frame time above which the timing overlay turns red.
    pub warn_threshold: Duration,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(33),
            input_poll_timeout: Duration::from_millis(50),
            warn_threshold: Duration::from_millis(30),
            alternate_screen: true,
        }
    }
}

/// Lifecycle of the scheduler. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Ticking.
    Running,
    /// Quit was requested or the control channel closed.
    Stopped,
}

/// Owns the animation state and every per-frame buffer.
pub struct Scheduler<W: Write> {
    config: SchedulerConfig,
    state: AnimationState,
    run_state: SchedulerState,
    width: u16,
    height: u16,
    /// Reused between frames.
    scene: Vec<Circle>,
    canvas: BitmapCanvas,
    glyphs: GlyphGrid,
    display: Display<W>,
    /// Controls received since the last tick.
    pending: Vec<Control>,
    last_tick: Option<Instant>,
    /// Time spent blocked waiting since the last tick started.
    idle: Duration,
    frame_count: u64,
}

impl<W: Write> Scheduler<W> {
    /// Create a scheduler for a `width`×`height` terminal writing to `out`.
    pub fn new(config: SchedulerConfig, out: W, width: u16, height: u16) -> Self {
        let (canvas_width, canvas_height) = canvas_size(width, height);
        Self {
            config,
            state: AnimationState::default(),
            run_state: SchedulerState::Running,
            width,
            height,
            scene: Vec::new(),
            canvas: BitmapCanvas::new(canvas_width, canvas_height),
            glyphs: GlyphGrid::blank_glyphs(width, height),
            display: Display::new(out, width, height),
            pending: Vec::new(),
            last_tick: None,
            idle: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Current animation parameters.
    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Glyph grid produced by the last tick.
    pub const fn glyphs(&self) -> &GlyphGrid {
        &self.glyphs
    }

    /// Bitmap rasterized by the last tick.
    pub fn bitmap(&self) -> &Bitmap {
        self.canvas.bitmap()
    }

    /// The display, for inspecting what was presented.
    pub const fn display(&self) -> &Display<W> {
        &self.display
    }

    /// Number of ticks run.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Current lifecycle state.
    pub const fn run_state(&self) -> SchedulerState {
        self.run_state
    }

    /// Check if the scheduler is still running.
    pub fn is_running(&self) -> bool {
        self.run_state == SchedulerState::Running
    }

    /// Stop the scheduler.
    pub fn stop(&mut self) {
        if self.is_running() {
            log::debug!("scheduler stopped after {} frames", self.frame_count);
        }
        self.run_state = SchedulerState::Stopped;
    }

    /// Accept a control message.
    ///
    /// Quit takes effect at once; everything else waits for the next tick.
    pub fn handle(&mut self, control: Control) {
        match control {
            Control::Quit => self.stop(),
            other => self.pending.push(other),
        }
    }

    fn apply(&mut self, control: Control) {
        match control {
            Control::Quit => self.stop(),
            Control::Reset => {
                log::debug!("resetting animation state");
                self.state.reset();
                self.display.request_clear();
            }
            Control::Adjust(adjustment) => self.state.adjust(adjustment),
            Control::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Reallocate the glyph grid, canvas and display for a new terminal size.
    fn resize(&mut self, width: u16, height: u16) {
        log::debug!("resize {}x{} -> {width}x{height}", self.width, self.height);
        self.width = width;
        self.height = height;
        self.glyphs.resize(width, height);
        let (canvas_width, canvas_height) = canvas_size(width, height);
        self.canvas.resize(canvas_width, canvas_height);
        self.display.resize(width, height);
    }

    /// Run one frame and advance the animation.
    ///
    /// Present failures are logged; the frame is retried in full next tick.
    pub fn tick(&mut self) -> FrameTiming {
        let started = Instant::now();
        let frame = self.last_tick.map_or(Duration::ZERO, |previous| {
            started.saturating_duration_since(previous).saturating_sub(self.idle)
        });
        self.last_tick = Some(started);
        self.idle = Duration::ZERO;

        for control in mem::take(&mut self.pending) {
            self.apply(control);
        }

        generate_into(&self.state, self.width, self.height, &mut self.scene);
        rasterize(&mut self.canvas, &self.scene);
        let raster = started.elapsed();

        let encode_started = Instant::now();
        encode(self.canvas.bitmap(), &mut self.glyphs);
        self.display.paint(&self.glyphs);
        self.display.draw_params(&self.state);
        let timing = FrameTiming {
            raster,
            encode: encode_started.elapsed(),
            frame,
        };
        self.display.draw_timing(&timing, self.config.warn_threshold);

        if let Err(err) = self.display.present() {
            log::error!("failed to present frame {}: {err}", self.frame_count);
        }

        self.state.advance();
        self.frame_count += 1;
        timing
    }

    /// Tick at the configured cadence until quit or until `controls` closes.
    ///
    /// A tick that overruns its interval makes the next one start at once;
    /// no frame is skipped.
    pub fn run(&mut self, controls: &Receiver<Control>) {
        let mut deadline = Instant::now();
        while self.is_running() {
            let wait_started = Instant::now();
            let timeout = deadline.saturating_duration_since(wait_started);
            select! {
                recv(controls) -> msg => {
                    self.idle += wait_started.elapsed();
                    match msg {
                        Ok(control) => self.handle(control),
                        // All senders gone: no quit can ever arrive
                        Err(_) => self.stop(),
                    }
                }
                recv(after(timeout)) -> _ => {
                    self.idle += wait_started.elapsed();
                    deadline = Instant::now() + self.config.frame_interval;
                    self.tick();
                }
            }
        }
    }
}

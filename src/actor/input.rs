//! Input Actor: Dedicated thread for polling terminal events.
//!
//! The actor turns key presses and resizes into [`Control`] messages and
//! sends them to the scheduler. It never touches animation state or any
//! buffer directly.

use super::messages::Control;
use crate::scene::{Adjustment, CIRCLE_STEP};
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Where the input actor reads events from.
pub trait EventSource {
    /// Wait up to `timeout` for an event to become available.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Read the next event. Only called after `poll` returned `true`.
    fn read(&mut self) -> io::Result<Event>;
}

/// Events from the controlling terminal, via crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// checking for shutdown.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the input thread.
    pub fn spawn(sender: Sender<Control>, poll_timeout: Duration) -> Self {
        Self::spawn_with(TerminalEvents, sender, poll_timeout)
    }

    /// Spawn the input actor thread reading from `source`.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the input thread.
    pub fn spawn_with<S>(mut source: S, sender: Sender<Control>, poll_timeout: Duration) -> Self
    where
        S: EventSource + Send + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("dotspin-input".to_string())
            .spawn(move || {
                Self::run_loop(&mut source, &sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop<S: EventSource>(
        source: &mut S,
        sender: &Sender<Control>,
        shutdown: &AtomicBool,
        poll_timeout: Duration,
    ) {
        while !shutdown.load(Ordering::Relaxed) {
            let event = match source.poll(poll_timeout) {
                Ok(true) => source.read(),
                Ok(false) => continue,
                Err(e) => Err(e),
            };

            let control = match event {
                Ok(event) => map_event(&event),
                Err(e) => {
                    // The event source is gone; nothing more will arrive.
                    log::error!("terminal event source failed: {e}");
                    Some(Control::Quit)
                }
            };

            let Some(control) = control else { continue };
            if sender.send(control).is_err() {
                // Receiver dropped, exit
                break;
            }
            if control == Control::Quit {
                break;
            }
        }
        log::debug!("input actor stopped");
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Map a terminal event to the control it requests, if any.
///
/// Only key presses count; releases and repeats reported by some terminals
/// are ignored.
pub fn map_event(event: &Event) -> Option<Control> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        Event::Resize(width, height) => Some(Control::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Control> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    let adjust = |adjustment| Some(Control::Adjust(adjustment));

    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(Control::Quit),
        KeyCode::Char('c' | 'C') if control => Some(Control::Quit),
        KeyCode::Char('l' | 'L') if control => Some(Control::Reset),
        KeyCode::Right => adjust(Adjustment::Pan { dx: 1, dy: 0 }),
        KeyCode::Left => adjust(Adjustment::Pan { dx: -1, dy: 0 }),
        KeyCode::Up => adjust(Adjustment::Pan { dx: 0, dy: -1 }),
        KeyCode::Down => adjust(Adjustment::Pan { dx: 0, dy: 1 }),
        KeyCode::Char(_) if control => None,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => adjust(Adjustment::Radius(1)),
            'z' => adjust(Adjustment::Radius(-1)),
            's' => adjust(Adjustment::CircleCount(CIRCLE_STEP)),
            'x' => adjust(Adjustment::CircleCount(-CIRCLE_STEP)),
            'd' => adjust(Adjustment::Offset(-1)),
            'c' => adjust(Adjustment::Offset(1)),
            _ => None,
        },
        _ => None,
    }
}

//! Actor Model: the input thread and the frame scheduler.
//!
//! Two threads share nothing but a bounded crossbeam channel:
//! - **Input Actor**: Polls terminal events, maps them to [`Control`]s
//! - **Scheduler**: Owns all frame state, drains controls once per tick
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐      Control       ┌──────────────┐     bytes     ┌──────────┐
//! │ Input Thread │ ─────────────────▶ │  Scheduler   │ ────────────▶ │ Terminal │
//! └──────────────┘                    └──────────────┘               └──────────┘
//!                                       ▲ tick every 33ms
//! ```

mod input;
mod messages;
mod scheduler;

pub use input::{map_event, EventSource, InputActor, TerminalEvents};
pub use messages::Control;
pub use scheduler::{Scheduler, SchedulerConfig, SchedulerState};

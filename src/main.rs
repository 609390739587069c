//! Rotating dot spiral (default binary).
//!
//! Esc or Enter quits. Arrows pan, A/Z radius, S/X circle count, D/C offset,
//! Ctrl-L resets.

use std::io;

use anyhow::{Context, Result};
use crossbeam_channel::bounded;
use log::LevelFilter;

use dotspin::actor::{InputActor, Scheduler, SchedulerConfig};
use dotspin::terminal::TerminalSession;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .init();

    let config = SchedulerConfig::default();
    let session =
        TerminalSession::enter(config.alternate_screen).context("failed to initialize terminal")?;
    let (width, height) = TerminalSession::size().context("failed to query terminal size")?;

    let (control_tx, control_rx) = bounded(64);
    let input = InputActor::spawn(control_tx, config.input_poll_timeout);

    let mut scheduler = Scheduler::new(config, io::stdout(), width, height);
    scheduler.run(&control_rx);

    // Dropping the receiver lets a blocked input thread exit.
    drop(control_rx);
    input.join();
    drop(session);
    Ok(())
}

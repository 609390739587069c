//! Terminal capability: session setup/teardown and frame output.

mod output;
mod session;

pub use output::OutputBuffer;
pub use session::TerminalSession;

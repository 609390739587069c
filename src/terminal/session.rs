//! `TerminalSession`: raw mode + alternate screen for the lifetime of a guard.

use crossterm::{
    cursor, execute,
    style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

use crate::buffer::Rgb;

/// Owns the terminal modes the animation needs.
///
/// Entering switches to raw mode, optionally the alternate screen, hides the
/// cursor, applies the default style and clears. Dropping the guard undoes
/// all of it, so the terminal is restored on every exit path.
pub struct TerminalSession {
    alternate_screen: bool,
}

impl TerminalSession {
    /// Prepare the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout is not a terminal or any mode switch fails.
    /// Modes already applied are rolled back before returning.
    pub fn enter(alternate_screen: bool) -> io::Result<Self> {
        // Fails early on a non-tty before touching any mode.
        terminal::size()?;
        terminal::enable_raw_mode()?;
        let session = Self { alternate_screen };

        let mut stdout = io::stdout();
        if alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(
            stdout,
            cursor::Hide,
            SetForegroundColor(to_color(Rgb::DEFAULT_FG)),
            SetBackgroundColor(to_color(Rgb::DEFAULT_BG)),
            terminal::Clear(ClearType::All)
        )?;
        log::debug!("terminal session entered (alternate screen: {alternate_screen})");
        Ok(session)
    }

    /// Current terminal size in cells as `(columns, rows)`.
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, ResetColor, cursor::Show);
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

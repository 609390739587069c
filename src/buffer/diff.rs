//! Diffing Engine: Generate minimal ANSI sequences from screen changes.
//!
//! 1. Compare the presented screen with the next one
//! 2. Emit escape sequences only for changed cells
//! 3. Skip cursor moves when writing adjacent cells
//! 4. Track color and modifier state to avoid redundant SGR sequences
//!
//! All output goes into one [`OutputBuffer`] and is flushed with one syscall.

use super::{Cell, Modifiers, Rgb, Screen};
use crate::terminal::OutputBuffer;

/// What the terminal is believed to look like right now.
#[derive(Debug, Clone)]
pub struct DiffState {
    cursor_x: u16,
    cursor_y: u16,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    modifiers: Option<Modifiers>,
}

impl Default for DiffState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffState {
    /// Create a new diff state with unknown colors and the cursor at home.
    pub const fn new() -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            fg: None,
            bg: None,
            modifiers: None,
        }
    }

    /// Forget everything (e.g., after a full screen clear).
    pub const fn reset(&mut self) {
        self.fg = None;
        self.bg = None;
        self.modifiers = None;
        // Force cursor move on next write
        self.cursor_x = u16::MAX;
        self.cursor_y = u16::MAX;
    }
}

/// Result of a diff operation.
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    /// Number of cells that were different.
    pub cells_changed: usize,
    /// Number of cursor move sequences emitted.
    pub cursor_moves: usize,
    /// Number of color change sequences emitted.
    pub color_changes: usize,
}

/// Render the difference between two screens of equal size.
pub fn render_diff(
    current: &Screen,
    next: &Screen,
    output: &mut OutputBuffer,
    state: &mut DiffState,
) -> DiffResult {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let mut result = DiffResult::default();
    let width = next.width();

    for (y, (old_row, new_row)) in (0u16..).zip(current.rows().zip(next.rows())) {
        for (x, (old, new)) in (0u16..width).zip(old_row.iter().zip(new_row)) {
            if old == new {
                continue;
            }

            result.cells_changed += 1;

            if state.cursor_y != y || state.cursor_x != x {
                output.cursor_move(x, y);
                state.cursor_x = x;
                state.cursor_y = y;
                result.cursor_moves += 1;
            }

            result.color_changes += emit_style(output, state, new);
            output.write_char(new.glyph());
            state.cursor_x = state.cursor_x.saturating_add(1);
        }
    }

    result
}

/// Bring the terminal's SGR state in line with `cell`.
///
/// Returns the number of color sequences emitted.
fn emit_style(output: &mut OutputBuffer, state: &mut DiffState, cell: &Cell) -> usize {
    let mut color_changes = 0;
    let next_mods = cell.modifiers();
    let current_mods = state.modifiers.unwrap_or(Modifiers::empty());

    // Turning a modifier off needs a full reset, which also drops colors.
    if !current_mods.difference(next_mods).is_empty() {
        output.reset_attrs();
        state.fg = None;
        state.bg = None;
        state.modifiers = None;
    }

    if state.fg != Some(cell.fg()) {
        output.set_fg(cell.fg());
        state.fg = Some(cell.fg());
        color_changes += 1;
    }

    if state.bg != Some(cell.bg()) {
        output.set_bg(cell.bg());
        state.bg = Some(cell.bg());
        color_changes += 1;
    }

    if state.modifiers != Some(next_mods) {
        let previous = state.modifiers.unwrap_or(Modifiers::empty());
        output.set_modifiers(next_mods.difference(previous));
        state.modifiers = Some(next_mods);
    }

    color_changes
}

/// Draw every cell of `screen`, ignoring what is currently shown.
///
/// Used for the first frame, after a resize and after a screen clear.
/// Rows are addressed explicitly so the last row never scrolls the terminal.
pub fn render_full(screen: &Screen, output: &mut OutputBuffer, state: &mut DiffState) {
    output.cursor_hide();
    state.reset();

    for (y, row) in (0u16..).zip(screen.rows()) {
        if row.is_empty() {
            continue;
        }
        output.cursor_move(0, y);
        state.cursor_x = 0;
        state.cursor_y = y;

        for cell in row {
            emit_style(output, state, cell);
            output.write_char(cell.glyph());
            state.cursor_x = state.cursor_x.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(output: &OutputBuffer) -> String {
        String::from_utf8_lossy(output.as_bytes()).into_owned()
    }

    #[test]
    fn test_diff_identical_screens() {
        let a = Screen::empty(10, 5);
        let b = Screen::empty(10, 5);
        let mut output = OutputBuffer::new();
        let mut state = DiffState::new();

        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_diff_single_cell_change() {
        let a = Screen::empty(10, 5);
        let mut b = Screen::empty(10, 5);
        b.set(5, 2, Cell::new('⣿'));

        let mut output = OutputBuffer::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 1);
        assert_eq!(result.cursor_moves, 1);
        let text = rendered(&output);
        assert!(text.starts_with("\x1b[3;6H"));
        assert!(text.ends_with('⣿'));
    }

    #[test]
    fn test_diff_adjacent_cells_no_cursor_move() {
        let a = Screen::empty(10, 5);
        let mut b = Screen::empty(10, 5);
        b.set(0, 0, Cell::new('⠁'));
        b.set(1, 0, Cell::new('⠂'));
        b.set(2, 0, Cell::new('⠄'));

        let mut output = OutputBuffer::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 3);
        assert_eq!(result.cursor_moves, 0);
    }

    #[test]
    fn test_diff_color_tracking() {
        let a = Screen::empty(10, 5);
        let mut b = Screen::empty(10, 5);
        b.set(0, 0, Cell::new('A').with_bg(Rgb::RED));
        b.set(1, 0, Cell::new('B').with_bg(Rgb::RED));

        let mut output = OutputBuffer::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        // fg and bg for the first cell, nothing for the second
        assert_eq!(result.color_changes, 2);
    }

    #[test]
    fn test_diff_modifier_removal_resets() {
        let a = Screen::empty(4, 1);
        let mut b = Screen::empty(4, 1);
        b.set(0, 0, Cell::new('A').with_modifiers(Modifiers::BOLD));
        b.set(1, 0, Cell::new('B'));

        let mut output = OutputBuffer::new();
        let mut state = DiffState::new();
        render_diff(&a, &b, &mut output, &mut state);

        let text = rendered(&output);
        let bold = text.find("\x1b[1m").unwrap();
        let reset = text.find("\x1b[0m").unwrap();
        assert!(bold < reset);
    }

    #[test]
    fn test_render_full_addresses_every_row() {
        let mut screen = Screen::empty(3, 2);
        screen.set(0, 0, Cell::new('A'));
        screen.set(2, 1, Cell::new('C'));

        let mut output = OutputBuffer::new();
        let mut state = DiffState::new();
        render_full(&screen, &mut output, &mut state);

        let text = rendered(&output);
        assert!(text.starts_with("\x1b[?25l\x1b[H"));
        assert!(text.contains("\x1b[2H"));
        assert!(text.contains('A'));
        assert!(text.ends_with('C'));
        assert!(!text.contains("\r\n"));
    }
}

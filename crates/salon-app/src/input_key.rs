//! Abstract input key event, independent of terminal library.
//!
//! Keeps salon-app free of crossterm types; the TUI converts its key events
//! into `InputKey` at the boundary.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

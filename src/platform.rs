//! Keyboard shortcuts shown in help text

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts. Terminals on every platform deliver
/// Ctrl combinations, so Cmd is not used even on macOS.
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear-field shortcut display
pub const CLEAR_FIELD_SHORTCUT: &str = "Ctrl+U";

/// Quit shortcut display
pub const QUIT_SHORTCUT: &str = "Esc";

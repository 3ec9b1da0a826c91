//! Platform-agnostic input event types.
//!
//! Every backend maps its native input to these enums. The core terminal
//! never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A non-text key pressed.
    KeyPress(Key),
    /// Character typed.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// Scroll wheel, positive = toward older lines.
    Scroll { dy: i32 },
    /// Pointer click at absolute position.
    PointerClick { x: i32, y: i32 },
    /// The window gained focus.
    FocusGained,
    /// The window lost focus.
    FocusLost,
    /// User requested quit (window close, etc.).
    Quit,
}

/// Keys with terminal meaning. Everything else arrives as [`InputEvent::TextInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Submit the input line.
    Enter,
    /// Cycle command completion.
    Tab,
    /// Recall older history.
    Up,
    /// Recall newer history.
    Down,
    /// Dismiss the certificate viewer.
    Escape,
    /// Capture the frame to a PNG.
    Screenshot,
}

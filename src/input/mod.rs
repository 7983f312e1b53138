//! Input translation
//!
//! Raw window-message payloads (virtual key codes, packed coordinates, wheel
//! deltas, hit-test codes) are turned into `InputEvent`s here so the state
//! machine never sees Win32 types.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyModifiers, translate_char, translate_key_down};
pub use mouse::{HitZone, MouseButton, WheelDirection};

/// Discrete input the state machine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed, Escape or Ctrl+Q
    Quit,
    /// Enter: pick a new random background
    RandomizeBackground,
    /// Shift+C: launch the external editor
    OpenEditor,
    /// Mouse wheel notch
    Wheel(WheelDirection),
    /// Mouse button press at client pixel (x, y)
    Click { button: MouseButton, x: i32, y: i32 },
    /// Client area resized
    Resize { width: i32, height: i32 },
}

//! Keyboard shortcut mapping

use crate::input::InputEvent;

const VK_RETURN: u32 = 0x0d;
const VK_ESCAPE: u32 = 0x1b;
const VK_C: u32 = 0x43;
const VK_Q: u32 = 0x51;

/// Modifier keys held while a key went down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl KeyModifiers {
    pub const NONE: KeyModifiers = KeyModifiers { shift: false, ctrl: false };
    pub const SHIFT: KeyModifiers = KeyModifiers { shift: true, ctrl: false };
    pub const CTRL: KeyModifiers = KeyModifiers { shift: false, ctrl: true };
}

/// Maps a key-down virtual key code to an event
pub fn translate_key_down(vk_code: u32, modifiers: KeyModifiers) -> Option<InputEvent> {
    match vk_code {
        VK_ESCAPE => Some(InputEvent::Quit),
        VK_Q if modifiers.ctrl => Some(InputEvent::Quit),
        VK_C if modifiers.shift => Some(InputEvent::OpenEditor),
        _ => None,
    }
}

/// Maps a translated character code to an event.
///
/// Enter arrives as a carriage return character rather than a key-down.
pub fn translate_char(char_code: u32) -> Option<InputEvent> {
    match char_code {
        VK_RETURN => Some(InputEvent::RandomizeBackground),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_quits_regardless_of_modifiers() {
        assert_eq!(translate_key_down(VK_ESCAPE, KeyModifiers::NONE), Some(InputEvent::Quit));
        assert_eq!(translate_key_down(VK_ESCAPE, KeyModifiers::SHIFT), Some(InputEvent::Quit));
    }

    #[test]
    fn ctrl_q_quits() {
        assert_eq!(translate_key_down(VK_Q, KeyModifiers::CTRL), Some(InputEvent::Quit));
        assert_eq!(translate_key_down(VK_Q, KeyModifiers::NONE), None);
    }

    #[test]
    fn shift_c_opens_editor() {
        assert_eq!(translate_key_down(VK_C, KeyModifiers::SHIFT), Some(InputEvent::OpenEditor));
        assert_eq!(translate_key_down(VK_C, KeyModifiers::NONE), None);
        assert_eq!(translate_key_down(VK_C, KeyModifiers::CTRL), None);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(translate_key_down(0x41, KeyModifiers::NONE), None); // A
        assert_eq!(translate_key_down(VK_RETURN, KeyModifiers::NONE), None);
    }

    #[test]
    fn enter_character_randomizes_background() {
        assert_eq!(translate_char(VK_RETURN), Some(InputEvent::RandomizeBackground));
        assert_eq!(translate_char('a' as u32), None);
    }
}

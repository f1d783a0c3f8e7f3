//! Synthetic key sequences
//!
//! Key codes are Linux evdev codes (`linux/input-event-codes.h`), the form
//! ydotool expects.

use std::fmt;

pub const KEY_LEFTCTRL: u16 = 29;
pub const KEY_LEFTSHIFT: u16 = 42;
pub const KEY_C: u16 = 46;
pub const KEY_LEFT: u16 = 105;
pub const KEY_INSERT: u16 = 110;

/// A single press or release of one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: u16,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn press(code: u16) -> Self {
        Self {
            code,
            pressed: true,
        }
    }

    pub const fn release(code: u16) -> Self {
        Self {
            code,
            pressed: false,
        }
    }
}

/// `code:1` for press, `code:0` for release
impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.code, u8::from(self.pressed))
    }
}

/// Ordered key events sent as one chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySequence {
    name: &'static str,
    events: Vec<KeyEvent>,
}

impl KeySequence {
    /// Press every key in order, then release them in reverse order
    pub fn chord(name: &'static str, keys: &[u16]) -> Self {
        let events = keys
            .iter()
            .map(|&code| KeyEvent::press(code))
            .chain(keys.iter().rev().map(|&code| KeyEvent::release(code)))
            .collect();
        Self { name, events }
    }

    /// Ctrl+Shift+Left: extend the selection to the previous word boundary
    pub fn select_previous_word() -> Self {
        Self::chord("select-previous-word", &[KEY_LEFTCTRL, KEY_LEFTSHIFT, KEY_LEFT])
    }

    /// Shift+Insert: paste the clipboard
    pub fn paste() -> Self {
        Self::chord("paste", &[KEY_LEFTSHIFT, KEY_INSERT])
    }

    /// Ctrl+C: copy the selection
    pub fn copy() -> Self {
        Self::chord("copy", &[KEY_LEFTCTRL, KEY_C])
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

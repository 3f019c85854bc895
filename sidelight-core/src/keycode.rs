//! Keycode to character decoding
//!
//! Keycodes are HID keyboard usage IDs (usage page 0x07) as delivered by the
//! keymap engine. Only printable US-layout keys decode; everything else is
//! `None` and must be treated as a no-op by callers.

/// HID keyboard usage IDs used by the decoder and the modifier tracker
pub mod usage {
    pub const A: u32 = 0x04;
    pub const Z: u32 = 0x1D;
    pub const N1: u32 = 0x1E;
    pub const N9: u32 = 0x26;
    pub const N0: u32 = 0x27;
    pub const ENTER: u32 = 0x28;
    pub const ESCAPE: u32 = 0x29;
    pub const BACKSPACE: u32 = 0x2A;
    pub const TAB: u32 = 0x2B;
    pub const SPACE: u32 = 0x2C;
    pub const MINUS: u32 = 0x2D;
    pub const EQUAL: u32 = 0x2E;
    pub const LEFT_BRACKET: u32 = 0x2F;
    pub const RIGHT_BRACKET: u32 = 0x30;
    pub const BACKSLASH: u32 = 0x31;
    pub const SEMICOLON: u32 = 0x33;
    pub const APOSTROPHE: u32 = 0x34;
    pub const GRAVE: u32 = 0x35;
    pub const COMMA: u32 = 0x36;
    pub const PERIOD: u32 = 0x37;
    pub const SLASH: u32 = 0x38;
    pub const CAPS_LOCK: u32 = 0x39;
    pub const F1: u32 = 0x3A;

    pub const LEFT_CTRL: u32 = 0xE0;
    pub const LEFT_SHIFT: u32 = 0xE1;
    pub const LEFT_ALT: u32 = 0xE2;
    pub const LEFT_GUI: u32 = 0xE3;
    pub const RIGHT_CTRL: u32 = 0xE4;
    pub const RIGHT_SHIFT: u32 = 0xE5;
    pub const RIGHT_ALT: u32 = 0xE6;
    pub const RIGHT_GUI: u32 = 0xE7;
}

/// Shifted symbols of the number row, ordered 1..9 then 0
const SHIFTED_DIGITS: [char; 10] = ['!', '@', '#', '$', '%', '^', '&', '*', '(', ')'];

/// Punctuation keys as (usage, unshifted, shifted)
const PUNCTUATION: [(u32, char, char); 12] = [
    (usage::SPACE, ' ', ' '),
    (usage::MINUS, '-', '_'),
    (usage::EQUAL, '=', '+'),
    (usage::LEFT_BRACKET, '[', '{'),
    (usage::RIGHT_BRACKET, ']', '}'),
    (usage::BACKSLASH, '\\', '|'),
    (usage::SEMICOLON, ';', ':'),
    (usage::APOSTROPHE, '\'', '"'),
    (usage::GRAVE, '`', '~'),
    (usage::COMMA, ',', '<'),
    (usage::PERIOD, '.', '>'),
    (usage::SLASH, '/', '?'),
];

/// Decode a keycode to the character it types
///
/// Pure and stateless. Returns `None` for keys that produce no printable
/// character (modifiers, navigation, function keys, unknown usages).
pub fn decode(keycode: u32, shifted: bool) -> Option<char> {
    match keycode {
        usage::A..=usage::Z => {
            let letter = (b'a' + (keycode - usage::A) as u8) as char;
            Some(if shifted {
                letter.to_ascii_uppercase()
            } else {
                letter
            })
        }
        // "0" sits after "9" on the number row, so it never indexes by offset
        usage::N0 => Some(if shifted { ')' } else { '0' }),
        usage::N1..=usage::N9 => {
            let offset = (keycode - usage::N1) as usize;
            Some(if shifted {
                SHIFTED_DIGITS[offset]
            } else {
                (b'1' + offset as u8) as char
            })
        }
        _ => PUNCTUATION
            .iter()
            .find(|(code, _, _)| *code == keycode)
            .map(|&(_, plain, shift)| if shifted { shift } else { plain }),
    }
}

//! [`VirtualKey`] to Windows Virtual Key (VK) code translation.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).
//!
//! # What is a Windows Virtual Key (VK) code? (for beginners)
//!
//! Windows assigns each keyboard key a number called a "Virtual Key code".
//! These are defined in `<winuser.h>` and named `VK_*` (e.g., `VK_RETURN = 0x0D`,
//! `VK_SPACE = 0x20`).  Letters and digits reuse their ASCII upper-case value,
//! so `VK_A = 0x41` and `VK_0 = 0x30`.
//!
//! The overlay always uses the *side-specific* modifier codes (`VK_LCONTROL`,
//! `VK_RMENU`, ...) rather than the generic `VK_CONTROL`/`VK_MENU`, because a
//! button bound to `RAltKey` must produce AltGr, not plain Alt.

use super::virtual_key::VirtualKey;

/// Translates a [`VirtualKey`] to its Windows VK code.
pub const fn to_vk(key: VirtualKey) -> u8 {
    use VirtualKey::*;
    match key {
        LeftControl => 0xA2,  // VK_LCONTROL
        RightControl => 0xA3, // VK_RCONTROL
        LeftShift => 0xA0,    // VK_LSHIFT
        RightShift => 0xA1,   // VK_RSHIFT
        LeftAlt => 0xA4,      // VK_LMENU
        RightAlt => 0xA5,     // VK_RMENU
        LeftWin => 0x5B,      // VK_LWIN
        RightWin => 0x5C,     // VK_RWIN

        A => 0x41,
        B => 0x42,
        C => 0x43,
        D => 0x44,
        E => 0x45,
        F => 0x46,
        G => 0x47,
        H => 0x48,
        I => 0x49,
        J => 0x4A,
        K => 0x4B,
        L => 0x4C,
        M => 0x4D,
        N => 0x4E,
        O => 0x4F,
        P => 0x50,
        Q => 0x51,
        R => 0x52,
        S => 0x53,
        T => 0x54,
        U => 0x55,
        V => 0x56,
        W => 0x57,
        X => 0x58,
        Y => 0x59,
        Z => 0x5A,

        Digit0 => 0x30,
        Digit1 => 0x31,
        Digit2 => 0x32,
        Digit3 => 0x33,
        Digit4 => 0x34,
        Digit5 => 0x35,
        Digit6 => 0x36,
        Digit7 => 0x37,
        Digit8 => 0x38,
        Digit9 => 0x39,

        F1 => 0x70,
        F2 => 0x71,
        F3 => 0x72,
        F4 => 0x73,
        F5 => 0x74,
        F6 => 0x75,
        F7 => 0x76,
        F8 => 0x77,
        F9 => 0x78,
        F10 => 0x79,
        F11 => 0x7A,
        F12 => 0x7B,

        Enter => 0x0D,     // VK_RETURN
        Space => 0x20,     // VK_SPACE
        Tab => 0x09,       // VK_TAB
        Backspace => 0x08, // VK_BACK
        Delete => 0x2E,    // VK_DELETE
        Insert => 0x2D,    // VK_INSERT
        Home => 0x24,      // VK_HOME
        End => 0x23,       // VK_END
        PageUp => 0x21,    // VK_PRIOR
        PageDown => 0x22,  // VK_NEXT
        Escape => 0x1B,    // VK_ESCAPE

        Left => 0x25,
        Up => 0x26,
        Right => 0x27,
        Down => 0x28,
    }
}

/// Translates a Windows VK code back to a [`VirtualKey`].
///
/// Returns `None` for VK codes outside the overlay's key set, including the
/// generic `VK_CONTROL`/`VK_SHIFT`/`VK_MENU` codes.
pub fn from_vk(vk: u8) -> Option<VirtualKey> {
    // Linear scan is fine for this infrequent direction; the set has 71 keys.
    VirtualKey::ALL.into_iter().find(|&key| to_vk(key) == vk)
}

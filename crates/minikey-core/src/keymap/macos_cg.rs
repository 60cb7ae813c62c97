//! [`VirtualKey`] to macOS `CGKeyCode` translation.
//!
//! Reference: `Events.h` in the Carbon HIToolbox framework (`kVK_*` constants).
//!
//! `CGKeyCode` identifies a physical key position on an ANSI layout, so it
//! doubles as the hardware code for the macOS back-end.  Windows-key tokens map
//! to Command, and `Delete` maps to forward-delete (`kVK_ForwardDelete`); the
//! key labelled "delete" on Mac keyboards is `Backspace` here.

use super::virtual_key::VirtualKey;

/// Translates a [`VirtualKey`] to a macOS `CGKeyCode`.
pub const fn to_cgkeycode(key: VirtualKey) -> u16 {
    use VirtualKey::*;
    match key {
        LeftControl => 0x3B,  // kVK_Control
        RightControl => 0x3E, // kVK_RightControl
        LeftShift => 0x38,    // kVK_Shift
        RightShift => 0x3C,   // kVK_RightShift
        LeftAlt => 0x3A,      // kVK_Option
        RightAlt => 0x3D,     // kVK_RightOption
        LeftWin => 0x37,      // kVK_Command
        RightWin => 0x36,     // kVK_RightCommand

        A => 0x00,
        B => 0x0B,
        C => 0x08,
        D => 0x02,
        E => 0x0E,
        F => 0x03,
        G => 0x05,
        H => 0x04,
        I => 0x22,
        J => 0x26,
        K => 0x28,
        L => 0x25,
        M => 0x2E,
        N => 0x2D,
        O => 0x1F,
        P => 0x23,
        Q => 0x0C,
        R => 0x0F,
        S => 0x01,
        T => 0x11,
        U => 0x20,
        V => 0x09,
        W => 0x0D,
        X => 0x07,
        Y => 0x10,
        Z => 0x06,

        Digit0 => 0x1D,
        Digit1 => 0x12,
        Digit2 => 0x13,
        Digit3 => 0x14,
        Digit4 => 0x15,
        Digit5 => 0x17,
        Digit6 => 0x16,
        Digit7 => 0x1A,
        Digit8 => 0x1C,
        Digit9 => 0x19,

        F1 => 0x7A,
        F2 => 0x78,
        F3 => 0x63,
        F4 => 0x76,
        F5 => 0x60,
        F6 => 0x61,
        F7 => 0x62,
        F8 => 0x64,
        F9 => 0x65,
        F10 => 0x6D,
        F11 => 0x67,
        F12 => 0x6F,

        Enter => 0x24,     // kVK_Return
        Space => 0x31,     // kVK_Space
        Tab => 0x30,       // kVK_Tab
        Backspace => 0x33, // kVK_Delete
        Delete => 0x75,    // kVK_ForwardDelete
        Insert => 0x72,    // kVK_Help
        Home => 0x73,      // kVK_Home
        End => 0x77,       // kVK_End
        PageUp => 0x74,    // kVK_PageUp
        PageDown => 0x79,  // kVK_PageDown
        Escape => 0x35,    // kVK_Escape

        Left => 0x7B,
        Right => 0x7C,
        Down => 0x7D,
        Up => 0x7E,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_a_is_zero() {
        assert_eq!(to_cgkeycode(VirtualKey::A), 0x00);
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(to_cgkeycode(VirtualKey::Left), 0x7B);
        assert_eq!(to_cgkeycode(VirtualKey::Right), 0x7C);
        assert_eq!(to_cgkeycode(VirtualKey::Down), 0x7D);
        assert_eq!(to_cgkeycode(VirtualKey::Up), 0x7E);
    }

    #[test]
    fn test_backspace_and_delete_are_distinct() {
        assert_eq!(to_cgkeycode(VirtualKey::Backspace), 0x33);
        assert_eq!(to_cgkeycode(VirtualKey::Delete), 0x75);
    }

    #[test]
    fn test_cgkeycodes_are_unique() {
        for a in VirtualKey::ALL {
            for b in VirtualKey::ALL {
                if a != b {
                    assert_ne!(to_cgkeycode(a), to_cgkeycode(b), "{a:?} and {b:?} collide");
                }
            }
        }
    }
}

//! [`VirtualKey`] to X11 KeySym translation for Linux back-ends.
//!
//! X11 KeySym values are defined in X11/keysymdef.h.
//! Reference: https://gitlab.freedesktop.org/xorg/proto/xorgproto/-/blob/master/include/X11/keysymdef.h
//!
//! # Why lowercase letter KeySyms?
//!
//! `XKeysymToKeycode` resolves a KeySym to the physical keycode that produces
//! it.  Both `XK_a` and `XK_A` live on the same keycode, but only the
//! lowercase form is guaranteed to be found in the first column of every
//! keymap, so letters always map to `0x61..=0x7A`.  Shift is applied by the
//! combination itself (`LShiftKey+A`), never by picking the upper-case KeySym.

use super::virtual_key::VirtualKey;

/// Translates a [`VirtualKey`] to an X11 KeySym value.
pub const fn to_keysym(key: VirtualKey) -> u32 {
    use VirtualKey::*;
    match key {
        LeftControl => 0xFFE3,  // XK_Control_L
        RightControl => 0xFFE4, // XK_Control_R
        LeftShift => 0xFFE1,    // XK_Shift_L
        RightShift => 0xFFE2,   // XK_Shift_R
        LeftAlt => 0xFFE9,      // XK_Alt_L
        RightAlt => 0xFFEA,     // XK_Alt_R
        LeftWin => 0xFFEB,      // XK_Super_L
        RightWin => 0xFFEC,     // XK_Super_R

        A => 0x0061,
        B => 0x0062,
        C => 0x0063,
        D => 0x0064,
        E => 0x0065,
        F => 0x0066,
        G => 0x0067,
        H => 0x0068,
        I => 0x0069,
        J => 0x006A,
        K => 0x006B,
        L => 0x006C,
        M => 0x006D,
        N => 0x006E,
        O => 0x006F,
        P => 0x0070,
        Q => 0x0071,
        R => 0x0072,
        S => 0x0073,
        T => 0x0074,
        U => 0x0075,
        V => 0x0076,
        W => 0x0077,
        X => 0x0078,
        Y => 0x0079,
        Z => 0x007A,

        Digit0 => 0x0030,
        Digit1 => 0x0031,
        Digit2 => 0x0032,
        Digit3 => 0x0033,
        Digit4 => 0x0034,
        Digit5 => 0x0035,
        Digit6 => 0x0036,
        Digit7 => 0x0037,
        Digit8 => 0x0038,
        Digit9 => 0x0039,

        F1 => 0xFFBE,
        F2 => 0xFFBF,
        F3 => 0xFFC0,
        F4 => 0xFFC1,
        F5 => 0xFFC2,
        F6 => 0xFFC3,
        F7 => 0xFFC4,
        F8 => 0xFFC5,
        F9 => 0xFFC6,
        F10 => 0xFFC7,
        F11 => 0xFFC8,
        F12 => 0xFFC9,

        Enter => 0xFF0D,     // XK_Return
        Space => 0x0020,     // XK_space
        Tab => 0xFF09,       // XK_Tab
        Backspace => 0xFF08, // XK_BackSpace
        Delete => 0xFFFF,    // XK_Delete
        Insert => 0xFF63,    // XK_Insert
        Home => 0xFF50,      // XK_Home
        End => 0xFF57,       // XK_End
        PageUp => 0xFF55,    // XK_Prior
        PageDown => 0xFF56,  // XK_Next
        Escape => 0xFF1B,    // XK_Escape

        Left => 0xFF51,
        Up => 0xFF52,
        Right => 0xFF53,
        Down => 0xFF54,
    }
}

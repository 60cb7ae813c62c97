//! The closed set of keys the overlay can synthesize.
//!
//! [`VirtualKey`] is deliberately platform-neutral: it names *which* key is
//! meant, not the number any particular OS uses for it.  Each platform table
//! (`windows_vk`, `linux_x11`, `macos_cg`) maps a `VirtualKey` to its native
//! code, and the token registry maps the human-readable names used in button
//! definitions onto `VirtualKey`.  Keeping the three concerns apart means a new
//! back-end only needs one new table.
//!
//! # What is an "extended" key? (for beginners)
//!
//! The original IBM PC/AT keyboard had one Alt, one Ctrl and a combined
//! numpad/navigation block.  When the enhanced 101-key layout added a second
//! Alt/Ctrl and a dedicated navigation cluster, those keys reused the existing
//! scan codes behind an `0xE0` prefix byte.  Windows still exposes that prefix
//! as the `KEYEVENTF_EXTENDEDKEY` flag: without it, a synthesized Right Ctrl is
//! seen as Left Ctrl and the arrow keys behave like the numpad arrows when
//! NumLock is on.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::registry;

/// A key supported by the overlay keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VirtualKey {
    // Modifiers
    LeftControl,
    RightControl,
    LeftShift,
    RightShift,
    LeftAlt,
    RightAlt,
    LeftWin,
    RightWin,

    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Digit row
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Special and navigation keys
    Enter,
    Space,
    Tab,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Escape,

    // Arrows
    Up,
    Down,
    Left,
    Right,
}

impl VirtualKey {
    /// Every supported key, in declaration order.
    pub const ALL: [VirtualKey; 71] = {
        use VirtualKey::*;
        [
            LeftControl, RightControl, LeftShift, RightShift, LeftAlt, RightAlt, LeftWin,
            RightWin, A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X,
            Y, Z, Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8,
            Digit9, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, Enter, Space, Tab,
            Backspace, Delete, Insert, Home, End, PageUp, PageDown, Escape, Up, Down, Left,
            Right,
        ]
    };

    /// Returns `true` if synthesizing this key requires the platform's
    /// extended-key flag.
    ///
    /// The set is exactly: Right Alt, Right Control, Insert, Delete, Home, End,
    /// Page Up, Page Down and the four arrow keys.  Left-side modifiers and the
    /// Windows keys are *not* flagged.
    pub const fn is_extended(self) -> bool {
        use VirtualKey::*;
        matches!(
            self,
            RightAlt
                | RightControl
                | Insert
                | Delete
                | Home
                | End
                | PageUp
                | PageDown
                | Up
                | Down
                | Left
                | Right
        )
    }

    /// Returns `true` for the eight side-specific modifier keys.
    pub const fn is_modifier(self) -> bool {
        use VirtualKey::*;
        matches!(
            self,
            LeftControl
                | RightControl
                | LeftShift
                | RightShift
                | LeftAlt
                | RightAlt
                | LeftWin
                | RightWin
        )
    }

    /// The canonical registry token for this key (e.g. `"LControlKey"`).
    pub fn token(self) -> &'static str {
        registry::token_for(self)
    }
}

/// Free-function form of [`VirtualKey::is_extended`].
pub const fn is_extended_key(key: VirtualKey) -> bool {
    key.is_extended()
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.token())
    }
}

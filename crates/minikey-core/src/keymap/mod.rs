//! Key vocabulary and platform key code tables.
//!
//! The canonical representation is [`VirtualKey`].  Tokens from button
//! definitions are resolved to it by [`registry`], and platform back-ends
//! translate it to their native codes at the injection boundary.

pub mod linux_x11;
pub mod macos_cg;
pub mod registry;
pub mod virtual_key;
pub mod windows_vk;

pub use virtual_key::{is_extended_key, VirtualKey};

/// Unified key mapper providing all translation directions.
pub struct KeyMapper;

impl KeyMapper {
    /// Resolves a registry token (e.g. `"LControlKey"`) to a [`VirtualKey`].
    pub fn resolve_token(token: &str) -> Option<VirtualKey> {
        registry::resolve(token)
    }

    /// Translates a [`VirtualKey`] to a Windows Virtual Key code.
    pub fn to_windows_vk(key: VirtualKey) -> u8 {
        windows_vk::to_vk(key)
    }

    /// Translates a Windows Virtual Key code to a [`VirtualKey`].
    ///
    /// Returns `None` if `vk` is not one of the overlay's keys.
    pub fn from_windows_vk(vk: u8) -> Option<VirtualKey> {
        windows_vk::from_vk(vk)
    }

    /// Translates a [`VirtualKey`] to an X11 KeySym value for Linux back-ends.
    pub fn to_x11_keysym(key: VirtualKey) -> u32 {
        linux_x11::to_keysym(key)
    }

    /// Translates a [`VirtualKey`] to a macOS `CGKeyCode` value.
    pub fn to_macos_cgkeycode(key: VirtualKey) -> u16 {
        macos_cg::to_cgkeycode(key)
    }
}

//! Linux X11 key injection via the XTest extension.
//!
//! # What is XTest? (for beginners)
//!
//! XTest is an X11 protocol extension that lets a process synthesize keyboard
//! events as if the user had pressed the physical keys.  The events reach the
//! focused window exactly like real input.
//!
//! # Key code translation
//!
//! X11 works with *KeySyms* (symbolic names like `XK_Control_L`), but
//! `XTestFakeKeyEvent` wants the server's *keycode* for the physical key:
//!
//! ```text
//! VirtualKey → X11 KeySym → XKeysymToKeycode(display, keysym) → keycode
//! ```
//!
//! The keycode plays the role of the scan code in [`KeyEvent`].  X11 keycodes
//! already distinguish left/right and keypad/navigation keys, so the
//! `extended` flag is ignored here.
//!
//! # Permissions
//!
//! The process needs access to the X display named by `DISPLAY`.  If it is not
//! set or the server is unreachable, [`XTestKeyInjector::new`] fails with
//! `InjectionError::Unavailable`.

#![cfg(target_os = "linux")]

use std::os::raw::c_char;
use std::ptr;

use minikey_core::{KeyMapper, VirtualKey};
use tracing::debug;
use x11::{xlib, xtest};

use crate::application::dispatch_combination::{
    InjectionError, KeyDirection, KeyEvent, KeyInjector,
};

/// `CurrentTime`: deliver the event without delay.
const CURRENT_TIME: std::os::raw::c_ulong = 0;

/// Linux X11/XTest key injector.
///
/// Holds the display connection for its whole lifetime and closes it on drop.
pub struct XTestKeyInjector {
    display: *mut xlib::Display,
}

impl XTestKeyInjector {
    /// Connects to the X display named by `DISPLAY`.
    ///
    /// # Errors
    ///
    /// Returns `InjectionError::Unavailable` if the display cannot be opened.
    pub fn new() -> Result<Self, InjectionError> {
        // SAFETY: a null name means "use $DISPLAY".
        let display = unsafe { xlib::XOpenDisplay(ptr::null()) };
        if display.is_null() {
            return Err(InjectionError::Unavailable(
                "cannot open X display (is DISPLAY set?)".to_string(),
            ));
        }
        debug!("connected to X display");
        Ok(Self { display })
    }

    fn keycode_for(&self, key: VirtualKey) -> Result<u8, InjectionError> {
        let keysym = KeyMapper::to_x11_keysym(key);
        // SAFETY: display is a live connection owned by self.
        let keycode = unsafe { xlib::XKeysymToKeycode(self.display, xlib::KeySym::from(keysym)) };
        if keycode == 0 {
            return Err(InjectionError::UnmappedKey(key));
        }
        Ok(keycode)
    }
}

impl Drop for XTestKeyInjector {
    fn drop(&mut self) {
        // SAFETY: display was returned by XOpenDisplay and is closed exactly once.
        unsafe {
            xlib::XCloseDisplay(self.display);
        }
    }
}

impl KeyInjector for XTestKeyInjector {
    fn translate_to_scan_code(&self, key: VirtualKey) -> Result<u16, InjectionError> {
        self.keycode_for(key).map(u16::from)
    }

    fn inject_key_event(&self, event: &KeyEvent) -> Result<(), InjectionError> {
        let keycode = match u8::try_from(event.scan_code) {
            Ok(code) if code != 0 => code,
            _ => self.keycode_for(event.key)?,
        };
        let is_press = xlib::Bool::from(event.direction == KeyDirection::Down);

        // SAFETY: display is a live connection owned by self.
        let status = unsafe {
            let status =
                xtest::XTestFakeKeyEvent(self.display, u32::from(keycode), is_press, CURRENT_TIME);
            xlib::XFlush(self.display);
            status
        };
        if status == 0 {
            return Err(InjectionError::Platform(format!(
                "XTestFakeKeyEvent rejected keycode {keycode}"
            )));
        }
        Ok(())
    }

    fn query_key_state(&self, key: VirtualKey) -> Result<bool, InjectionError> {
        let keycode = self.keycode_for(key)?;
        let mut keymap: [c_char; 32] = [0; 32];
        // SAFETY: XQueryKeymap writes exactly 32 bytes.
        unsafe {
            xlib::XQueryKeymap(self.display, keymap.as_mut_ptr());
        }
        Ok(keymap_bit(&keymap, keycode))
    }
}

/// Tests the bit for `keycode` in an `XQueryKeymap` result.
fn keymap_bit(keymap: &[c_char; 32], keycode: u8) -> bool {
    let byte = keymap[usize::from(keycode / 8)] as u8;
    byte & (1 << (keycode % 8)) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_bit_reads_correct_byte_and_bit() {
        let mut keymap: [c_char; 32] = [0; 32];
        // keycode 37 (Control_L on most layouts) → byte 4, bit 5
        keymap[4] = 0b0010_0000;
        assert!(keymap_bit(&keymap, 37));
        assert!(!keymap_bit(&keymap, 36));
        assert!(!keymap_bit(&keymap, 38));
    }

    #[test]
    fn test_keymap_bit_high_keycode() {
        let mut keymap: [c_char; 32] = [0; 32];
        keymap[31] = 0x80u8 as c_char;
        assert!(keymap_bit(&keymap, 255));
    }
}

//! macOS key injection via CoreGraphics events.
//!
//! # What is CoreGraphics event injection? (for beginners)
//!
//! `CGEventPost` injects a synthesized event into the hardware input stream at
//! the HID level, the same level as a physical keyboard.  A key press is:
//!
//! 1. Create an event source that mimics hardware state
//!    (`kCGEventSourceStateHIDSystemState`).
//! 2. Create a keyboard event for a `CGKeyCode` with a down/up flag.
//! 3. Post it at `kCGHIDEventTap`.
//!
//! # Key codes
//!
//! macOS has no separate scan code: the `CGKeyCode` *is* the physical key
//! position, and left/right modifiers have distinct codes.  So
//! `translate_to_scan_code` returns the `CGKeyCode`, and the `extended` flag
//! is ignored.
//!
//! # Accessibility permission
//!
//! Posting at `kCGHIDEventTap` requires the Accessibility permission (System
//! Settings → Privacy & Security → Accessibility).  Without it the post is
//! silently dropped by the OS.

#![cfg(target_os = "macos")]

use core_graphics::event::{CGEvent, CGEventTapLocation, CGKeyCode};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use minikey_core::{KeyMapper, VirtualKey};

use crate::application::dispatch_combination::{
    InjectionError, KeyDirection, KeyEvent, KeyInjector,
};

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn CGEventSourceKeyState(state_id: CGEventSourceStateID, key: CGKeyCode) -> bool;
}

/// macOS implementation of [`KeyInjector`] using CoreGraphics.
pub struct CoreGraphicsKeyInjector;

impl CoreGraphicsKeyInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoreGraphicsKeyInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyInjector for CoreGraphicsKeyInjector {
    fn translate_to_scan_code(&self, key: VirtualKey) -> Result<u16, InjectionError> {
        Ok(KeyMapper::to_macos_cgkeycode(key))
    }

    fn inject_key_event(&self, event: &KeyEvent) -> Result<(), InjectionError> {
        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState).map_err(|_| {
            InjectionError::Unavailable("cannot create CGEventSource".to_string())
        })?;
        let keycode: CGKeyCode = KeyMapper::to_macos_cgkeycode(event.key);
        let cg_event = CGEvent::new_keyboard_event(
            source,
            keycode,
            event.direction == KeyDirection::Down,
        )
        .map_err(|_| {
            InjectionError::Platform(format!("cannot create keyboard event for {:?}", event.key))
        })?;
        cg_event.post(CGEventTapLocation::HID);
        Ok(())
    }

    fn query_key_state(&self, key: VirtualKey) -> Result<bool, InjectionError> {
        let keycode = KeyMapper::to_macos_cgkeycode(key);
        // SAFETY: CGEventSourceKeyState takes plain values and has no side effects.
        Ok(unsafe { CGEventSourceKeyState(CGEventSourceStateID::HIDSystemState, keycode) })
    }
}

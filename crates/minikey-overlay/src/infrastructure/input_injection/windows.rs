//! Windows key injection via the SendInput API.
//!
//! Each event carries both the virtual-key code and the hardware scan code
//! (from `MapVirtualKeyW(vk, MAPVK_VK_TO_VSC)`), plus `KEYEVENTF_EXTENDEDKEY`
//! for keys on the extended block.  Without that flag a synthetic Right Ctrl
//! is delivered as Left Ctrl, and the navigation keys arrive as their numpad
//! twins.

#![cfg(target_os = "windows")]

use minikey_core::{KeyMapper, VirtualKey};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetAsyncKeyState, MapVirtualKeyW, SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT,
    KEYBD_EVENT_FLAGS, KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, MAPVK_VK_TO_VSC, VIRTUAL_KEY,
};

use crate::application::dispatch_combination::{
    InjectionError, KeyDirection, KeyEvent, KeyInjector,
};

/// High bit of `GetAsyncKeyState`: the key is down right now.
const KEY_DOWN_BIT: i16 = i16::MIN;

/// Windows implementation of [`KeyInjector`] using SendInput.
pub struct WindowsKeyInjector;

impl WindowsKeyInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsKeyInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyInjector for WindowsKeyInjector {
    fn translate_to_scan_code(&self, key: VirtualKey) -> Result<u16, InjectionError> {
        let vk = KeyMapper::to_windows_vk(key);
        // SAFETY: MapVirtualKeyW has no pointer arguments.
        let scan = unsafe { MapVirtualKeyW(u32::from(vk), MAPVK_VK_TO_VSC) };
        if scan == 0 {
            return Err(InjectionError::UnmappedKey(key));
        }
        Ok(scan as u16)
    }

    fn inject_key_event(&self, event: &KeyEvent) -> Result<(), InjectionError> {
        let input = INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: VIRTUAL_KEY(u16::from(KeyMapper::to_windows_vk(event.key))),
                    wScan: event.scan_code,
                    dwFlags: event_flags(event),
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        };
        // SAFETY: input is a valid KEYBDINPUT structure on the stack
        let sent = unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) };
        if sent == 0 {
            return Err(InjectionError::Platform(format!(
                "SendInput rejected {:?} {}: {}",
                event.key,
                event.direction,
                windows::core::Error::from_win32()
            )));
        }
        Ok(())
    }

    fn query_key_state(&self, key: VirtualKey) -> Result<bool, InjectionError> {
        let vk = KeyMapper::to_windows_vk(key);
        // SAFETY: GetAsyncKeyState is always safe to call
        let state = unsafe { GetAsyncKeyState(i32::from(vk)) };
        Ok(state & KEY_DOWN_BIT != 0)
    }
}

fn event_flags(event: &KeyEvent) -> KEYBD_EVENT_FLAGS {
    let mut flags = KEYBD_EVENT_FLAGS(0);
    if event.direction == KeyDirection::Up {
        flags |= KEYEVENTF_KEYUP;
    }
    if event.extended {
        flags |= KEYEVENTF_EXTENDEDKEY;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(key: VirtualKey, direction: KeyDirection) -> KeyEvent {
        KeyEvent {
            key,
            scan_code: 0,
            direction,
            extended: key.is_extended(),
        }
    }

    #[test]
    fn test_plain_key_down_has_no_flags() {
        assert_eq!(event_flags(&event(VirtualKey::A, KeyDirection::Down)).0, 0);
    }

    #[test]
    fn test_key_up_sets_keyup_flag() {
        let flags = event_flags(&event(VirtualKey::A, KeyDirection::Up));
        assert_eq!(flags, KEYEVENTF_KEYUP);
    }

    #[test]
    fn test_extended_key_sets_extended_flag() {
        let flags = event_flags(&event(VirtualKey::RightAlt, KeyDirection::Up));
        assert_eq!(flags, KEYEVENTF_KEYUP | KEYEVENTF_EXTENDEDKEY);
    }
}

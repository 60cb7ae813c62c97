//! Recording key injector.
//!
//! # Why a recording injector?
//!
//! The real injectors (`WindowsKeyInjector`, `XTestKeyInjector`,
//! `CoreGraphicsKeyInjector`) make OS API calls that:
//!
//! - Require a desktop session to run.
//! - Actually press keys on the machine running the tests.
//!
//! `RecordingInjector` replaces those calls with in-memory bookkeeping.  Each
//! injected event is appended to a `Mutex<Vec<KeyEvent>>`, so assertions can
//! inspect exactly what was sent and in what order.  It also keeps a simulated
//! "pressed" set that `query_key_state` reads, so press state behaves the way
//! the OS would report it after the recorded events.
//!
//! The binary uses the same type for `--dry-run`.
//!
//! # Usage in tests
//!
//! ```ignore
//! let dispatcher = CombinationDispatcher::new(RecordingInjector::new());
//! dispatcher.send_down("LControlKey+C");
//!
//! let seq = dispatcher.injector().sequence();
//! assert_eq!(seq[0], (VirtualKey::LeftControl, KeyDirection::Down));
//! ```
//!
//! # Failure injection
//!
//! [`RecordingInjector::fail_on`] makes every event for one key/direction
//! return `InjectionError::Platform`, and `should_fail` fails everything.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use minikey_core::{KeyMapper, VirtualKey};

use crate::application::dispatch_combination::{
    InjectionError, KeyDirection, KeyEvent, KeyInjector,
};

/// An injector that records every event without touching the OS.
#[derive(Debug, Default)]
pub struct RecordingInjector {
    events: Mutex<Vec<KeyEvent>>,
    pressed: Mutex<HashSet<VirtualKey>>,
    failing: Mutex<HashSet<(VirtualKey, KeyDirection)>>,
    untranslatable: Mutex<HashSet<VirtualKey>>,
    /// When `true`, every method returns `InjectionError::Platform`.
    pub should_fail: bool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RecordingInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// An injector whose every call fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Every accepted event, in injection order.
    pub fn events(&self) -> Vec<KeyEvent> {
        lock(&self.events).clone()
    }

    /// Accepted events reduced to `(key, direction)` pairs.
    pub fn sequence(&self) -> Vec<(VirtualKey, KeyDirection)> {
        lock(&self.events)
            .iter()
            .map(|e| (e.key, e.direction))
            .collect()
    }

    /// Forgets recorded events.  The simulated pressed set is kept.
    pub fn clear(&self) {
        lock(&self.events).clear();
    }

    /// Makes every `direction` event for `key` fail.
    pub fn fail_on(&self, key: VirtualKey, direction: KeyDirection) {
        lock(&self.failing).insert((key, direction));
    }

    /// Makes scan-code translation fail for `key`.
    pub fn fail_translation(&self, key: VirtualKey) {
        lock(&self.untranslatable).insert(key);
    }

    /// Overrides the simulated physical state of `key`.
    pub fn set_pressed(&self, key: VirtualKey, pressed: bool) {
        let mut set = lock(&self.pressed);
        if pressed {
            set.insert(key);
        } else {
            set.remove(&key);
        }
    }

    /// Keys currently down in the simulated keyboard.
    pub fn pressed_keys(&self) -> Vec<VirtualKey> {
        let mut keys: Vec<_> = lock(&self.pressed).iter().copied().collect();
        keys.sort();
        keys
    }
}

impl KeyInjector for RecordingInjector {
    /// Uses the Windows virtual-key code as a stand-in scan code.
    fn translate_to_scan_code(&self, key: VirtualKey) -> Result<u16, InjectionError> {
        if self.should_fail || lock(&self.untranslatable).contains(&key) {
            return Err(InjectionError::UnmappedKey(key));
        }
        Ok(u16::from(KeyMapper::to_windows_vk(key)))
    }

    fn inject_key_event(&self, event: &KeyEvent) -> Result<(), InjectionError> {
        if self.should_fail || lock(&self.failing).contains(&(event.key, event.direction)) {
            return Err(InjectionError::Platform("mock failure".into()));
        }
        lock(&self.events).push(*event);
        self.set_pressed(event.key, event.direction == KeyDirection::Down);
        Ok(())
    }

    fn query_key_state(&self, key: VirtualKey) -> Result<bool, InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Platform("mock failure".into()));
        }
        Ok(lock(&self.pressed).contains(&key))
    }
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
    fn test_records_events_in_order() {
        let injector = RecordingInjector::new();
        injector.inject_key_event(&event(VirtualKey::A, KeyDirection::Down)).unwrap();
        injector.inject_key_event(&event(VirtualKey::A, KeyDirection::Up)).unwrap();
        assert_eq!(
            injector.sequence(),
            vec![
                (VirtualKey::A, KeyDirection::Down),
                (VirtualKey::A, KeyDirection::Up)
            ]
        );
    }

    #[test]
    fn test_pressed_set_follows_events() {
        // Arrange
        let injector = RecordingInjector::new();

        // Act / Assert
        injector.inject_key_event(&event(VirtualKey::LeftShift, KeyDirection::Down)).unwrap();
        assert_eq!(injector.query_key_state(VirtualKey::LeftShift), Ok(true));
        injector.inject_key_event(&event(VirtualKey::LeftShift, KeyDirection::Up)).unwrap();
        assert_eq!(injector.query_key_state(VirtualKey::LeftShift), Ok(false));
    }

    #[test]
    fn test_fail_on_only_affects_given_direction() {
        let injector = RecordingInjector::new();
        injector.fail_on(VirtualKey::C, KeyDirection::Up);
        assert!(injector.inject_key_event(&event(VirtualKey::C, KeyDirection::Down)).is_ok());
        assert!(injector.inject_key_event(&event(VirtualKey::C, KeyDirection::Up)).is_err());
        // The failed release never happened, so C still reads as pressed.
        assert_eq!(injector.pressed_keys(), vec![VirtualKey::C]);
    }

    #[test]
    fn test_translation_uses_windows_vk() {
        let injector = RecordingInjector::new();
        assert_eq!(injector.translate_to_scan_code(VirtualKey::Enter), Ok(0x0D));
        injector.fail_translation(VirtualKey::Enter);
        assert_eq!(
            injector.translate_to_scan_code(VirtualKey::Enter),
            Err(InjectionError::UnmappedKey(VirtualKey::Enter))
        );
    }

    #[test]
    fn test_should_fail_fails_everything() {
        let injector = RecordingInjector::failing();
        assert!(injector.translate_to_scan_code(VirtualKey::A).is_err());
        assert!(injector.inject_key_event(&event(VirtualKey::A, KeyDirection::Down)).is_err());
        assert!(injector.query_key_state(VirtualKey::A).is_err());
        assert!(injector.events().is_empty());
    }

    #[test]
    fn test_clear_keeps_pressed_state() {
        let injector = RecordingInjector::new();
        injector.inject_key_event(&event(VirtualKey::Home, KeyDirection::Down)).unwrap();
        injector.clear();
        assert!(injector.events().is_empty());
        assert_eq!(injector.query_key_state(VirtualKey::Home), Ok(true));
    }
}

//! DispatchCombination use case: turns a combination string into synthetic
//! key presses and releases.
//!
//! This use case sits at the application layer and delegates to a
//! [`KeyInjector`] for OS-level event injection.  The platform-specific
//! implementations are in the infrastructure layer.
//!
//! # Press/release protocol
//!
//! ```text
//! send_down("LControlKey+C")
//!   down(LControlKey) down(C) up(C) up(LControlKey)
//!
//! send_down_only("LControlKey+C")   → down(LControlKey) down(C)
//! ... keys stay held from the OS's point of view ...
//! send_up_only("LControlKey+C")     → up(C) up(LControlKey)
//! ```
//!
//! `send_down` is a momentary click of the whole chord.  `send_down_only` and
//! `send_up_only` split the click in two, and the caller is responsible for
//! pairing them.  An unpaired `send_down_only` leaves keys stuck down in the
//! OS, so the dispatcher keeps a [`HeldKeys`] record of what it left pressed:
//! an unmatched `send_up_only` is reported (and optionally refused), and
//! [`CombinationDispatcher::release_all`] releases whatever is still held.
//!
//! # Best-effort injection
//!
//! Each key event is independent.  A failed scan-code translation falls back
//! to scan code 0, and a failed injection is logged and recorded in the
//! returned [`DispatchOutcome`]; the rest of the sequence still runs.

use minikey_core::{KeyCombination, VirtualKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for platform key injection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectionError {
    #[error("platform error: {0}")]
    Platform(String),
    #[error("input injection unavailable: {0}")]
    Unavailable(String),
    #[error("no platform code for key {0:?}")]
    UnmappedKey(VirtualKey),
}

/// Direction of a synthetic key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyDirection {
    Down,
    Up,
}

impl std::fmt::Display for KeyDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyDirection::Down => f.pad("down"),
            KeyDirection::Up => f.pad("up"),
        }
    }
}

/// One synthetic keyboard event, fully resolved for the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: VirtualKey,
    /// Hardware scan code from [`KeyInjector::translate_to_scan_code`], or 0
    /// when translation failed.
    pub scan_code: u16,
    pub direction: KeyDirection,
    /// Whether the platform's extended-key flag must be set.
    pub extended: bool,
}

/// Platform boundary for synthetic keyboard input.
///
/// Each supported OS provides an implementation in the infrastructure layer.
#[cfg_attr(test, mockall::automock)]
pub trait KeyInjector {
    /// Maps a key to its hardware scan code.
    fn translate_to_scan_code(&self, key: VirtualKey) -> Result<u16, InjectionError>;

    /// Injects one key event into the OS input stream.
    fn inject_key_event(&self, event: &KeyEvent) -> Result<(), InjectionError>;

    /// Returns whether `key` is currently physically pressed.
    fn query_key_state(&self, key: VirtualKey) -> Result<bool, InjectionError>;
}

impl<T: KeyInjector + ?Sized> KeyInjector for Box<T> {
    fn translate_to_scan_code(&self, key: VirtualKey) -> Result<u16, InjectionError> {
        (**self).translate_to_scan_code(key)
    }

    fn inject_key_event(&self, event: &KeyEvent) -> Result<(), InjectionError> {
        (**self).inject_key_event(event)
    }

    fn query_key_state(&self, key: VirtualKey) -> Result<bool, InjectionError> {
        (**self).query_key_state(key)
    }
}

impl<T: KeyInjector + ?Sized> KeyInjector for &T {
    fn translate_to_scan_code(&self, key: VirtualKey) -> Result<u16, InjectionError> {
        (**self).translate_to_scan_code(key)
    }

    fn inject_key_event(&self, event: &KeyEvent) -> Result<(), InjectionError> {
        (**self).inject_key_event(event)
    }

    fn query_key_state(&self, key: VirtualKey) -> Result<bool, InjectionError> {
        (**self).query_key_state(key)
    }
}

/// What to do when `send_up_only` releases keys that `send_down_only` never
/// pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedReleasePolicy {
    /// Log a warning and release anyway.
    #[default]
    Warn,
    /// Log a warning and inject nothing.
    Reject,
}

/// Tunables for [`CombinationDispatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSettings {
    /// Log a warning for every token that did not resolve.
    pub report_unresolved_tokens: bool,
    pub unmatched_release: UnmatchedReleasePolicy,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            report_unresolved_tokens: true,
            unmatched_release: UnmatchedReleasePolicy::Warn,
        }
    }
}

/// A single key event the platform refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionFailure {
    pub key: VirtualKey,
    pub direction: KeyDirection,
    pub error: InjectionError,
}

/// Result of one dispatch call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Events the platform accepted.
    pub injected: usize,
    /// Events the platform refused; the sequence continued past each one.
    pub failures: Vec<InjectionFailure>,
    /// `true` when an unmatched `send_up_only` was refused by
    /// [`UnmatchedReleasePolicy::Reject`].
    pub rejected: bool,
}

impl DispatchOutcome {
    /// `true` when every attempted event was injected and nothing was refused.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && !self.rejected
    }

    /// Number of events attempted, successful or not.
    pub fn attempted(&self) -> usize {
        self.injected + self.failures.len()
    }
}

/// Keys left pressed by `send_down_only`, in press order.
///
/// A key pressed twice is held twice and needs two releases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    keys: Vec<VirtualKey>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `keys` as held, in press order.
    pub fn hold(&mut self, keys: &[VirtualKey]) {
        self.keys.extend_from_slice(keys);
    }

    /// Returns `true` if every key in `keys` (with multiplicity) is held.
    pub fn contains_all(&self, keys: &[VirtualKey]) -> bool {
        let mut remaining = self.keys.clone();
        keys.iter().all(|key| match remaining.iter().rposition(|k| k == key) {
            Some(pos) => {
                remaining.remove(pos);
                true
            }
            None => false,
        })
    }

    /// Forgets one held occurrence of each key in `keys`.  Keys that are not
    /// held are ignored.
    pub fn release(&mut self, keys: &[VirtualKey]) {
        for key in keys {
            if let Some(pos) = self.keys.iter().rposition(|k| k == key) {
                self.keys.remove(pos);
            }
        }
    }

    /// Removes and returns every held key, in press order.
    pub fn take_all(&mut self) -> Vec<VirtualKey> {
        std::mem::take(&mut self.keys)
    }

    pub fn as_slice(&self) -> &[VirtualKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// The DispatchCombination use case.
///
/// Parses combination strings and drives press/release synthesis through a
/// [`KeyInjector`].  All calls are synchronous and run on the caller's thread.
pub struct CombinationDispatcher<I> {
    injector: I,
    settings: DispatchSettings,
    held: HeldKeys,
}

impl<I: KeyInjector> CombinationDispatcher<I> {
    /// Creates a dispatcher with default settings.
    pub fn new(injector: I) -> Self {
        Self::with_settings(injector, DispatchSettings::default())
    }

    pub fn with_settings(injector: I, settings: DispatchSettings) -> Self {
        Self {
            injector,
            settings,
            held: HeldKeys::new(),
        }
    }

    pub fn injector(&self) -> &I {
        &self.injector
    }

    pub fn settings(&self) -> &DispatchSettings {
        &self.settings
    }

    /// Keys currently left down by `send_down_only`, in press order.
    pub fn held_keys(&self) -> &[VirtualKey] {
        self.held.as_slice()
    }

    /// Parses `raw`, reporting unresolved tokens if enabled.
    pub fn parse(&self, raw: &str) -> KeyCombination {
        let combination = KeyCombination::parse(raw);
        if self.settings.report_unresolved_tokens {
            for token in combination.unresolved() {
                warn!(token = %token, combination = raw, "unknown key token ignored");
            }
        }
        combination
    }

    /// Presses every key of `raw` in order, then releases them in reverse.
    ///
    /// Does not affect the held-key record.
    pub fn send_down(&self, raw: &str) -> DispatchOutcome {
        let combination = self.parse(raw);
        let mut outcome = DispatchOutcome::default();

        for key in combination.press_order() {
            self.emit(key, KeyDirection::Down, &mut outcome);
        }
        for key in combination.release_order() {
            self.emit(key, KeyDirection::Up, &mut outcome);
        }

        outcome
    }

    /// Presses every key of `raw` in order and leaves them held.
    pub fn send_down_only(&mut self, raw: &str) -> DispatchOutcome {
        let combination = self.parse(raw);
        let mut outcome = DispatchOutcome::default();

        for key in combination.press_order() {
            self.emit(key, KeyDirection::Down, &mut outcome);
        }
        self.held.hold(combination.keys());

        outcome
    }

    /// Releases every key of `raw` in reverse order.
    ///
    /// If the keys were not left down by an earlier `send_down_only`, the
    /// configured [`UnmatchedReleasePolicy`] decides whether to release anyway.
    pub fn send_up_only(&mut self, raw: &str) -> DispatchOutcome {
        let combination = self.parse(raw);
        let mut outcome = DispatchOutcome::default();
        if combination.is_empty() {
            return outcome;
        }

        if !self.held.contains_all(combination.keys()) {
            match self.settings.unmatched_release {
                UnmatchedReleasePolicy::Warn => {
                    warn!(combination = %combination, "releasing keys that are not held");
                }
                UnmatchedReleasePolicy::Reject => {
                    warn!(combination = %combination, "refusing to release keys that are not held");
                    outcome.rejected = true;
                    return outcome;
                }
            }
        }

        self.held.release(combination.keys());
        for key in combination.release_order() {
            self.emit(key, KeyDirection::Up, &mut outcome);
        }

        outcome
    }

    /// Releases every key still held by `send_down_only`, last pressed first.
    pub fn release_all(&mut self) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        let held = self.held.take_all();
        if !held.is_empty() {
            debug!(count = held.len(), "releasing all held keys");
        }
        for key in held.into_iter().rev() {
            self.emit(key, KeyDirection::Up, &mut outcome);
        }
        outcome
    }

    /// Returns whether `key` is physically pressed right now.
    ///
    /// A failed platform query is logged and reported as "not pressed".
    pub fn is_pressed(&self, key: VirtualKey) -> bool {
        match self.injector.query_key_state(key) {
            Ok(pressed) => pressed,
            Err(e) => {
                warn!(key = %key, "key state query failed: {e}");
                false
            }
        }
    }

    fn emit(&self, key: VirtualKey, direction: KeyDirection, outcome: &mut DispatchOutcome) {
        let scan_code = match self.injector.translate_to_scan_code(key) {
            Ok(code) => code,
            Err(e) => {
                warn!(key = %key, "scan code translation failed, using 0: {e}");
                0
            }
        };
        let event = KeyEvent {
            key,
            scan_code,
            direction,
            extended: key.is_extended(),
        };

        match self.injector.inject_key_event(&event) {
            Ok(()) => {
                debug!(key = %key, %direction, scan_code, extended = event.extended, "key event injected");
                outcome.injected += 1;
            }
            Err(error) => {
                warn!(key = %key, %direction, "key injection failed: {error}");
                outcome.failures.push(InjectionFailure {
                    key,
                    direction,
                    error,
                });
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

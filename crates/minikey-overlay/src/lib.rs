//! minikey-overlay library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the overlay do? (for beginners)
//!
//! The overlay is a small always-on-top window of buttons.  Clicking a button
//! must deliver its key combination to whichever application had focus, as if
//! the user had typed it on a physical keyboard.
//!
//! 1. The button's combination string is parsed by `minikey_core` into an
//!    ordered list of keys.
//! 2. [`application::dispatch_combination::CombinationDispatcher`] presses
//!    them in order and releases them in reverse.
//! 3. Each key event goes through a `KeyInjector`: `SendInput` on Windows,
//!    XTest on Linux, CoreGraphics on macOS.

/// Application layer: use cases.
pub mod application;

/// Infrastructure layer: OS adapters and configuration.
pub mod infrastructure;

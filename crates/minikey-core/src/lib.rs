//! # minikey-core
//!
//! Shared library for the MiniKeyboard overlay containing the key vocabulary,
//! the combination parser and the per-platform key code tables.
//!
//! It has zero dependencies on OS APIs, UI frameworks, or input devices.
//!
//! # Architecture overview (for beginners)
//!
//! MiniKeyboard is a small always-on-top window of buttons.  Each button is
//! bound to a key or a key chord such as `"LControlKey+C"`; clicking it makes
//! the focused application receive that chord as if it had been typed.
//!
//! This crate (`minikey-core`) is the OS-free half of that pipeline:
//!
//! - **`keymap`** – The closed [`VirtualKey`] set, the token registry that
//!   maps names like `"PageUp"` onto it, the extended-key classifier, and the
//!   tables that translate a key to Windows VK codes, X11 KeySyms and macOS
//!   CGKeyCodes.
//!
//! - **`domain`** – [`KeyCombination`] (parse a combination string into an
//!   ordered key list) and [`ButtonDefinition`].
//!
//! Actually pressing keys happens in the `minikey-overlay` crate, which
//! drives a platform back-end with the ordered list produced here.

pub mod domain;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `minikey_core::KeyCombination` instead of the full module path.
pub use domain::{default_buttons, ButtonDefinition, KeyCombination};
pub use keymap::{is_extended_key, KeyMapper, VirtualKey};

//! Infrastructure layer for the overlay.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `minikey_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`input_injection`** – OS-specific implementations of `KeyInjector`,
//!   selected at compile time with `#[cfg(target_os)]`, plus the
//!   `RecordingInjector` used by tests and `--dry-run`.
//!
//! - **`storage`** – Reads the TOML configuration file.

pub mod input_injection;
pub mod storage;

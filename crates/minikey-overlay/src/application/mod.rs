//! Application layer use cases for the overlay.
//!
//! - **`dispatch_combination`** – Turns a combination string into synthetic
//!   key presses and releases.  The OS call is made by a `KeyInjector`
//!   implementation that is injected at construction time.

pub mod dispatch_combination;

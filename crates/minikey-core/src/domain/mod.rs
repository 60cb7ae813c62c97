//! Domain types for the overlay keyboard.
//!
//! # Sub-modules
//!
//! - **`combination`** – [`KeyCombination`], the ordered key list parsed from
//!   a `+`-separated combination string.  This is what the dispatcher presses
//!   and releases.
//!
//! - **`button`** – [`ButtonDefinition`], the label/combination/icon triple the
//!   UI renders, plus the stock button set.

pub mod button;
pub mod combination;

pub use button::{default_buttons, ButtonDefinition};
pub use combination::KeyCombination;

//! Key-combination parsing.
//!
//! A combination string is a `+`-separated list of registry tokens, e.g.
//! `"LControlKey+C"` or `"LControlKey + LShiftKey + Escape"`.  Parsing splits on
//! `+`, trims each segment and resolves it through the registry.
//!
//! # Ordering
//!
//! The resulting key order is significant.  Keys are pressed in split order and
//! released in exactly the reverse order, which is what makes
//! `"LControlKey+C"` behave like a real Ctrl+C chord:
//!
//! ```text
//! down(Control) down(C) up(C) up(Control)
//! ```
//!
//! # Unknown tokens
//!
//! Segments that do not resolve are dropped rather than rejected, so
//! `"Ctrl+C"` parses to just `[C]`.  The dropped spellings are kept in
//! [`KeyCombination::unresolved`] so callers can report them.  Empty or
//! whitespace-only segments (from `""`, `"A++B"` or a trailing `+`) are
//! ignored entirely and are not reported.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::keymap::{registry, VirtualKey};

/// Separator between tokens in a combination string.
pub const TOKEN_SEPARATOR: char = '+';

/// An ordered sequence of resolved keys parsed from a combination string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyCombination {
    keys: Vec<VirtualKey>,
    unresolved: Vec<String>,
}

impl KeyCombination {
    /// Parses a raw combination string.
    ///
    /// Never fails: unknown tokens are skipped and an empty or fully unknown
    /// input yields an empty combination.
    pub fn parse(raw: &str) -> Self {
        let mut combination = Self::default();

        for segment in raw.split(TOKEN_SEPARATOR) {
            let token = segment.trim();
            if token.is_empty() {
                continue;
            }
            match registry::resolve(token) {
                Some(key) => combination.keys.push(key),
                None => {
                    trace!(token = %token, "dropping unresolved key token");
                    combination.unresolved.push(token.to_string());
                }
            }
        }

        combination
    }

    /// Builds a combination directly from keys, in press order.
    pub fn from_keys(keys: impl IntoIterator<Item = VirtualKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            unresolved: Vec::new(),
        }
    }

    /// Resolved keys in split (press) order.
    pub fn keys(&self) -> &[VirtualKey] {
        &self.keys
    }

    /// Keys in the order they are pressed.
    pub fn press_order(&self) -> impl DoubleEndedIterator<Item = VirtualKey> + '_ {
        self.keys.iter().copied()
    }

    /// Keys in the order they are released: the exact reverse of
    /// [`press_order`](Self::press_order).
    pub fn release_order(&self) -> impl DoubleEndedIterator<Item = VirtualKey> + '_ {
        self.keys.iter().rev().copied()
    }

    /// Non-empty tokens that did not resolve, in the order they appeared.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// `true` when no key resolved.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

impl FromStr for KeyCombination {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Renders the resolved keys as canonical tokens joined by `+`.
///
/// Unresolved tokens are not rendered, so `"Foo + C"` displays as `"C"`.
impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, "{TOKEN_SEPARATOR}")?;
            }
            f.write_str(key.token())?;
        }
        Ok(())
    }
}

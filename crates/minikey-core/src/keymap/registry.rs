//! Key name registry: human-readable tokens to [`VirtualKey`].
//!
//! Button definitions refer to keys by fixed, case-sensitive tokens such as
//! `"LControlKey"`, `"PageUp"` or `"7"`.  The spelling is part of the contract
//! with every stored button, so the table below must never rename a token.
//!
//! # How this table works
//!
//! `KEY_TOKENS` is a compile-time constant slice of `(token, key)` pairs.
//! There is no mutable backing store and no way to register a token at
//! runtime, so the same token resolves to the same key for the whole process
//! lifetime and concurrent readers need no locking.
//!
//! Lookup is a linear scan over 71 entries.  A button click resolves a
//! handful of tokens, so the scan is far below any perceptible latency and a
//! hash map would buy nothing.

use super::virtual_key::VirtualKey;

/// Every recognised token, in the order they are documented.
const KEY_TOKENS: &[(&str, VirtualKey)] = {
    use VirtualKey::*;
    &[
        // ── Modifier keys ──────────────────────────────────────────────────────
        ("LControlKey", LeftControl),
        ("RControlKey", RightControl),
        ("LShiftKey", LeftShift),
        ("RShiftKey", RightShift),
        ("LAltKey", LeftAlt),
        ("RAltKey", RightAlt),
        ("LWinKey", LeftWin),
        ("RWinKey", RightWin),
        // ── Letters ────────────────────────────────────────────────────────────
        ("A", A), ("B", B), ("C", C), ("D", D), ("E", E), ("F", F), ("G", G),
        ("H", H), ("I", I), ("J", J), ("K", K), ("L", L), ("M", M), ("N", N),
        ("O", O), ("P", P), ("Q", Q), ("R", R), ("S", S), ("T", T), ("U", U),
        ("V", V), ("W", W), ("X", X), ("Y", Y), ("Z", Z),
        // ── Digit row ──────────────────────────────────────────────────────────
        ("0", Digit0), ("1", Digit1), ("2", Digit2), ("3", Digit3), ("4", Digit4),
        ("5", Digit5), ("6", Digit6), ("7", Digit7), ("8", Digit8), ("9", Digit9),
        // ── Function keys ──────────────────────────────────────────────────────
        ("F1", F1), ("F2", F2), ("F3", F3), ("F4", F4), ("F5", F5), ("F6", F6),
        ("F7", F7), ("F8", F8), ("F9", F9), ("F10", F10), ("F11", F11), ("F12", F12),
        // ── Special keys ───────────────────────────────────────────────────────
        ("Enter", Enter),
        ("Space", Space),
        ("Tab", Tab),
        ("Backspace", Backspace),
        ("Delete", Delete),
        ("Insert", Insert),
        ("Home", Home),
        ("End", End),
        ("PageUp", PageUp),
        ("PageDown", PageDown),
        ("Escape", Escape),
        // ── Arrow keys ─────────────────────────────────────────────────────────
        ("Up", Up),
        ("Down", Down),
        ("Left", Left),
        ("Right", Right),
    ]
};

/// Resolves a trimmed, case-sensitive token to its [`VirtualKey`].
///
/// Returns `None` when the token is not in the registry.  Callers treat that as
/// "skip this token", not as an error.
pub fn resolve(token: &str) -> Option<VirtualKey> {
    KEY_TOKENS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(_, key)| key)
}

/// Returns the canonical token for `key`.
///
/// Every [`VirtualKey`] has exactly one token, so this never fails.
pub fn token_for(key: VirtualKey) -> &'static str {
    KEY_TOKENS
        .iter()
        .find(|&&(_, k)| k == key)
        .map(|&(name, _)| name)
        .unwrap_or("")
}

/// Iterates over every `(token, key)` pair in table order.
pub fn tokens() -> impl Iterator<Item = (&'static str, VirtualKey)> {
    KEY_TOKENS.iter().copied()
}

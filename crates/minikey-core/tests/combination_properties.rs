//! Integration tests for combination parsing through the public API.
//!
//! These tests exercise the registry, the extended-key classifier and the
//! parser together, the way the overlay's dispatcher consumes them.

use minikey_core::{
    is_extended_key,
    keymap::registry::{self, tokens},
    KeyCombination, VirtualKey,
};

/// Builds a combination string from every registry token, in table order.
fn all_tokens_combination() -> String {
    tokens().map(|(name, _)| name).collect::<Vec<_>>().join("+")
}

#[test]
fn test_every_registry_token_parses_to_one_key() {
    for (token, key) in tokens() {
        assert_eq!(KeyCombination::parse(token).keys(), &[key]);
    }
}

#[test]
fn test_chord_of_every_token_preserves_table_order() {
    let combo = KeyCombination::parse(&all_tokens_combination());
    let expected: Vec<VirtualKey> = tokens().map(|(_, key)| key).collect();
    assert_eq!(combo.keys(), expected.as_slice());
}

#[test]
fn test_release_order_is_exact_reverse_for_valid_chords() {
    let raws = [
        "LControlKey+C",
        "LControlKey+LShiftKey+Escape",
        "LWinKey+D",
        "RAltKey + RControlKey + Delete",
        "LShiftKey+Home+End+PageUp",
    ];
    for raw in raws {
        let combo = KeyCombination::parse(raw);
        let pressed: Vec<_> = combo.press_order().collect();
        let released: Vec<_> = combo.release_order().collect();
        let mut reversed = pressed.clone();
        reversed.reverse();
        assert_eq!(released, reversed, "{raw}");

        // Same multiset of keys pressed and released.
        let mut p = pressed.clone();
        let mut r = released.clone();
        p.sort();
        r.sort();
        assert_eq!(p, r, "{raw}");
    }
}

#[test]
fn test_is_extended_exhaustive_over_registry() {
    let extended: Vec<&str> = tokens()
        .filter(|&(_, key)| is_extended_key(key))
        .map(|(name, _)| name)
        .collect();

    assert_eq!(
        extended,
        vec![
            "RControlKey",
            "RAltKey",
            "Delete",
            "Insert",
            "Home",
            "End",
            "PageUp",
            "PageDown",
            "Up",
            "Down",
            "Left",
            "Right",
        ]
    );
}

#[test]
fn test_whitespace_variants_are_equivalent() {
    let canonical = KeyCombination::parse("LControlKey+C");
    for raw in ["  LControlKey + C  ", "LControlKey +C", "\tLControlKey+C\n"] {
        assert_eq!(KeyCombination::parse(raw), canonical, "{raw:?}");
    }
}

#[test]
fn test_registry_resolution_is_stable() {
    for _ in 0..3 {
        assert_eq!(registry::resolve("F5"), Some(VirtualKey::F5));
    }
}

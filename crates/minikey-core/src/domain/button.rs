//! Button definitions shown on the overlay.
//!
//! A [`ButtonDefinition`] belongs to the UI layer.  The core only ever reads
//! its raw `key_combination` string and parses it on demand; it never caches
//! the parsed form or writes back to the definition.

use serde::{Deserialize, Serialize};

use super::combination::KeyCombination;

/// Icon used when a button is created without one.
pub const DEFAULT_ICON: &str = "⌨";

/// One overlay button: its label, its key combination and its icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDefinition {
    /// Label rendered on the button (e.g. `"Ctrl+C"`).
    pub display_text: String,
    /// Raw combination string, e.g. `"LControlKey+C"`.
    pub key_combination: String,
    /// Short glyph rendered next to the label.
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl ButtonDefinition {
    /// Creates a definition the way the add/edit dialog does: label and
    /// combination are trimmed, and a missing or blank icon becomes
    /// [`DEFAULT_ICON`].
    pub fn new(
        display_text: impl AsRef<str>,
        key_combination: impl AsRef<str>,
        icon: Option<&str>,
    ) -> Self {
        let icon = icon
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .unwrap_or(DEFAULT_ICON);
        Self {
            display_text: display_text.as_ref().trim().to_string(),
            key_combination: key_combination.as_ref().trim().to_string(),
            icon: icon.to_string(),
        }
    }

    /// Parses the button's combination string.
    pub fn combination(&self) -> KeyCombination {
        KeyCombination::parse(&self.key_combination)
    }
}

/// The buttons a fresh overlay starts with.
pub fn default_buttons() -> Vec<ButtonDefinition> {
    [
        ("Ctrl", "LControlKey", "🎮"),
        ("Alt", "LAltKey", "⌨"),
        ("Shift", "LShiftKey", "⇧"),
        ("Ctrl+A", "LControlKey+A", "📝"),
        ("Ctrl+C", "LControlKey+C", "📋"),
        ("Ctrl+V", "LControlKey+V", "📄"),
    ]
    .into_iter()
    .map(|(text, combo, icon)| ButtonDefinition::new(text, combo, Some(icon)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::VirtualKey;

    #[test]
    fn test_default_buttons_all_resolve_fully() {
        let buttons = default_buttons();
        assert_eq!(buttons.len(), 6);
        for button in &buttons {
            let combo = button.combination();
            assert!(!combo.is_empty(), "{} must resolve", button.display_text);
            assert!(combo.unresolved().is_empty());
        }
    }

    #[test]
    fn test_default_ctrl_c_button_parses_to_control_then_c() {
        let buttons = default_buttons();
        let ctrl_c = buttons
            .iter()
            .find(|b| b.display_text == "Ctrl+C")
            .expect("stock Ctrl+C button");
        assert_eq!(
            ctrl_c.combination().keys(),
            &[VirtualKey::LeftControl, VirtualKey::C]
        );
    }

    #[test]
    fn test_new_trims_text_and_combination() {
        let button = ButtonDefinition::new("  Undo ", " LControlKey+Z ", Some("↶"));
        assert_eq!(button.display_text, "Undo");
        assert_eq!(button.key_combination, "LControlKey+Z");
        assert_eq!(button.icon, "↶");
    }

    #[test]
    fn test_new_without_icon_uses_default() {
        assert_eq!(ButtonDefinition::new("Esc", "Escape", None).icon, DEFAULT_ICON);
        assert_eq!(ButtonDefinition::new("Esc", "Escape", Some("  ")).icon, DEFAULT_ICON);
    }

    #[test]
    fn test_combination_does_not_mutate_raw_string() {
        let button = ButtonDefinition::new("Typo", "Ctrl+C", None);
        let combo = button.combination();
        assert_eq!(combo.keys(), &[VirtualKey::C]);
        assert_eq!(button.key_combination, "Ctrl+C");
    }

    #[test]
    fn test_deserialize_without_icon_uses_default() {
        let toml_str = r#"
display_text = "Save"
key_combination = "LControlKey+S"
"#;
        let button: ButtonDefinition = toml::from_str(toml_str).expect("deserialize");
        assert_eq!(button.icon, DEFAULT_ICON);
        assert_eq!(button.combination().len(), 2);
    }
}

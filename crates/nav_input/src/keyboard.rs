//! Keys the navigation bar reacts to.

use serde::{Deserialize, Serialize};

/// A keyboard key, reduced to what the dropdowns care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }

    /// Enter and Space activate a focused control.
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_key_mapping() {
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("Spacebar"), Key::Space);
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("Esc"), Key::Escape);
        assert_eq!(Key::from_dom("a"), Key::Other);
        assert_eq!(Key::from_dom("Tab"), Key::Other);
    }

    #[test]
    fn activation_keys() {
        assert!(Key::Enter.activates());
        assert!(Key::Space.activates());
        assert!(!Key::Escape.activates());
        assert!(!Key::Other.activates());
    }
}

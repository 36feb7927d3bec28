//! Widget identity and state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a dropdown widget, assigned in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u32);

impl WidgetId {
    /// Index into the machine's widget table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Open/closed state of one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WidgetState {
    #[default]
    Closed,
    Open,
}

impl WidgetState {
    pub fn is_open(self) -> bool {
        matches!(self, WidgetState::Open)
    }

    /// Value for the activator's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        match self {
            WidgetState::Open => "true",
            WidgetState::Closed => "false",
        }
    }
}

/// Descriptive data kept per registered widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetInfo {
    pub id: WidgetId,
    /// Activator label, used in logs only.
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_closed() {
        assert_eq!(WidgetState::default(), WidgetState::Closed);
        assert!(!WidgetState::default().is_open());
    }

    #[test]
    fn aria_values() {
        assert_eq!(WidgetState::Open.aria_expanded(), "true");
        assert_eq!(WidgetState::Closed.aria_expanded(), "false");
    }

    #[test]
    fn display_id() {
        assert_eq!(WidgetId(3).to_string(), "#3");
    }
}

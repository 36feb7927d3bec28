//! State machine errors.

use crate::widget::WidgetId;
use thiserror::Error;

/// Errors raised while executing a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// Command referenced a widget that was never registered.
    #[error("unknown widget: {id} (registered: {count})")]
    UnknownWidget { id: WidgetId, count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NavError::UnknownWidget {
            id: WidgetId(7),
            count: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("#7"));
        assert!(msg.contains('3'));
    }
}

//! Cosmetic copy protection.
//!
//! Blocks the browser's default handling of context menus, drags, selection
//! and copy. Anyone with dev tools, a screenshot or JavaScript disabled gets
//! around it; it is not access control.

use crate::config::ProtectConfig;

/// A document event whose default action is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedEvent {
    pub event_type: &'static str,
    /// Show the copy notice when this fires.
    pub shows_notice: bool,
}

/// Events blocked on the document.
pub const BLOCKED_EVENTS: [BlockedEvent; 4] = [
    BlockedEvent {
        event_type: "contextmenu",
        shows_notice: false,
    },
    BlockedEvent {
        event_type: "dragstart",
        shows_notice: false,
    },
    BlockedEvent {
        event_type: "selectstart",
        shows_notice: false,
    },
    BlockedEvent {
        event_type: "copy",
        shows_notice: true,
    },
];

/// Notice to show for an event, if any.
pub fn notice_for<'a>(config: &'a ProtectConfig, event: &BlockedEvent) -> Option<&'a str> {
    (event.shows_notice && !config.notice.is_empty()).then_some(config.notice.as_str())
}

//! Normalized input events from any browser event source.

use crate::keyboard::Key;
use nav_core::WidgetId;
use serde::{Deserialize, Serialize};

/// Browser event family an activation arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pathway {
    /// `pointerup` (pointer events).
    Pointer,
    /// `click` (legacy mouse events, also synthesized after taps and Enter).
    Click,
    /// `keydown` on a focused control.
    Keyboard,
}

impl Pathway {
    /// DOM event type wired for this pathway.
    pub fn event_type(self) -> &'static str {
        match self {
            Pathway::Pointer => "pointerup",
            Pathway::Click => "click",
            Pathway::Keyboard => "keydown",
        }
    }

    /// Pathways wired for pointer-like activation, in the order browsers
    /// deliver them for a single tap.
    ///
    /// `touchend` is not among them: it still fires after a scroll or swipe
    /// that cancelled the pointer, so it does not mark an activation.
    pub const ACTIVATION: [Pathway; 2] = [Pathway::Pointer, Pathway::Click];
}

/// Where an activation landed, relative to the dropdown markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitTarget {
    /// On (or inside) a widget's activator control.
    Control(WidgetId),
    /// On an entry inside a widget's menu.
    MenuEntry(WidgetId),
    /// Inside some widget but on neither its control nor an entry.
    Widget,
    /// Outside every widget.
    Outside,
}

/// Viewport geometry change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportChange {
    Resize,
    OrientationChange,
}

impl ViewportChange {
    pub fn event_type(self) -> &'static str {
        match self {
            ViewportChange::Resize => "resize",
            ViewportChange::OrientationChange => "orientationchange",
        }
    }
}

/// Normalized input event.
///
/// Timestamps are milliseconds on the page clock (`Event.timeStamp`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NavInput {
    /// Pointer or click activation.
    Activate {
        pathway: Pathway,
        target: HitTarget,
        at_ms: f64,
    },

    /// Key pressed. `focused` is the control holding focus, if any.
    Key {
        key: Key,
        focused: Option<WidgetId>,
        at_ms: f64,
    },

    /// Viewport resized or rotated.
    Viewport(ViewportChange),
}

impl NavInput {
    /// Create an activation event.
    pub fn activate(pathway: Pathway, target: HitTarget, at_ms: f64) -> Self {
        NavInput::Activate {
            pathway,
            target,
            at_ms,
        }
    }

    /// Create a key event.
    pub fn key(key: Key, focused: Option<WidgetId>, at_ms: f64) -> Self {
        NavInput::Key {
            key,
            focused,
            at_ms,
        }
    }
}

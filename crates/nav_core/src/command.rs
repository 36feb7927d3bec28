//! Commands understood by the dropdown state machine.

use crate::widget::WidgetId;
use serde::{Deserialize, Serialize};

/// A state change request, produced by the input router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Open the widget if closed (closing any other), close it if open.
    Toggle(WidgetId),

    /// Close the widget if it is open.
    Close(WidgetId),

    /// Close whatever is open.
    CloseAll,

    /// Do nothing.
    Noop,
}

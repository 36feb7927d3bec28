//! The dropdown state machine.

use crate::command::Command;
use crate::error::NavError;
use crate::widget::{WidgetId, WidgetInfo, WidgetState};
use serde::{Deserialize, Serialize};

/// What a single command changed.
///
/// At most one widget closes and at most one opens. Consumers must apply
/// `closed` before `opened` so no frame shows two open menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transition {
    pub closed: Option<WidgetId>,
    pub opened: Option<WidgetId>,
}

impl Transition {
    pub const NONE: Transition = Transition {
        closed: None,
        opened: None,
    };

    /// True if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.closed.is_none() && self.opened.is_none()
    }

    /// Changes as `(widget, new state)` pairs, closes first.
    pub fn changes(&self) -> impl Iterator<Item = (WidgetId, WidgetState)> {
        self.closed
            .map(|id| (id, WidgetState::Closed))
            .into_iter()
            .chain(self.opened.map(|id| (id, WidgetState::Open)))
    }
}

/// Open/closed state for every registered dropdown widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DropdownMachine {
    widgets: Vec<WidgetInfo>,
    open: Option<WidgetId>,
}

impl DropdownMachine {
    /// Create a machine with no widgets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget. All widgets start closed.
    pub fn register(&mut self, label: impl Into<String>) -> WidgetId {
        let id = WidgetId(self.widgets.len() as u32);
        self.widgets.push(WidgetInfo {
            id,
            label: label.into(),
        });
        id
    }

    /// Drop every widget, e.g. after the navigation markup was replaced.
    pub fn reset(&mut self) {
        self.widgets.clear();
        self.open = None;
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Registration data for a widget, if known.
    pub fn info(&self, id: WidgetId) -> Option<&WidgetInfo> {
        self.widgets.get(id.index())
    }

    /// The widget currently open, if any.
    pub fn open_widget(&self) -> Option<WidgetId> {
        self.open
    }

    /// State of one widget.
    pub fn state(&self, id: WidgetId) -> Result<WidgetState, NavError> {
        self.check(id)?;
        Ok(if self.open == Some(id) {
            WidgetState::Open
        } else {
            WidgetState::Closed
        })
    }

    /// Execute a command and report the resulting transition.
    pub fn execute(&mut self, command: Command) -> Result<Transition, NavError> {
        match command {
            Command::Toggle(id) => {
                self.check(id)?;
                if self.open == Some(id) {
                    self.open = None;
                    Ok(Transition {
                        closed: Some(id),
                        opened: None,
                    })
                } else {
                    let closed = self.open.replace(id);
                    Ok(Transition {
                        closed,
                        opened: Some(id),
                    })
                }
            }
            Command::Close(id) => {
                self.check(id)?;
                if self.open == Some(id) {
                    self.open = None;
                    Ok(Transition {
                        closed: Some(id),
                        opened: None,
                    })
                } else {
                    Ok(Transition::NONE)
                }
            }
            Command::CloseAll => Ok(Transition {
                closed: self.open.take(),
                opened: None,
            }),
            Command::Noop => Ok(Transition::NONE),
        }
    }

    fn check(&self, id: WidgetId) -> Result<(), NavError> {
        if id.index() < self.widgets.len() {
            Ok(())
        } else {
            Err(NavError::UnknownWidget {
                id,
                count: self.widgets.len(),
            })
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const WIDGETS: u32 = 4;

    fn arb_command() -> impl Strategy<Value = Command> {
        prop_oneof![
            (0..WIDGETS).prop_map(|i| Command::Toggle(WidgetId(i))),
            (0..WIDGETS).prop_map(|i| Command::Close(WidgetId(i))),
            Just(Command::CloseAll),
            Just(Command::Noop),
        ]
    }

    fn machine() -> DropdownMachine {
        let mut m = DropdownMachine::new();
        for i in 0..WIDGETS {
            m.register(format!("w{i}"));
        }
        m
    }

    proptest! {
        /// After any command sequence, at most one widget reports open.
        #[test]
        fn at_most_one_open(commands in prop::collection::vec(arb_command(), 0..64)) {
            let mut m = machine();
            for cmd in commands {
                let t = m.execute(cmd).unwrap();
                prop_assert!(t.closed != t.opened || t.is_empty());
                let open = (0..WIDGETS)
                    .filter(|i| m.state(WidgetId(*i)).unwrap().is_open())
                    .count();
                prop_assert!(open <= 1);
            }
        }

        /// Toggling the same widget twice returns to the previous state.
        #[test]
        fn double_toggle_restores_target(
            commands in prop::collection::vec(arb_command(), 0..32),
            target in 0..WIDGETS,
        ) {
            let mut m = machine();
            for cmd in commands {
                m.execute(cmd).unwrap();
            }
            let id = WidgetId(target);
            let before = m.state(id).unwrap();
            m.execute(Command::Toggle(id)).unwrap();
            prop_assert_ne!(m.state(id).unwrap(), before);
            m.execute(Command::Toggle(id)).unwrap();
            prop_assert_eq!(m.state(id).unwrap(), before);
        }
    }
}

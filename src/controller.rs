//! Dropdown controller: router and state machine behind one entry point.
//!
//! The DOM layer turns browser events into [`NavInput`], calls
//! [`NavController::handle`], and applies the returned [`Outcome`]: class and
//! ARIA changes from the transition, then the event disposition.

use nav_core::{DropdownMachine, Transition, WidgetId, WidgetState};
use nav_input::{Disposition, InputRouter, NavInput, RouterConfig};

/// Result of handling one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub transition: Transition,
    pub disposition: Disposition,
}

/// Owns the dropdown state for the currently injected markup.
#[derive(Debug, Clone, Default)]
pub struct NavController {
    machine: DropdownMachine,
    router: InputRouter,
}

impl NavController {
    pub fn new(config: RouterConfig) -> Self {
        Self {
            machine: DropdownMachine::new(),
            router: InputRouter::with_config(config),
        }
    }

    /// Replace the widget set, e.g. after (re-)injection. Everything starts
    /// closed. Ids follow the order of `labels`.
    pub fn register_widgets<I, S>(&mut self, labels: I) -> Vec<WidgetId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.machine.reset();
        self.router.reset();
        labels
            .into_iter()
            .map(|label| self.machine.register(label))
            .collect()
    }

    pub fn widget_count(&self) -> usize {
        self.machine.len()
    }

    pub fn open_widget(&self) -> Option<WidgetId> {
        self.machine.open_widget()
    }

    /// Activator label a widget was registered with.
    pub fn label(&self, id: WidgetId) -> Option<&str> {
        self.machine.info(id).map(|w| w.label.as_str())
    }

    /// State of a widget; unknown ids read as closed.
    pub fn state(&self, id: WidgetId) -> WidgetState {
        self.machine.state(id).unwrap_or_default()
    }

    /// Route an input event and execute the resulting command.
    pub fn handle(&mut self, input: NavInput) -> Outcome {
        let routed = self.router.process(input);
        let transition = match self.machine.execute(routed.command) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(error = %e, command = ?routed.command, "dropping command");
                Transition::NONE
            }
        };
        if !transition.is_empty() {
            tracing::debug!(
                closed = ?transition.closed.and_then(|id| self.label(id)),
                opened = ?transition.opened.and_then(|id| self.label(id)),
                "dropdown transition"
            );
        }
        Outcome {
            transition,
            disposition: routed.disposition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_input::{HitTarget, Key, Pathway, ViewportChange};

    #[test]
    fn no_widgets_is_harmless() {
        let mut c = NavController::default();
        let out = c.handle(NavInput::activate(Pathway::Pointer, HitTarget::Outside, 1.0));
        assert!(out.transition.is_empty());
        let out = c.handle(NavInput::key(Key::Escape, None, 2.0));
        assert!(out.transition.is_empty());
        let out = c.handle(NavInput::Viewport(ViewportChange::Resize));
        assert!(out.disposition.needs_relayout());
    }

    #[test]
    fn stale_widget_id_is_dropped() {
        let mut c = NavController::default();
        c.register_widgets(["People"]);
        let out = c.handle(NavInput::activate(
            Pathway::Pointer,
            HitTarget::Control(WidgetId(5)),
            1.0,
        ));
        assert!(out.transition.is_empty());
        assert_eq!(c.open_widget(), None);
    }

    #[test]
    fn reregistering_closes_everything() {
        let mut c = NavController::default();
        let ids = c.register_widgets(["People", "News"]);
        c.handle(NavInput::activate(Pathway::Pointer, HitTarget::Control(ids[1]), 1.0));
        assert_eq!(c.open_widget(), Some(ids[1]));

        let ids = c.register_widgets(["People", "News", "Publications"]);
        assert_eq!(ids.len(), 3);
        assert_eq!(c.widget_count(), 3);
        assert_eq!(c.open_widget(), None);
    }

    #[test]
    fn labels_follow_registration_order() {
        let mut c = NavController::default();
        let ids = c.register_widgets(["People", "News"]);
        assert_eq!(c.label(ids[1]), Some("News"));
        assert_eq!(c.label(WidgetId(2)), None);
    }

    #[test]
    fn unknown_state_reads_closed() {
        let c = NavController::default();
        assert_eq!(c.state(WidgetId(0)), WidgetState::Closed);
    }
}

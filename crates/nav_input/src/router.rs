//! Input router: normalized events in, one command per gesture out.

use crate::config::RouterConfig;
use crate::disposition::Disposition;
use crate::keyboard::Key;
use crate::raw::{HitTarget, NavInput, Pathway};
use nav_core::Command;

/// Router output for one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routed {
    /// Command for the dropdown state machine.
    pub command: Command,
    /// What to do with the originating browser event.
    pub disposition: Disposition,
    /// True if the event was dropped as a synthetic duplicate.
    pub suppressed: bool,
}

impl Routed {
    fn new(command: Command, disposition: Disposition) -> Self {
        Self {
            command,
            disposition,
            suppressed: false,
        }
    }

    fn ignored() -> Self {
        Self::new(Command::Noop, Disposition::NONE)
    }

    fn suppressed() -> Self {
        Self {
            suppressed: true,
            ..Self::ignored()
        }
    }
}

/// Last gesture the router acted on.
#[derive(Debug, Clone, Copy, PartialEq)]
struct HandledGesture {
    pathway: Pathway,
    at_ms: f64,
}

/// Turns [`NavInput`] into [`Command`]s, once per physical gesture.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    config: RouterConfig,
    last: Option<HandledGesture>,
}

impl InputRouter {
    /// Create a router with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self { config, last: None }
    }

    /// Forget the last handled gesture.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Route one input event.
    pub fn process(&mut self, input: NavInput) -> Routed {
        match input {
            NavInput::Activate {
                pathway,
                target,
                at_ms,
            } => {
                if self.is_synthetic(pathway, at_ms) {
                    tracing::debug!(?pathway, ?target, at_ms, "suppressed synthetic activation");
                    return Routed::suppressed();
                }
                self.remember(pathway, at_ms);
                route_target(target)
            }

            NavInput::Key {
                key,
                focused,
                at_ms,
            } => {
                if key.activates() && self.config.keyboard_activation {
                    if let Some(id) = focused {
                        self.remember(Pathway::Keyboard, at_ms);
                        return Routed::new(Command::Toggle(id), Disposition::PREVENT_DEFAULT);
                    }
                    return Routed::ignored();
                }
                if key == Key::Escape && self.config.escape_closes {
                    return Routed::new(Command::CloseAll, Disposition::NONE);
                }
                Routed::ignored()
            }

            NavInput::Viewport(_) => Routed::new(Command::CloseAll, Disposition::RELAYOUT),
        }
    }

    /// A different pathway reporting inside the window of the last handled
    /// gesture is the browser replaying that gesture.
    fn is_synthetic(&self, pathway: Pathway, at_ms: f64) -> bool {
        match self.last {
            Some(last) if last.pathway != pathway => {
                let elapsed = at_ms - last.at_ms;
                (0.0..self.config.suppression_ms as f64).contains(&elapsed)
            }
            _ => false,
        }
    }

    fn remember(&mut self, pathway: Pathway, at_ms: f64) {
        self.last = Some(HandledGesture { pathway, at_ms });
    }
}

fn route_target(target: HitTarget) -> Routed {
    match target {
        HitTarget::Control(id) => Routed::new(Command::Toggle(id), Disposition::consumed()),
        // Close only; the entry's own navigation must go through.
        HitTarget::MenuEntry(id) => Routed::new(Command::Close(id), Disposition::NONE),
        HitTarget::Widget => Routed::ignored(),
        HitTarget::Outside => Routed::new(Command::CloseAll, Disposition::NONE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::ViewportChange;
    use nav_core::WidgetId;

    const A: WidgetId = WidgetId(0);

    fn tap(router: &mut InputRouter, pathway: Pathway, target: HitTarget, at: f64) -> Routed {
        router.process(NavInput::activate(pathway, target, at))
    }

    #[test]
    fn control_toggles_and_consumes_event() {
        let mut r = InputRouter::new();
        let out = tap(&mut r, Pathway::Pointer, HitTarget::Control(A), 10.0);
        assert_eq!(out.command, Command::Toggle(A));
        assert!(out.disposition.prevents_default());
        assert!(out.disposition.contains(Disposition::STOP_PROPAGATION));
        assert!(!out.suppressed);
    }

    #[test]
    fn menu_entry_closes_without_preventing_default() {
        let mut r = InputRouter::new();
        let out = tap(&mut r, Pathway::Click, HitTarget::MenuEntry(A), 10.0);
        assert_eq!(out.command, Command::Close(A));
        assert_eq!(out.disposition, Disposition::NONE);
    }

    #[test]
    fn outside_closes_all() {
        let mut r = InputRouter::new();
        let out = tap(&mut r, Pathway::Pointer, HitTarget::Outside, 10.0);
        assert_eq!(out.command, Command::CloseAll);
    }

    #[test]
    fn inside_widget_is_ignored() {
        let mut r = InputRouter::new();
        let out = tap(&mut r, Pathway::Pointer, HitTarget::Widget, 10.0);
        assert_eq!(out.command, Command::Noop);
    }

    #[test]
    fn synthetic_click_after_pointer_is_suppressed() {
        let mut r = InputRouter::new();
        tap(&mut r, Pathway::Pointer, HitTarget::Control(A), 1000.0);
        let click = tap(&mut r, Pathway::Click, HitTarget::Control(A), 1300.0);
        assert!(click.suppressed);
        assert_eq!(click.command, Command::Noop);
        assert_eq!(click.disposition, Disposition::NONE);
    }

    #[test]
    fn click_outside_window_is_handled() {
        let mut r = InputRouter::with_config(RouterConfig::with_suppression_ms(350).unwrap());
        tap(&mut r, Pathway::Pointer, HitTarget::Control(A), 1000.0);
        let click = tap(&mut r, Pathway::Click, HitTarget::Control(A), 1350.0);
        assert!(!click.suppressed);
        assert_eq!(click.command, Command::Toggle(A));
    }

    #[test]
    fn cancelled_touch_leaves_open_menu_alone() {
        // A swipe that starts on the control ends in pointercancel and
        // touchend; neither reaches the router, so the next real tap is the
        // only gesture and closes the menu exactly once.
        let mut r = InputRouter::new();
        let mut m = nav_core::DropdownMachine::new();
        let a = m.register("People");
        m.execute(tap(&mut r, Pathway::Pointer, HitTarget::Control(a), 1000.0).command)
            .unwrap();
        assert_eq!(m.open_widget(), Some(a));

        let close = tap(&mut r, Pathway::Pointer, HitTarget::Outside, 3000.0);
        let ghost = tap(&mut r, Pathway::Click, HitTarget::Outside, 3010.0);
        m.execute(close.command).unwrap();
        m.execute(ghost.command).unwrap();
        assert!(ghost.suppressed);
        assert_eq!(m.open_widget(), None);
    }

    #[test]
    fn same_pathway_repeat_is_genuine() {
        let mut r = InputRouter::new();
        tap(&mut r, Pathway::Pointer, HitTarget::Control(A), 1000.0);
        let second = tap(&mut r, Pathway::Pointer, HitTarget::Control(A), 1100.0);
        assert!(!second.suppressed);
        assert_eq!(second.command, Command::Toggle(A));
    }

    #[test]
    fn synthetic_click_on_entry_keeps_navigation() {
        let mut r = InputRouter::new();
        let first = tap(&mut r, Pathway::Pointer, HitTarget::MenuEntry(A), 1000.0);
        let ghost = tap(&mut r, Pathway::Click, HitTarget::MenuEntry(A), 1080.0);
        assert_eq!(first.command, Command::Close(A));
        assert!(ghost.suppressed);
        assert!(!ghost.disposition.prevents_default());
    }

    #[test]
    fn keyboard_activation_toggles_focused_control() {
        let mut r = InputRouter::new();
        let out = r.process(NavInput::key(Key::Enter, Some(A), 5.0));
        assert_eq!(out.command, Command::Toggle(A));
        assert!(out.disposition.prevents_default());

        let out = r.process(NavInput::key(Key::Space, Some(A), 900.0));
        assert_eq!(out.command, Command::Toggle(A));
    }

    #[test]
    fn click_synthesized_from_enter_is_suppressed() {
        let mut r = InputRouter::new();
        r.process(NavInput::key(Key::Enter, Some(A), 5.0));
        let click = tap(&mut r, Pathway::Click, HitTarget::Control(A), 6.0);
        assert!(click.suppressed);
    }

    #[test]
    fn enter_without_focused_control_is_ignored() {
        let mut r = InputRouter::new();
        let out = r.process(NavInput::key(Key::Enter, None, 5.0));
        assert_eq!(out.command, Command::Noop);
        assert_eq!(out.disposition, Disposition::NONE);
    }

    #[test]
    fn escape_closes_regardless_of_focus() {
        let mut r = InputRouter::new();
        assert_eq!(
            r.process(NavInput::key(Key::Escape, None, 1.0)).command,
            Command::CloseAll
        );
        assert_eq!(
            r.process(NavInput::key(Key::Escape, Some(A), 2.0)).command,
            Command::CloseAll
        );
        assert_eq!(
            r.process(NavInput::key(Key::Other, Some(A), 3.0)).command,
            Command::Noop
        );
    }

    #[test]
    fn keyboard_activation_can_be_disabled() {
        let config = RouterConfig {
            keyboard_activation: false,
            ..RouterConfig::default()
        };
        let mut r = InputRouter::with_config(config);
        assert_eq!(
            r.process(NavInput::key(Key::Enter, Some(A), 1.0)).command,
            Command::Noop
        );
    }

    #[test]
    fn viewport_change_closes_and_relayouts() {
        let mut r = InputRouter::new();
        for change in [ViewportChange::Resize, ViewportChange::OrientationChange] {
            let out = r.process(NavInput::Viewport(change));
            assert_eq!(out.command, Command::CloseAll);
            assert!(out.disposition.needs_relayout());
            assert!(!out.disposition.prevents_default());
        }
    }

    #[test]
    fn reset_forgets_gesture() {
        let mut r = InputRouter::new();
        tap(&mut r, Pathway::Pointer, HitTarget::Control(A), 1000.0);
        r.reset();
        let click = tap(&mut r, Pathway::Click, HitTarget::Control(A), 1010.0);
        assert!(!click.suppressed);
    }
}

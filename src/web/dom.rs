//! DOM adapter for the dropdown controller.
//!
//! Scans the injected markup for widgets, maps browser events onto
//! [`NavInput`], and writes transitions back as class + `aria-expanded`
//! changes.

use crate::config::NavConfig;
use crate::controller::{NavController, Outcome};
use crate::error::SiteNavError;
use crate::layout::LayoutPublisher;
use crate::markup::{wired_widgets, HitPath};
use crate::web::layout::DomLayoutHost;
use nav_core::WidgetId;
use nav_input::{HitTarget, Key, NavInput, Pathway, ViewportChange};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, Node};

/// One wired dropdown.
struct DomWidget {
    root: Element,
    control: Element,
}

/// Controller state for the currently injected navigation markup.
pub struct PageState {
    config: NavConfig,
    controller: NavController,
    widgets: Vec<DomWidget>,
    publisher: LayoutPublisher,
    host: DomLayoutHost,
}

impl PageState {
    /// Scan the mount for widgets. A widget without an activator control is
    /// skipped; a missing mount yields a state with no widgets.
    pub fn scan(
        document: &Document,
        config: NavConfig,
        publisher: LayoutPublisher,
    ) -> Result<Self, SiteNavError> {
        let mut found = Vec::new();
        if let Some(mount) = document.get_element_by_id(&config.mount_id) {
            let nodes = mount.query_selector_all(&config.widget_selector)?;
            for i in 0..nodes.length() {
                let Some(root) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                    continue;
                };
                let control = root.query_selector(&config.control_selector).ok().flatten();
                found.push((root, control));
            }
        } else {
            tracing::warn!(mount = %config.mount_id, "mount element missing, nothing to wire");
        }
        let widgets: Vec<DomWidget> = wired_widgets(found)
            .into_iter()
            .map(|(root, control)| DomWidget { root, control })
            .collect();

        let mut controller = NavController::new(config.router_config()?);
        controller.register_widgets(widgets.iter().map(|w| {
            w.control
                .text_content()
                .map(|t| t.trim().to_string())
                .unwrap_or_default()
        }));

        for widget in &widgets {
            widget.root.class_list().remove_1(&config.open_class)?;
            widget.control.set_attribute("aria-expanded", "false")?;
        }

        tracing::info!(widgets = widgets.len(), "navigation dropdowns wired");

        let host = DomLayoutHost::new(document.clone(), &config.mount_id, &config.nav_selector);
        Ok(Self {
            config,
            controller,
            widgets,
            publisher,
            host,
        })
    }

    /// Pointer or click activation.
    pub fn on_activate(&mut self, pathway: Pathway, event: &Event) {
        let target = self.hit_target(event_element(event).as_ref());
        let input = NavInput::activate(pathway, target, event.time_stamp());
        self.dispatch(input, event);
    }

    pub fn on_keydown(&mut self, event: &KeyboardEvent) {
        let focused = event_element(event)
            .and_then(|el| el.closest(&self.config.control_selector).ok().flatten())
            .and_then(|control| self.widget_by_control(&control));
        let input = NavInput::key(Key::from_dom(&event.key()), focused, event.time_stamp());
        self.dispatch(input, event);
    }

    pub fn on_viewport(&mut self, change: ViewportChange, event: &Event) {
        self.dispatch(NavInput::Viewport(change), event);
    }

    fn dispatch(&mut self, input: NavInput, event: &Event) {
        let outcome = self.controller.handle(input);
        self.apply(outcome, event);
    }

    /// Closes before opens, in this turn, then the event disposition.
    fn apply(&self, outcome: Outcome, event: &Event) {
        for (id, state) in outcome.transition.changes() {
            let Some(widget) = self.widgets.get(id.index()) else {
                continue;
            };
            if let Err(e) = widget
                .root
                .class_list()
                .toggle_with_force(&self.config.open_class, state.is_open())
            {
                tracing::warn!(widget = %id, error = ?e, "failed to toggle class");
            }
            if let Err(e) = widget
                .control
                .set_attribute("aria-expanded", state.aria_expanded())
            {
                tracing::warn!(widget = %id, error = ?e, "failed to set aria-expanded");
            }
        }

        let disposition = outcome.disposition;
        if disposition.prevents_default() {
            event.prevent_default();
        }
        if disposition.contains(nav_input::Disposition::STOP_PROPAGATION) {
            event.stop_propagation();
        }
        if disposition.needs_relayout() {
            if let Err(e) = self.publisher.publish(&self.host) {
                tracing::warn!(error = %e, "failed to republish nav height");
            }
        }
    }

    fn hit_target(&self, target: Option<&Element>) -> HitTarget {
        let Some(target) = target else {
            return HitTarget::Outside;
        };

        HitPath {
            control: closest(target, &self.config.control_selector)
                .and_then(|control| self.widget_by_control(&control)),
            entry: closest(target, &self.config.entry_selector)
                .and_then(|entry| closest(&entry, &self.config.widget_selector))
                .and_then(|root| self.widget_by_root(&root)),
            in_widget: closest(target, &self.config.widget_selector).is_some(),
        }
        .classify()
    }

    fn widget_by_control(&self, control: &Element) -> Option<WidgetId> {
        self.widgets
            .iter()
            .position(|w| same_node(&w.control, control))
            .map(|i| WidgetId(i as u32))
    }

    fn widget_by_root(&self, root: &Element) -> Option<WidgetId> {
        self.widgets
            .iter()
            .position(|w| same_node(&w.root, root))
            .map(|i| WidgetId(i as u32))
    }
}

fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn same_node(a: &Element, b: &Element) -> bool {
    let b: &Node = b;
    a.is_same_node(Some(b))
}

fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

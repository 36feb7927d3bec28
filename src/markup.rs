//! Decisions over the injected dropdown markup that need no DOM: which
//! discovered widgets get wired, and where an activation landed.

use nav_core::WidgetId;
use nav_input::HitTarget;

/// Keep the widgets that have an activator control, in discovery order.
///
/// `found` yields each widget root with the control found inside it. Kept
/// widgets are numbered from the returned list, so skipped ones leave no
/// gaps in the ids.
pub fn wired_widgets<R, C, I>(found: I) -> Vec<(R, C)>
where
    I: IntoIterator<Item = (R, Option<C>)>,
{
    found
        .into_iter()
        .enumerate()
        .filter_map(|(index, (root, control))| match control {
            Some(control) => Some((root, control)),
            None => {
                tracing::debug!(index, "dropdown without activator, skipped");
                None
            }
        })
        .collect()
}

/// Ancestors of an activation target, as found by walking up from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitPath {
    /// Wired widget whose control contains the target.
    pub control: Option<WidgetId>,
    /// Wired widget whose menu entry contains the target.
    pub entry: Option<WidgetId>,
    /// The target is inside some widget container, wired or not.
    pub in_widget: bool,
}

impl HitPath {
    /// Control beats entry, entry beats the bare widget, else outside.
    pub fn classify(self) -> HitTarget {
        if let Some(id) = self.control {
            HitTarget::Control(id)
        } else if let Some(id) = self.entry {
            HitTarget::MenuEntry(id)
        } else if self.in_widget {
            HitTarget::Widget
        } else {
            HitTarget::Outside
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_without_activator_is_skipped() {
        let found = vec![
            ("people", Some("People")),
            ("broken", None),
            ("news", Some("News")),
        ];
        let wired = wired_widgets(found);
        assert_eq!(wired, vec![("people", "People"), ("news", "News")]);
    }

    #[test]
    fn nothing_found_wires_nothing() {
        let wired: Vec<(u8, u8)> = wired_widgets(Vec::new());
        assert!(wired.is_empty());
    }

    #[test]
    fn control_wins_over_entry() {
        // A control nested in a menu (submenu trigger) still toggles.
        let path = HitPath {
            control: Some(WidgetId(1)),
            entry: Some(WidgetId(0)),
            in_widget: true,
        };
        assert_eq!(path.classify(), HitTarget::Control(WidgetId(1)));
    }

    #[test]
    fn entry_wins_over_widget() {
        let path = HitPath {
            entry: Some(WidgetId(2)),
            in_widget: true,
            ..HitPath::default()
        };
        assert_eq!(path.classify(), HitTarget::MenuEntry(WidgetId(2)));
    }

    #[test]
    fn inside_skipped_widget_is_not_outside() {
        // Entries of an unwired widget resolve to no id.
        let path = HitPath {
            in_widget: true,
            ..HitPath::default()
        };
        assert_eq!(path.classify(), HitTarget::Widget);
    }

    #[test]
    fn nothing_matched_is_outside() {
        assert_eq!(HitPath::default().classify(), HitTarget::Outside);
    }
}

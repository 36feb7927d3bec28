//! What the DOM adapter should do with the original browser event.

use bitflags::bitflags;

bitflags! {
    /// Event-level side effects requested by the router.
    ///
    /// Menu entries never receive `PREVENT_DEFAULT`: their navigation must
    /// always complete.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Disposition: u8 {
        /// Leave the event alone.
        const NONE = 0;

        /// Call `preventDefault()` on the event.
        const PREVENT_DEFAULT = 1 << 0;

        /// Call `stopPropagation()` on the event.
        const STOP_PROPAGATION = 1 << 1;

        /// Re-measure the navigation bar and republish its height.
        const RELAYOUT = 1 << 2;
    }
}

impl Default for Disposition {
    fn default() -> Self {
        Disposition::NONE
    }
}

impl Disposition {
    /// Flags for an activator control: the button does nothing by itself,
    /// and the event should not reach the outside-dismiss handling.
    pub fn consumed() -> Self {
        Disposition::PREVENT_DEFAULT | Disposition::STOP_PROPAGATION
    }

    pub fn prevents_default(&self) -> bool {
        self.contains(Disposition::PREVENT_DEFAULT)
    }

    pub fn needs_relayout(&self) -> bool {
        self.contains(Disposition::RELAYOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(Disposition::default(), Disposition::NONE);
        assert!(!Disposition::default().prevents_default());
    }

    #[test]
    fn consumed_flags() {
        let d = Disposition::consumed();
        assert!(d.prevents_default());
        assert!(d.contains(Disposition::STOP_PROPAGATION));
        assert!(!d.needs_relayout());
    }
}

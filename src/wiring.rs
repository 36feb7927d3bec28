//! Page-lifetime guard against wiring listeners twice.
//!
//! Keys name what a listener set is attached to, not which mount triggered
//! it: navigation listeners live on `document`/`window`, so re-initializing
//! with a different mount id must still find them claimed.

use std::collections::HashSet;

/// Guard key for the document and window navigation listeners.
pub const NAV_LISTENERS: &str = "document";

/// Guard key for the copy-protection listeners.
pub const COPY_PROTECTION: &str = "copy-protection";

/// Remembers which listener sets are already installed.
#[derive(Debug, Default)]
pub struct WiringGuard {
    wired: HashSet<String>,
}

impl WiringGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`. Returns `false` if it was already claimed.
    pub fn claim(&mut self, key: &str) -> bool {
        self.wired.insert(key.to_string())
    }

    /// Claim the navigation listeners on behalf of `mount_id`. Every mount
    /// shares one set; only the first caller gets `true`.
    pub fn claim_nav_listeners(&mut self, mount_id: &str) -> bool {
        let fresh = self.claim(NAV_LISTENERS);
        if !fresh {
            tracing::debug!(mount = %mount_id, "navigation listeners already installed");
        }
        fresh
    }
}

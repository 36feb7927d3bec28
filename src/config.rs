//! Page-level configuration.
//!
//! Defaults match the site's markup conventions. A page can override them
//! with a JSON object passed to `init_with_config`, and the mount element can
//! override the base path and suppression window through `data-base` and
//! `data-suppress-ms`.

use crate::error::SiteNavError;
use nav_input::RouterConfig;
use serde::{Deserialize, Serialize};

/// Default height (px) published when the bar cannot be measured.
pub const DEFAULT_NAV_HEIGHT: f64 = 56.0;

/// Default copy notice.
pub const DEFAULT_COPY_NOTICE: &str = "Copying is disabled on this site.";

/// Navigation controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Id of the element whose contents are replaced by the fragment.
    pub mount_id: String,
    /// Prefix prepended to `partial_path`, relative to the page.
    pub base: String,
    /// Fragment location below `base`.
    pub partial_path: String,
    /// Navigation bar element, measured for the height signal.
    pub nav_selector: String,
    /// Dropdown widget container.
    pub widget_selector: String,
    /// Activator control inside a widget.
    pub control_selector: String,
    /// Menu entries inside a widget.
    pub entry_selector: String,
    /// Class toggled on an open widget.
    pub open_class: String,
    /// Custom property receiving the bar height.
    pub height_property: String,
    /// Height (px) used when the bar cannot be measured.
    pub fallback_height: f64,
    /// Synthetic-event suppression window (ms).
    pub suppression_ms: u64,
    pub protect: ProtectConfig,
}

/// Copy-protection settings. Cosmetic only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtectConfig {
    pub enabled: bool,
    /// Text shown on copy attempts. Empty disables the notice.
    pub notice: String,
}

impl Default for ProtectConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            notice: DEFAULT_COPY_NOTICE.to_string(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            mount_id: "site-nav".to_string(),
            base: String::new(),
            partial_path: "partials/nav.html".to_string(),
            nav_selector: ".nav".to_string(),
            widget_selector: ".dropdown".to_string(),
            control_selector: ".dropbtn".to_string(),
            entry_selector: ".dropdown-menu a".to_string(),
            open_class: "open".to_string(),
            height_property: "--nav-height".to_string(),
            fallback_height: DEFAULT_NAV_HEIGHT,
            suppression_ms: nav_input::DEFAULT_SUPPRESSION_MS,
            protect: ProtectConfig::default(),
        }
    }
}

impl NavConfig {
    /// Parse from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SiteNavError> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `data-*` overrides read from the mount element.
    ///
    /// `lookup` receives the dataset key (`base`, `suppressMs`). A window that
    /// is not a number or out of range is logged and the configured window
    /// kept; markup typos never stop the nav from loading.
    pub fn apply_dataset<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup("base") {
            self.base = base;
        }
        if let Some(raw) = lookup("suppressMs") {
            match raw.trim().parse::<u64>() {
                Ok(ms) if RouterConfig::with_suppression_ms(ms).is_ok() => {
                    self.suppression_ms = ms;
                }
                _ => tracing::warn!(
                    value = %raw,
                    keep = self.suppression_ms,
                    "ignoring invalid data-suppress-ms"
                ),
            }
        }
    }

    pub fn validate(&self) -> Result<(), SiteNavError> {
        let selectors = [
            ("mount_id", &self.mount_id),
            ("partial_path", &self.partial_path),
            ("nav_selector", &self.nav_selector),
            ("widget_selector", &self.widget_selector),
            ("control_selector", &self.control_selector),
            ("entry_selector", &self.entry_selector),
            ("open_class", &self.open_class),
        ];
        if let Some((name, _)) = selectors.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(SiteNavError::Config(format!("{} must not be empty", name)));
        }
        if !self.height_property.starts_with("--") {
            return Err(SiteNavError::Config(format!(
                "height_property must be a custom property, got '{}'",
                self.height_property
            )));
        }
        if !(self.fallback_height.is_finite() && self.fallback_height > 0.0) {
            return Err(SiteNavError::Config(format!(
                "fallback_height must be positive, got {}",
                self.fallback_height
            )));
        }
        self.router_config()?;
        Ok(())
    }

    /// Router settings derived from this config.
    pub fn router_config(&self) -> Result<RouterConfig, SiteNavError> {
        Ok(RouterConfig::with_suppression_ms(self.suppression_ms)?)
    }
}

/// DOM attribute name for a dataset key: `suppressMs` → `data-suppress-ms`.
pub fn dataset_attribute(key: &str) -> String {
    let mut attr = String::from("data-");
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            attr.push('-');
            attr.push(c.to_ascii_lowercase());
        } else {
            attr.push(c);
        }
    }
    attr
}

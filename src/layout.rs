//! Navigation bar height signal.
//!
//! Page styles position the mobile menu overlay below the bar using a CSS
//! custom property. It is published after the fragment is injected and again
//! on every resize or orientation change.

use crate::error::SiteNavError;

/// Page surface the publisher reads geometry from and writes styles to.
pub trait LayoutHost {
    /// Rendered height (px) of the navigation bar, if it exists.
    fn measure_nav(&self) -> Option<f64>;

    /// Set a custom property on the document element.
    fn set_style_property(&self, name: &str, value: &str) -> Result<(), SiteNavError>;
}

/// Writes the bar height to a custom property.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPublisher {
    property: String,
    fallback: f64,
}

impl LayoutPublisher {
    pub fn new(property: impl Into<String>, fallback: f64) -> Self {
        Self {
            property: property.into(),
            fallback,
        }
    }

    /// Height to publish for a measurement.
    pub fn resolve_height(&self, measured: Option<f64>) -> f64 {
        match measured {
            Some(h) if h.is_finite() && h >= 0.0 => h,
            _ => self.fallback,
        }
    }

    /// Measure and publish. Returns the published height.
    pub fn publish<H: LayoutHost + ?Sized>(&self, host: &H) -> Result<f64, SiteNavError> {
        let height = self.resolve_height(host.measure_nav());
        host.set_style_property(&self.property, &css_px(height))?;
        tracing::debug!(property = %self.property, height, "published nav height");
        Ok(height)
    }
}

/// Format a pixel length the way `getBoundingClientRect` values are written
/// back into styles.
pub fn css_px(value: f64) -> String {
    format!("{}px", value)
}

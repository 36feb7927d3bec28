//! Error types for the navigation loader and controller.

use thiserror::Error;

/// Errors raised while loading, measuring or wiring the navigation bar.
///
/// None of these are fatal to the page: callers log them and carry on with a
/// partially or fully non-interactive navigation bar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteNavError {
    /// Page URL, base prefix or fragment path could not be combined.
    #[error("invalid fragment url from base '{base}': {reason}")]
    InvalidUrl { base: String, reason: String },

    /// Network error or rejected fetch promise.
    #[error("fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    /// Server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// Mount element not present in the page.
    #[error("mount element '#{0}' not found")]
    MountMissing(String),

    /// A browser API call failed.
    #[error("browser api error: {0}")]
    Js(String),

    /// Configuration rejected.
    #[error("invalid config: {0}")]
    Config(String),
}

impl SiteNavError {
    /// Whether a later page load could succeed without a code or markup change.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SiteNavError::FetchFailed { .. } | SiteNavError::HttpStatus { .. }
        )
    }
}

impl From<nav_input::InputError> for SiteNavError {
    fn from(err: nav_input::InputError) -> Self {
        SiteNavError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SiteNavError {
    fn from(err: serde_json::Error) -> Self {
        SiteNavError::Config(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteNavError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteNavError::Js(format!("{:?}", value))
    }
}

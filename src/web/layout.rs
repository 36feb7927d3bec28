//! DOM side of the height signal.

use crate::error::SiteNavError;
use crate::layout::LayoutHost;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Measures the bar inside the mount and writes to `document.documentElement`.
pub struct DomLayoutHost {
    document: Document,
    mount_id: String,
    nav_selector: String,
}

impl DomLayoutHost {
    pub fn new(document: Document, mount_id: &str, nav_selector: &str) -> Self {
        Self {
            document,
            mount_id: mount_id.to_string(),
            nav_selector: nav_selector.to_string(),
        }
    }
}

impl LayoutHost for DomLayoutHost {
    fn measure_nav(&self) -> Option<f64> {
        let mount = self.document.get_element_by_id(&self.mount_id)?;
        let nav = mount.query_selector(&self.nav_selector).ok().flatten()?;
        Some(nav.get_bounding_client_rect().height())
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), SiteNavError> {
        let root: HtmlElement = self
            .document
            .document_element()
            .ok_or_else(|| SiteNavError::Js("no document element".into()))?
            .dyn_into()
            .map_err(|_| SiteNavError::Js("document element is not an HtmlElement".into()))?;
        root.style().set_property(name, value)?;
        Ok(())
    }
}

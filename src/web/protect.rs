//! Document listeners for the cosmetic copy protection.

use crate::config::ProtectConfig;
use crate::error::SiteNavError;
use crate::protect::{notice_for, BLOCKED_EVENTS};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

/// Block context menu, drag, selection and copy on the document.
pub fn install(config: &ProtectConfig) -> Result<(), SiteNavError> {
    let window = web_sys::window().ok_or_else(|| SiteNavError::Js("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| SiteNavError::Js("no document".into()))?;

    for blocked in BLOCKED_EVENTS {
        let notice = notice_for(config, &blocked).map(str::to_string);
        let window = window.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            if let Some(notice) = &notice {
                if let Err(e) = window.alert_with_message(notice) {
                    tracing::warn!(error = ?e, "copy notice failed");
                }
            }
        });
        document.add_event_listener_with_callback(
            blocked.event_type,
            callback.as_ref().unchecked_ref(),
        )?;
        // Page lifetime.
        callback.forget();
    }

    tracing::info!("copy protection installed");
    Ok(())
}

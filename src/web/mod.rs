//! Browser entry points and listener wiring.
//!
//! Architecture:
//! ```text
//! start() ──spawn_local──► load() ──fetch──► inject ──► publish ──► PageState
//!                                                                      ▲
//! document/window listeners (installed once) ──Closure──► STATE ───────┘
//! ```

mod dom;
mod layout;
mod loader;
mod protect;

use crate::config::{dataset_attribute, NavConfig, ProtectConfig};
use crate::error::SiteNavError;
use crate::fragment::{fragment_url, inject};
use crate::layout::LayoutPublisher;
use crate::wiring::{WiringGuard, COPY_PROTECTION};
use dom::PageState;
use layout::DomLayoutHost;
use loader::{fetch_fragment, ElementMount};
use nav_input::{Pathway, ViewportChange};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Event, KeyboardEvent, Window};

// WASM is single-threaded; page state lives for the page.
thread_local! {
    static STATE: RefCell<Option<PageState>> = RefCell::new(None);
    static GUARD: RefCell<WiringGuard> = RefCell::new(WiringGuard::new());
}

/// Module entry: logging, panic hook, then load with defaults plus the
/// mount element's `data-*` overrides.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    spawn_init(NavConfig::default());
}

/// (Re-)load the navigation with an explicit JSON config. Listeners are
/// never installed twice; the widget set is re-scanned.
#[wasm_bindgen]
pub fn init_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = NavConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    spawn_init(config);
    Ok(())
}

/// Install copy protection with the default notice.
#[wasm_bindgen]
pub fn install_copy_protection() -> Result<(), JsValue> {
    install_protection(&ProtectConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn spawn_init(config: NavConfig) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = load(config).await {
            tracing::error!(error = %e, recoverable = e.is_recoverable(), "Nav load error");
        }
    });
}

fn install_protection(config: &ProtectConfig) -> Result<(), SiteNavError> {
    if !GUARD.with(|g| g.borrow_mut().claim(COPY_PROTECTION)) {
        return Ok(());
    }
    protect::install(config)
}

async fn load(mut config: NavConfig) -> Result<(), SiteNavError> {
    let window = web_sys::window().ok_or_else(|| SiteNavError::Js("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| SiteNavError::Js("no document".into()))?;

    if let Some(mount) = document.get_element_by_id(&config.mount_id) {
        config.apply_dataset(|key| mount.get_attribute(&dataset_attribute(key)));
    }

    if config.protect.enabled {
        install_protection(&config.protect)?;
    }

    // Relative fetches resolve against the document base (`<base href>`).
    let base_uri = match document.base_uri()? {
        Some(uri) => uri,
        None => window.location().href()?,
    };
    let url = fragment_url(&base_uri, &config.base, &config.partial_path)?;
    let fetched = fetch_fragment(&url).await;

    let publisher = LayoutPublisher::new(config.height_property.clone(), config.fallback_height);
    let host = DomLayoutHost::new(document.clone(), &config.mount_id, &config.nav_selector);

    let mut mount = document.get_element_by_id(&config.mount_id).map(ElementMount);
    if let Err(e) = inject(mount.as_mut(), &config.mount_id, fetched) {
        // Mount untouched; consumers still get a height.
        if let Err(publish_err) = publisher.publish(&host) {
            tracing::warn!(error = %publish_err, "failed to publish fallback nav height");
        }
        return Err(e);
    }
    tracing::info!(url = %url, "navigation fragment injected");

    publisher.publish(&host)?;

    let mount_id = config.mount_id.clone();
    let state = PageState::scan(&document, config, publisher)?;
    STATE.with(|s| *s.borrow_mut() = Some(state));

    // Listeners sit on document/window, so one set serves every mount.
    if GUARD.with(|g| g.borrow_mut().claim_nav_listeners(&mount_id)) {
        install_listeners(&window, &document)?;
    }
    Ok(())
}

/// Run `f` against the page state, if loaded and not already borrowed.
fn with_state(f: impl FnOnce(&mut PageState)) {
    STATE.with(|s| match s.try_borrow_mut() {
        Ok(mut guard) => {
            if let Some(state) = guard.as_mut() {
                f(state);
            }
        }
        Err(_) => tracing::warn!("nav state busy, event dropped"),
    });
}

fn install_listeners(window: &Window, document: &Document) -> Result<(), SiteNavError> {
    // Capture phase, so dropdown handling runs before page handlers.
    let capture = AddEventListenerOptions::new();
    capture.set_capture(true);

    for pathway in Pathway::ACTIVATION {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            with_state(|state| state.on_activate(pathway, &event));
        });
        document.add_event_listener_with_callback_and_add_event_listener_options(
            pathway.event_type(),
            callback.as_ref().unchecked_ref(),
            &capture,
        )?;
        callback.forget();
    }

    let keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        with_state(|state| state.on_keydown(&event));
    });
    document.add_event_listener_with_callback(
        Pathway::Keyboard.event_type(),
        keydown.as_ref().unchecked_ref(),
    )?;
    keydown.forget();

    for change in [ViewportChange::Resize, ViewportChange::OrientationChange] {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            with_state(|state| state.on_viewport(change, &event));
        });
        window.add_event_listener_with_callback(
            change.event_type(),
            callback.as_ref().unchecked_ref(),
        )?;
        callback.forget();
    }

    tracing::debug!("navigation listeners installed");
    Ok(())
}

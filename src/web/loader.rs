//! Fragment fetch and injection.

use crate::error::SiteNavError;
use crate::fragment::FragmentMount;
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Request, RequestCache, RequestInit, Response};

/// Mount element wrapper.
pub struct ElementMount(pub Element);

impl FragmentMount for ElementMount {
    fn replace_markup(&mut self, html: &str) {
        self.0.set_inner_html(html);
    }
}

/// GET the fragment with the HTTP cache bypassed.
pub async fn fetch_fragment(url: &Url) -> Result<String, SiteNavError> {
    let failed = |e: wasm_bindgen::JsValue| SiteNavError::FetchFailed {
        url: url.to_string(),
        reason: format!("{:?}", e),
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);

    let request = Request::new_with_str_and_init(url.as_str(), &opts)?;

    let window = web_sys::window().ok_or_else(|| SiteNavError::Js("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(failed)?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| SiteNavError::Js("response is not a Response".into()))?;

    if !resp.ok() {
        return Err(SiteNavError::HttpStatus {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let text = JsFuture::from(resp.text()?).await.map_err(failed)?;
    text.as_string()
        .ok_or_else(|| SiteNavError::Js("response body is not text".into()))
}

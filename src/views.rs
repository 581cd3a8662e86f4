//! View counter client with a per-browser fallback.

use crate::constants::{VIEWS_ENDPOINT, VIEW_COUNT_ID};
use folio_core::views::{parse_views, CounterStore, LocalCounter};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

struct BrowserStorage(Option<web::Storage>);

impl CounterStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn store(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            _ = storage.set_item(key, value);
        }
    }
}

fn js_err(context: &str, e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{}: {:?}", context, e)
}

async fn request_views(method: &str) -> anyhow::Result<u64> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let init = web::RequestInit::new();
    init.set_method(method);
    let request = web::Request::new_with_str_and_init(VIEWS_ENDPOINT, &init)
        .map_err(|e| js_err("build request", e))?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_err("fetch", e))?
        .dyn_into()
        .map_err(|e| js_err("response", e))?;
    let text = JsFuture::from(response.text().map_err(|e| js_err("body", e))?)
        .await
        .map_err(|e| js_err("body", e))?;
    let body = text.as_string().unwrap_or_default();
    let views = parse_views(&body)?;
    Ok(views)
}

/// Records this page view and shows the count. Falls back to a counter in
/// `localStorage` if the service is unreachable or errors.
pub async fn record_and_show(document: web::Document) {
    let count = match request_views("POST").await {
        Ok(views) => {
            log::info!("[views] {} views", views);
            views
        }
        Err(e) => {
            log::error!("[views] service unavailable, using local count: {:?}", e);
            let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
            LocalCounter::new(BrowserStorage(storage)).bump()
        }
    };
    if let Some(el) = document.get_element_by_id(VIEW_COUNT_ID) {
        el.set_text_content(Some(&count.to_string()));
    }
}

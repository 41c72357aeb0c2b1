//! Thin wrappers over the browser APIs the board reads

use dioxus::prelude::*;

/// Non-empty query parameter from the current URL
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(name)
        .filter(|v| !v.is_empty())
}

/// Value from `localStorage`, if storage is reachable
pub fn local_item(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

/// Drop `?seed=...` from the address bar so a reload keeps the new seed
pub fn strip_query() {
    document::eval(
        "if (window.location.search) { history.replaceState(null, '', window.location.pathname); }",
    );
}

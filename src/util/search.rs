//! Search bar redirect.
//!
//! Pressing Enter in `.search-bar` navigates to the events listing filtered
//! by the trimmed term. Blank input does nothing.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::config::PageConfig;

pub const SEARCH_BAR_SELECTOR: &str = ".search-bar";
pub const SEARCH_PARAM: &str = "search";

/// Build the results URL for `raw`, or `None` when the trimmed term is empty.
#[must_use]
pub fn search_url(search_path: &str, raw: &str) -> Option<String> {
    let term = raw.trim();
    if term.is_empty() {
        return None;
    }
    Some(format!("{search_path}?{SEARCH_PARAM}={}", urlencoding::encode(term)))
}

/// Attach the Enter-key handler to the first `.search-bar` on the page.
pub fn bind(config: &PageConfig) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::{HtmlInputElement, KeyboardEvent};

        let Some(search_bar) = super::dom::query(SEARCH_BAR_SELECTOR) else {
            return;
        };
        let search_path = config.search_path.clone();
        let on_keypress = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.key() != "Enter" {
                return;
            }
            let Some(input) = event.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            if let Some(url) = search_url(&search_path, &input.value())
                && let Some(window) = super::dom::window()
            {
                let _ = window.location().set_href(&url);
            }
        });
        let _ = search_bar.add_event_listener_with_callback("keypress", on_keypress.as_ref().unchecked_ref());
        on_keypress.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

//! Page-load wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `run` is the single place that knows which behaviors exist. Each behavior
//! looks up its own elements and silently skips itself when the markup is
//! absent, so pages only carry the elements they need.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use crate::config::PageConfig;
use crate::net::notifications;
use crate::util::{dark_mode, messages, search};

/// Wire every page behavior using the configuration found on `<body>`.
pub fn run() {
    let config = PageConfig::load();
    log::debug!("wiring page behaviors: {config:?}");

    dark_mode::bind(&config);
    search::bind(&config);
    let scheduled = messages::bind(&config);
    log::debug!("scheduled {scheduled} message(s) for dismissal");
    notifications::start_poller(config);
}

/// Invoke `f` once the document has been parsed.
///
/// Runs immediately when the module loads after `DOMContentLoaded` already
/// fired (e.g. the script tag is `defer`red or injected late).
#[cfg(feature = "hydrate")]
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = crate::util::dom::document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
}

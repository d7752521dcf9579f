//! # events-client
//!
//! WASM page script for the events site. Every server-rendered page loads
//! this module; on start it waits for the DOM to finish parsing and then
//! wires the dark-mode toggle, the search bar, flash-message dismissal and
//! the notification badge poller. `validateForm` and the notification
//! helpers are exported for other page scripts.
//!
//! Browser-only code is gated behind the `hydrate` feature. Without it every
//! DOM-facing function compiles to a no-op so the pure logic can be tested on
//! the host target.

pub mod boot;
pub mod config;
pub mod net;
pub mod util;

/// WASM entry point: installs the panic hook and logger, then defers wiring
/// until the document is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    boot::on_dom_ready(boot::run);
}

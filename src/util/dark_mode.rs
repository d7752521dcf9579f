//! Dark mode restore and animated toggle.
//!
//! Reads the `darkMode` flag from `localStorage` and applies the `dark-mode`
//! class to `<body>`. A click on `#toggle-mode` spins the button, flips the
//! class halfway through the animation and writes the flag back. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! The flip reads the body class at timer time rather than a cached flag, so
//! two rapid clicks each flip once and the page ends where the user expects.
//! Storage writes are best-effort; private-mode quota errors are ignored.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::PageConfig;

pub const STORAGE_KEY: &str = "darkMode";
pub const ENABLED_VALUE: &str = "enabled";
pub const BODY_CLASS: &str = "dark-mode";
pub const ROTATING_CLASS: &str = "rotating";
pub const TOGGLE_ID: &str = "toggle-mode";
/// Glyph shown while dark mode is on (click to go light).
pub const SUN_ICON: &str = "☀️";
/// Glyph shown while dark mode is off.
pub const MOON_ICON: &str = "🌙";

/// What the persisted flag should become.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageAction {
    /// Store [`ENABLED_VALUE`] under [`STORAGE_KEY`].
    Enable,
    /// Remove [`STORAGE_KEY`].
    Clear,
}

/// Full UI state for one dark-mode setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DarkModeState {
    pub enabled: bool,
    pub icon: &'static str,
    pub storage: StorageAction,
}

impl DarkModeState {
    #[must_use]
    pub fn for_enabled(enabled: bool) -> Self {
        if enabled {
            Self { enabled, icon: SUN_ICON, storage: StorageAction::Enable }
        } else {
            Self { enabled, icon: MOON_ICON, storage: StorageAction::Clear }
        }
    }
}

/// State after one toggle from `current`.
#[must_use]
pub fn transition(current: bool) -> DarkModeState {
    DarkModeState::for_enabled(!current)
}

/// Interpret a raw stored value. Anything but `"enabled"` means light.
#[must_use]
pub fn is_enabled_value(stored: Option<&str>) -> bool {
    stored == Some(ENABLED_VALUE)
}

/// State to apply at page load for a stored value.
///
/// Light is the markup default, so only an enabled flag needs applying.
#[must_use]
pub fn restore_state(stored: Option<&str>) -> Option<DarkModeState> {
    is_enabled_value(stored).then(|| DarkModeState::for_enabled(true))
}

#[cfg(feature = "hydrate")]
fn stored_flag() -> Option<String> {
    super::dom::local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
}

/// Read the dark mode flag from localStorage.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        is_enabled_value(stored_flag().as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply `state` to `<body>` and the toggle icon, and persist the flag.
pub fn apply(state: DarkModeState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = super::dom::body() {
            let classes = body.class_list();
            let _ = if state.enabled { classes.add_1(BODY_CLASS) } else { classes.remove_1(BODY_CLASS) };
        }
        if let Some(toggle) = super::dom::element_by_id(TOGGLE_ID) {
            toggle.set_text_content(Some(state.icon));
        }
        if let Some(storage) = super::dom::local_storage() {
            let _ = match state.storage {
                StorageAction::Enable => storage.set_item(STORAGE_KEY, ENABLED_VALUE),
                StorageAction::Clear => storage.remove_item(STORAGE_KEY),
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}

/// Whether `<body>` currently carries the dark-mode class.
pub fn body_is_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        super::dom::body().is_some_and(|body| body.class_list().contains(BODY_CLASS))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Flip dark mode from `current`, apply and persist it. Returns the new flag.
pub fn toggle(current: bool) -> bool {
    let next = transition(current);
    apply(next);
    next.enabled
}

/// Restore the saved mode and attach the animated click handler.
pub fn bind(config: &PageConfig) {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        // Pages without the toggle still honor the saved theme.
        if let Some(state) = restore_state(stored_flag().as_deref()) {
            apply(state);
        }

        let Some(button) = super::dom::element_by_id(TOGGLE_ID) else {
            log::debug!("no #{TOGGLE_ID}; dark mode toggle disabled");
            return;
        };

        let flip_ms = config.toggle_flip_delay_ms;
        let settle_ms = config.toggle_settle_delay_ms;
        let spinning = button.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let _ = spinning.class_list().add_1(ROTATING_CLASS);
            Timeout::new(flip_ms, || {
                toggle(body_is_dark());
            })
            .forget();
            let settled = spinning.clone();
            Timeout::new(settle_ms, move || {
                let _ = settled.class_list().remove_1(ROTATING_CLASS);
            })
            .forget();
        });
        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

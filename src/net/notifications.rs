//! Notification badge and its background poller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The badge (`#notification-count`) is refreshed once at load and then on a
//! fixed interval for the lifetime of the page. A failed poll is logged and
//! the badge keeps whatever it showed before; the next tick tries again with
//! no backoff.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use super::api::{self, ApiError};
use crate::config::PageConfig;

pub const BADGE_ID: &str = "notification-count";
/// Counts above this render as [`BADGE_OVERFLOW_TEXT`].
pub const BADGE_CAP: u64 = 99;
pub const BADGE_OVERFLOW_TEXT: &str = "99+";

/// What the badge should look like for a given count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BadgeView {
    Hidden,
    Shown(String),
}

impl BadgeView {
    /// CSS `display` value for the badge.
    #[must_use]
    pub fn display(&self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Shown(_) => "flex",
        }
    }
}

#[must_use]
pub fn badge_view(count: u64) -> BadgeView {
    match count {
        0 => BadgeView::Hidden,
        n if n > BADGE_CAP => BadgeView::Shown(BADGE_OVERFLOW_TEXT.to_owned()),
        n => BadgeView::Shown(n.to_string()),
    }
}

/// Turn a poll result into the view to render.
///
/// Errors are logged and yield `None`: the badge is left untouched.
pub fn view_for_result(result: Result<u64, ApiError>) -> Option<BadgeView> {
    match result {
        Ok(count) => Some(badge_view(count)),
        Err(e) => {
            log::error!("Error loading notification count: {e}");
            None
        }
    }
}

/// Write `view` into the badge element. Hidden badges keep their old text.
pub fn render(view: &BadgeView) {
    #[cfg(feature = "hydrate")]
    {
        let Some(badge) = crate::util::dom::element_by_id(BADGE_ID) else {
            return;
        };
        if let BadgeView::Shown(text) = view {
            badge.set_text_content(Some(text.as_str()));
        }
        crate::util::dom::set_style(&badge, "display", view.display());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = view;
    }
}

fn badge_present() -> bool {
    #[cfg(feature = "hydrate")]
    {
        crate::util::dom::element_by_id(BADGE_ID).is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Fetch the count once and update the badge.
///
/// Pages without a badge skip the request entirely. Returns the view that
/// was rendered, if any.
pub async fn refresh(count_path: &str) -> Option<BadgeView> {
    if !badge_present() {
        return None;
    }
    let view = view_for_result(api::fetch_notification_count(count_path).await)?;
    render(&view);
    Some(view)
}

/// Poll immediately, then every `poll_interval_ms` until the page unloads.
pub fn start_poller(config: PageConfig) {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;

        let PageConfig { notification_count_path: path, poll_interval_ms, .. } = config;
        spawn_refresh(path.clone());
        Interval::new(poll_interval_ms, move || spawn_refresh(path.clone())).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

#[cfg(feature = "hydrate")]
fn spawn_refresh(path: String) {
    wasm_bindgen_futures::spawn_local(async move {
        refresh(&path).await;
    });
}

/// Functions other page scripts call, e.g. from a notification dropdown.
#[cfg(feature = "hydrate")]
mod exports {
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::wasm_bindgen;

    use super::{ApiError, api, refresh};
    use crate::config::PageConfig;

    fn to_js(e: ApiError) -> JsValue {
        log::error!("notification request failed: {e}");
        js_sys::Error::new(&e.to_string()).into()
    }

    #[wasm_bindgen(js_name = refreshNotificationCount)]
    pub async fn refresh_notification_count() {
        refresh(&PageConfig::load().notification_count_path).await;
    }

    #[wasm_bindgen(js_name = markNotificationRead)]
    pub async fn mark_notification_read(notification_id: u32) -> Result<(), JsValue> {
        let config = PageConfig::load();
        api::mark_notification_read(&config.notifications_path, notification_id)
            .await
            .map_err(to_js)?;
        refresh(&config.notification_count_path).await;
        Ok(())
    }

    /// Resolves to the number of notifications marked read.
    #[wasm_bindgen(js_name = markAllNotificationsRead)]
    pub async fn mark_all_notifications_read() -> Result<u32, JsValue> {
        let config = PageConfig::load();
        let marked = api::mark_all_notifications_read(&config.notifications_path)
            .await
            .map_err(to_js)?;
        refresh(&config.notification_count_path).await;
        Ok(u32::try_from(marked).unwrap_or(u32::MAX))
    }
}

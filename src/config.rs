//! Page timing and endpoint configuration.
//!
//! Every page uses the defaults unless `<body>` carries a
//! `data-page-config` attribute holding a JSON object. Omitted fields keep
//! their defaults, so a template can override a single delay.
//!
//! ```html
//! <body data-page-config='{"poll_interval_ms": 60000}'>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Attribute on `<body>` that may carry a JSON override.
pub const CONFIG_ATTRIBUTE: &str = "data-page-config";

/// Largest delay `setTimeout`/`setInterval` accept (`i32::MAX`).
pub const MAX_TIMER_DELAY_MS: u32 = 0x7FFF_FFFF;

pub const DEFAULT_TOGGLE_FLIP_DELAY_MS: u32 = 300;
pub const DEFAULT_TOGGLE_SETTLE_DELAY_MS: u32 = 600;
pub const DEFAULT_MESSAGE_VISIBLE_MS: u32 = 5_000;
pub const DEFAULT_MESSAGE_FADE_MS: u32 = 300;
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 30_000;
pub const DEFAULT_NOTIFICATION_COUNT_PATH: &str = "/core/notification-count/";
pub const DEFAULT_NOTIFICATIONS_PATH: &str = "/core/notifications/";
pub const DEFAULT_SEARCH_PATH: &str = "/events/";

/// Delays (milliseconds) and server paths used by the page behaviors.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Delay between the toggle click and the theme flip, matched to the
    /// rotation animation's midpoint.
    pub toggle_flip_delay_ms: u32,
    /// Delay after which the `rotating` class is removed again.
    pub toggle_settle_delay_ms: u32,
    pub message_visible_ms: u32,
    pub message_fade_ms: u32,
    pub poll_interval_ms: u32,
    pub notification_count_path: String,
    /// Prefix for the mark-read endpoints; must end with `/`.
    pub notifications_path: String,
    pub search_path: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toggle_flip_delay_ms: DEFAULT_TOGGLE_FLIP_DELAY_MS,
            toggle_settle_delay_ms: DEFAULT_TOGGLE_SETTLE_DELAY_MS,
            message_visible_ms: DEFAULT_MESSAGE_VISIBLE_MS,
            message_fade_ms: DEFAULT_MESSAGE_FADE_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            notification_count_path: DEFAULT_NOTIFICATION_COUNT_PATH.to_owned(),
            notifications_path: DEFAULT_NOTIFICATIONS_PATH.to_owned(),
            search_path: DEFAULT_SEARCH_PATH.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override, filling omitted fields from the defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(raw).map(Self::normalized)
    }

    /// Resolve the configuration from an optional attribute value.
    ///
    /// A malformed value is logged and ignored.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring malformed {CONFIG_ATTRIBUTE}: {e}");
                Self::default()
            }
        }
    }

    /// Read the configuration for the current page.
    #[must_use]
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = crate::util::dom::body().and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
            Self::from_attribute(raw.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Browser timers take a signed 32-bit delay; anything larger wraps
    /// negative and fires immediately. A zero poll interval would hammer the
    /// server with back-to-back requests; treat it as "use the default".
    fn normalized(mut self) -> Self {
        for delay in [
            &mut self.toggle_flip_delay_ms,
            &mut self.toggle_settle_delay_ms,
            &mut self.message_visible_ms,
            &mut self.message_fade_ms,
            &mut self.poll_interval_ms,
        ] {
            *delay = (*delay).min(MAX_TIMER_DELAY_MS);
        }
        if self.poll_interval_ms == 0 {
            self.poll_interval_ms = DEFAULT_POLL_INTERVAL_MS;
        }
        self
    }
}

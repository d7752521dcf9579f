//! Flash message auto-dismiss.
//!
//! Every `.message` present when the page loads fades to transparent after
//! a visible period and is then removed. Messages inserted later are left
//! alone.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::config::PageConfig;

pub const MESSAGE_SELECTOR: &str = ".message";

/// Timing for one message, both offsets measured from page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissSchedule {
    pub fade_at_ms: u32,
    pub remove_at_ms: u32,
}

impl DismissSchedule {
    #[must_use]
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            fade_at_ms: config.message_visible_ms,
            remove_at_ms: config.message_visible_ms.saturating_add(config.message_fade_ms),
        }
    }

    /// Delay between starting the fade and removing the node.
    #[must_use]
    pub fn fade_duration_ms(&self) -> u32 {
        self.remove_at_ms - self.fade_at_ms
    }
}

/// Schedule fade-out and removal for every message on the page.
///
/// Returns how many messages were scheduled.
pub fn bind(config: &PageConfig) -> usize {
    let schedule = DismissSchedule::from_config(config);
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        let messages = super::dom::query_all(MESSAGE_SELECTOR);
        let count = messages.len();
        for message in messages {
            let fade_ms = schedule.fade_duration_ms();
            Timeout::new(schedule.fade_at_ms, move || {
                super::dom::set_style(&message, "opacity", "0");
                Timeout::new(fade_ms, move || message.remove()).forget();
            })
            .forget();
        }
        count
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = schedule;
        0
    }
}

//! JSON bodies returned by the site's notification endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Body of `GET /core/notification-count/`.
///
/// A missing or `null` count is read as zero, as is a negative one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NotificationCount {
    #[serde(default)]
    pub count: Option<i64>,
}

impl NotificationCount {
    #[must_use]
    pub fn unread(&self) -> u64 {
        self.count.and_then(|c| u64::try_from(c).ok()).unwrap_or(0)
    }
}

/// Body of the mark-read endpoints when called with `X-Requested-With`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MarkReadResponse {
    #[serde(default)]
    pub success: bool,
    /// Only present on mark-all-read.
    #[serde(default)]
    pub marked_count: Option<u64>,
}

use super::*;

#[test]
fn defaults_match_page_constants() {
    let config = PageConfig::default();
    assert_eq!(config.toggle_flip_delay_ms, 300);
    assert_eq!(config.toggle_settle_delay_ms, 600);
    assert_eq!(config.message_visible_ms, 5_000);
    assert_eq!(config.message_fade_ms, 300);
    assert_eq!(config.poll_interval_ms, 30_000);
    assert_eq!(config.notification_count_path, "/core/notification-count/");
    assert_eq!(config.search_path, "/events/");
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config = PageConfig::from_json(r#"{"poll_interval_ms": 60000}"#).expect("valid config");
    assert_eq!(config.poll_interval_ms, 60_000);
    assert_eq!(config.message_visible_ms, DEFAULT_MESSAGE_VISIBLE_MS);
    assert_eq!(config.search_path, DEFAULT_SEARCH_PATH);
}

#[test]
fn zero_poll_interval_falls_back_to_default() {
    let config = PageConfig::from_json(r#"{"poll_interval_ms": 0}"#).expect("valid config");
    assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
}

#[test]
fn oversized_delays_are_clamped_to_the_timer_limit() {
    let raw = r#"{"poll_interval_ms": 4294967295, "message_visible_ms": 2147483648, "toggle_flip_delay_ms": 3000000000}"#;
    let config = PageConfig::from_json(raw).expect("valid config");
    assert_eq!(config.poll_interval_ms, MAX_TIMER_DELAY_MS);
    assert_eq!(config.message_visible_ms, MAX_TIMER_DELAY_MS);
    assert_eq!(config.toggle_flip_delay_ms, MAX_TIMER_DELAY_MS);
    assert_eq!(config.toggle_settle_delay_ms, DEFAULT_TOGGLE_SETTLE_DELAY_MS);
    assert_eq!(MAX_TIMER_DELAY_MS, u32::try_from(i32::MAX).expect("fits"));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(PageConfig::from_json("{not json").is_err());
    assert!(PageConfig::from_json("42").is_err());
    assert!(PageConfig::from_json(r#"{"message_fade_ms": "slow"}"#).is_err());
}

#[test]
fn from_attribute_ignores_missing_blank_and_malformed_values() {
    assert_eq!(PageConfig::from_attribute(None), PageConfig::default());
    assert_eq!(PageConfig::from_attribute(Some("   ")), PageConfig::default());
    assert_eq!(PageConfig::from_attribute(Some("{broken")), PageConfig::default());
}

#[test]
fn from_attribute_applies_overrides() {
    let config = PageConfig::from_attribute(Some(r#" {"search_path": "/search/"} "#));
    assert_eq!(config.search_path, "/search/");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_uses_defaults_outside_the_browser() {
    assert_eq!(PageConfig::load(), PageConfig::default());
}

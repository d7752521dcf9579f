use super::*;

#[test]
fn default_schedule_removes_messages_within_five_point_three_seconds() {
    let schedule = DismissSchedule::from_config(&PageConfig::default());
    assert_eq!(schedule.fade_at_ms, 5_000);
    assert_eq!(schedule.remove_at_ms, 5_300);
    assert_eq!(schedule.fade_duration_ms(), 300);
}

#[test]
fn removal_never_precedes_fade() {
    let config = PageConfig { message_visible_ms: u32::MAX, message_fade_ms: 300, ..PageConfig::default() };
    let schedule = DismissSchedule::from_config(&config);
    assert_eq!(schedule.remove_at_ms, u32::MAX);
    assert!(schedule.remove_at_ms >= schedule.fade_at_ms);
}

#[test]
fn zero_fade_removes_immediately_after_visible_period() {
    let config = PageConfig { message_fade_ms: 0, ..PageConfig::default() };
    let schedule = DismissSchedule::from_config(&config);
    assert_eq!(schedule.fade_duration_ms(), 0);
    assert_eq!(schedule.remove_at_ms, schedule.fade_at_ms);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn bind_schedules_nothing_outside_the_browser() {
    assert_eq!(bind(&PageConfig::default()), 0);
}

use super::*;

fn count(raw: &str) -> NotificationCount {
    serde_json::from_str(raw).expect("count body should parse")
}

#[test]
fn count_is_read_from_body() {
    assert_eq!(count(r#"{"count": 150}"#).unread(), 150);
    assert_eq!(count(r#"{"count": 0}"#).unread(), 0);
}

#[test]
fn missing_null_or_negative_count_is_zero() {
    assert_eq!(count("{}").unread(), 0);
    assert_eq!(count(r#"{"count": null}"#).unread(), 0);
    assert_eq!(count(r#"{"count": -3}"#).unread(), 0);
}

#[test]
fn non_integer_count_is_rejected() {
    assert!(serde_json::from_str::<NotificationCount>(r#"{"count": "five"}"#).is_err());
}

#[test]
fn mark_all_read_response_carries_marked_count() {
    let body: MarkReadResponse =
        serde_json::from_str(r#"{"success": true, "marked_count": 4}"#).expect("valid body");
    assert!(body.success);
    assert_eq!(body.marked_count, Some(4));
}

#[test]
fn mark_read_response_without_count() {
    let body: MarkReadResponse = serde_json::from_str(r#"{"success": true}"#).expect("valid body");
    assert_eq!(body, MarkReadResponse { success: true, marked_count: None });
}

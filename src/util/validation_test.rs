use super::*;

#[test]
fn blank_and_whitespace_values_are_invalid() {
    assert_eq!(verdict(""), FieldVerdict::Invalid);
    assert_eq!(verdict("  \t "), FieldVerdict::Invalid);
    assert_eq!(verdict(" ada "), FieldVerdict::Valid);
}

#[test]
fn one_empty_field_fails_and_only_it_is_marked() {
    let report = validate_values(["ada@example.com", "   ", "hunter2"]);
    assert!(!report.is_valid());
    assert_eq!(report.invalid_fields(), vec![1]);
    assert_eq!(report.verdicts[1].border_color(), INVALID_BORDER_COLOR);
}

#[test]
fn fully_populated_form_passes_with_no_invalid_marks() {
    let report = validate_values(["ada", "lovelace"]);
    assert!(report.is_valid());
    assert!(report.invalid_fields().is_empty());
    assert!(report.verdicts.iter().all(|v| v.border_color() == VALID_BORDER_COLOR));
}

#[test]
fn form_without_required_fields_is_valid() {
    assert!(validate_values(std::iter::empty()).is_valid());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn missing_form_validates_outside_the_browser() {
    assert!(validate_form("login-form"));
}

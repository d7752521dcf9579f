use super::*;
use crate::config::DEFAULT_SEARCH_PATH;

#[test]
fn trims_and_percent_encodes_the_term() {
    assert_eq!(
        search_url(DEFAULT_SEARCH_PATH, "  jazz night  ").as_deref(),
        Some("/events/?search=jazz%20night")
    );
}

#[test]
fn blank_input_does_not_navigate() {
    assert_eq!(search_url(DEFAULT_SEARCH_PATH, ""), None);
    assert_eq!(search_url(DEFAULT_SEARCH_PATH, "   \t\n"), None);
}

#[test]
fn reserved_characters_cannot_break_out_of_the_parameter() {
    let url = search_url(DEFAULT_SEARCH_PATH, "rock&roll=#1?").expect("non-empty term");
    assert_eq!(url, "/events/?search=rock%26roll%3D%231%3F");
}

#[test]
fn non_ascii_terms_are_utf8_encoded() {
    assert_eq!(
        search_url(DEFAULT_SEARCH_PATH, "café").as_deref(),
        Some("/events/?search=caf%C3%A9")
    );
}

#[test]
fn custom_search_path_is_used() {
    assert_eq!(search_url("/search/", "x").as_deref(), Some("/search/?search=x"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn bind_is_noop_but_callable() {
    bind(&PageConfig::default());
}

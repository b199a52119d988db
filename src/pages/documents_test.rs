use super::*;

#[test]
fn server_errors_pass_through_unchanged() {
    assert_eq!(friendly_error("Server error: 502"), "Server error: 502");
}

#[test]
fn fetch_failures_become_a_network_message() {
    let message = friendly_error("NetworkError when attempting to fetch resource");
    assert!(message.starts_with("Network error:"));
}

#[test]
fn other_failures_become_the_generic_message() {
    let message = friendly_error("request construction failed");
    assert!(message.contains("temporarily unavailable"));
}

#[test]
fn text_field_trims_and_drops_empty_values() {
    let value = serde_json::json!({ "summary": "  ok  ", "empty": "   " });
    assert_eq!(text_field(&value, "summary").as_deref(), Some("ok"));
    assert_eq!(text_field(&value, "empty"), None);
    assert_eq!(text_field(&value, "missing"), None);
}

#[test]
fn list_field_keeps_only_strings() {
    let value = serde_json::json!({ "differences": ["a", 2, "b", null] });
    assert_eq!(list_field(&value, "differences"), ["a", "b"]);
    assert!(list_field(&value, "missing").is_empty());
}

#[test]
fn structured_detection_requires_a_known_section() {
    assert!(is_structured(&serde_json::json!({ "summary": "text" })));
    assert!(is_structured(&serde_json::json!({ "similarities": ["x"] })));
    assert!(!is_structured(&serde_json::json!({ "message": "opaque" })));
    assert!(!is_structured(&serde_json::json!({ "differences": [] })));
}

#[test]
fn risk_lines_skip_blank_and_summary_lines() {
    let message = "Missing indemnity clause\n\nUnlimited liability\nSummary of Risk Level: High";
    assert_eq!(risk_lines(message), ["Missing indemnity clause", "Unlimited liability"]);
}

#[test]
fn risk_level_summary_extracts_the_trailing_label() {
    let message = "Missing clause\nSummary of Risk Level: Medium";
    assert_eq!(risk_level_summary(message).as_deref(), Some("Medium"));
    assert_eq!(risk_level_summary("no summary here"), None);
    assert_eq!(risk_level_summary("Summary of Risk Level:   "), None);
}

#[test]
fn risk_badges_match_level_keywords_case_insensitively() {
    assert_eq!(risk_badge_class("HIGH risk"), "risk-badge--high");
    assert_eq!(risk_badge_class("Medium"), "risk-badge--medium");
    assert_eq!(risk_badge_class("low"), "risk-badge--low");
    assert_eq!(risk_badge_class("unclear"), "risk-badge--unknown");
}

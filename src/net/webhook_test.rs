use super::*;

#[test]
fn json_bodies_pass_through_verbatim() {
    let value = interpret_body("{\"summary\":\"ok\",\"differences\":[]}");
    assert_eq!(value["summary"], "ok");
    assert!(value["differences"].as_array().unwrap().is_empty());
}

#[test]
fn json_scalars_are_still_json() {
    assert_eq!(interpret_body("42"), serde_json::json!(42));
    assert_eq!(interpret_body("\"quoted\""), serde_json::json!("quoted"));
}

#[test]
fn plain_text_is_wrapped_as_a_message() {
    let value = interpret_body("Flagged Risks: none\nSummary of Risk Level: Low");
    assert_eq!(
        value,
        serde_json::json!({ "message": "Flagged Risks: none\nSummary of Risk Level: Low" })
    );
}

#[test]
fn empty_body_is_wrapped_not_an_error() {
    assert_eq!(interpret_body(""), serde_json::json!({ "message": "" }));
}

#[test]
fn server_errors_render_the_status() {
    assert_eq!(server_error_message(502), "Server error: 502");
}

#[test]
fn webhook_urls_are_the_fixed_endpoints() {
    assert!(COMPARISON_WEBHOOK_URL.starts_with("https://"));
    assert!(RISK_WEBHOOK_URL.starts_with("https://"));
    assert_ne!(COMPARISON_WEBHOOK_URL, RISK_WEBHOOK_URL);
}

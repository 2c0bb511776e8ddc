use chat_relay::utils::{REPLY_FIELDS, extract_region_from_arn, extract_reply, stringify, upstream_error};
use serde_json::json;

const FALLBACK: &str = "us-east-1";

#[test]
fn test_region_from_function_arn() {
    let arn = "arn:aws:lambda:ap-northeast-1:123456789012:function:chat-relay";
    assert_eq!(extract_region_from_arn(arn, FALLBACK), "ap-northeast-1");
}

#[test]
fn test_region_from_qualified_arn() {
    let arn = "arn:aws:lambda:eu-central-1:123456789012:function:chat-relay:live";
    assert_eq!(extract_region_from_arn(arn, FALLBACK), "eu-central-1");
}

#[test]
fn test_region_fallbacks() {
    for arn in [
        "",
        "not-an-arn",
        "arn:aws:s3:::bucket",
        "arn:aws:lambda:",
        "arn:aws:lambda::123456789012:function:x",
        "arn:aws:lambda:us-west-2",
    ] {
        assert_eq!(extract_region_from_arn(arn, FALLBACK), FALLBACK, "arn {arn:?}");
    }
}

#[test]
fn test_each_reply_field_is_found() {
    for key in REPLY_FIELDS {
        assert_eq!(extract_reply(&json!({ key: "X", "other": 1 })), "X", "key {key}");
    }
}

#[test]
fn test_reply_field_order() {
    let response = json!({"text": "4", "content": "3", "message": "2", "response": "1"});
    assert_eq!(extract_reply(&response), "1");

    let response = json!({"text": "4", "content": "3"});
    assert_eq!(extract_reply(&response), "3");
}

#[test]
fn test_reply_fallback_is_whole_response() {
    let response = json!({"output": {"answer": "X"}});
    assert_eq!(extract_reply(&response), r#"{"output":{"answer":"X"}}"#);
}

#[test]
fn test_non_object_replies() {
    assert_eq!(extract_reply(&json!("plain")), "plain");
    assert_eq!(extract_reply(&json!(42)), "42");
    assert_eq!(extract_reply(&json!(["a", "b"])), r#"["a","b"]"#);
}

#[test]
fn test_non_string_reply_field_is_stringified() {
    assert_eq!(extract_reply(&json!({"response": {"parts": [1]}})), r#"{"parts":[1]}"#);
    assert_eq!(extract_reply(&json!({"message": null})), "null");
}

#[test]
fn test_stringify() {
    assert_eq!(stringify(&json!("a \"quoted\" word")), "a \"quoted\" word");
    assert_eq!(stringify(&json!(true)), "true");
}

#[test]
fn test_upstream_error_detection() {
    assert_eq!(upstream_error(&json!({"error": "boom"})), Some("boom".to_string()));
    assert_eq!(
        upstream_error(&json!({"error": {"code": 429}})),
        Some(r#"{"code":429}"#.to_string())
    );
    assert_eq!(upstream_error(&json!({"response": "fine"})), None);
    assert_eq!(upstream_error(&json!("an error happened")), None);
}

//! Pure helpers used by the handler.

use serde_json::Value;

const LAMBDA_ARN_PREFIX: &str = "arn:aws:lambda:";

/// Response fields probed for the assistant's reply, highest priority first.
pub const REPLY_FIELDS: [&str; 4] = ["response", "message", "content", "text"];

/// Extracts the region from a Lambda function ARN.
///
/// Format: `arn:aws:lambda:<region>:<account>:function:<name>` → `<region>`
///
/// Returns `fallback` when the prefix is missing or the region segment is
/// empty or unterminated.
#[must_use]
pub fn extract_region_from_arn(arn: &str, fallback: &str) -> String {
    arn.split_once(LAMBDA_ARN_PREFIX)
        .and_then(|(_, rest)| rest.split_once(':'))
        .map(|(region, _)| region)
        .filter(|region| !region.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Text form of a JSON value: strings verbatim, everything else as JSON.
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Best-effort extraction of the assistant's reply from a downstream response.
///
/// For an object, the first of [`REPLY_FIELDS`] present wins; with none
/// present the whole object is stringified. Any other value is stringified.
#[must_use]
pub fn extract_reply(response: &Value) -> String {
    response
        .as_object()
        .and_then(|fields| REPLY_FIELDS.iter().find_map(|key| fields.get(*key)))
        .map_or_else(|| stringify(response), stringify)
}

/// Error text of a downstream response carrying an `error` key.
#[must_use]
pub fn upstream_error(response: &Value) -> Option<String> {
    response
        .as_object()
        .and_then(|fields| fields.get("error"))
        .map(stringify)
}

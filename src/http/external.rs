use lambda_runtime::tracing::{debug, info, warn};
use serde_json::{Map, Value, json};

use super::{HttpClient, Method, OutboundRequest};
use crate::utils::stringify;

const DEFAULT_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

fn outbound_headers(headers: Option<&Map<String, Value>>) -> Vec<(String, String)> {
    match headers {
        Some(headers) if !headers.is_empty() => headers
            .iter()
            .map(|(name, value)| (name.clone(), stringify(value)))
            .collect(),
        _ => vec![(
            DEFAULT_CONTENT_TYPE.0.to_string(),
            DEFAULT_CONTENT_TYPE.1.to_string(),
        )],
    }
}

/// Performs exactly one request to `url` and returns the parsed JSON response.
///
/// The call is a `POST` carrying `payload` as JSON when a payload is given,
/// a `GET` otherwise. Without custom headers, `Content-Type: application/json`
/// is sent.
///
/// This function never fails: a send error, an error status, an undecodable
/// body or non-JSON content all come back as `{"error": "<description>"}`.
pub async fn call_external_api(
    client: &dyn HttpClient,
    url: &str,
    payload: Option<&Value>,
    headers: Option<&Map<String, Value>>,
) -> Value {
    let body = match payload.map(serde_json::to_string).transpose() {
        Ok(body) => body,
        Err(e) => return error_value(&anyhow::Error::from(e)),
    };

    let request = OutboundRequest {
        method: if body.is_some() { Method::Post } else { Method::Get },
        url: url.to_string(),
        headers: outbound_headers(headers),
        body,
    };

    info!(url = %url, method = ?request.method, "Calling external API");

    let text = match client.send(request).await {
        Ok(text) => text,
        Err(e) => return error_value(&anyhow::Error::from_boxed(e)),
    };

    debug!(response_size = text.len(), "Received external API response");

    serde_json::from_str(&text).unwrap_or_else(|e| error_value(&anyhow::Error::from(e)))
}

fn error_value(error: &anyhow::Error) -> Value {
    // Use {:#} to get the full error chain with causes
    let description = format!("{error:#}");
    warn!(error = %description, "External API call failed");
    json!({ "error": description })
}

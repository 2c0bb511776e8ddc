use lambda_runtime::tracing::{debug, error, info};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Map, Value};

use crate::config::RelayConfig;
use crate::http::{HttpClient, call_external_api};
use crate::models::{
    API_URL_FIELD, ConversationMessage, Envelope, ProxyEvent, RelayError, RelayReply,
    RelayRequest,
};
use crate::utils::{extract_region_from_arn, extract_reply, upstream_error};

/// Parses the request body, rejecting anything that is not a JSON relay request.
///
/// # Errors
///
/// Returns `RelayError::MalformedRequest` if the body is absent, not JSON, or
/// lacks `message`.
pub fn parse_request(body: Option<&str>) -> Result<RelayRequest, RelayError> {
    let body =
        body.ok_or_else(|| RelayError::MalformedRequest("request body is missing".to_string()))?;

    let value: Value = serde_json::from_str(body).map_err(|e| {
        RelayError::MalformedRequest(format!("request body is not valid JSON: {e}"))
    })?;

    Ok(serde_json::from_value(value)?)
}

/// Builds the outbound payload: `apiData` with `messages` and `user_info` set on top.
///
/// Outbound `messages` carry only `role` and `content`.
///
/// # Errors
///
/// Returns `RelayError::MalformedRequest` if `apiData` is neither absent,
/// null, nor a JSON object.
pub fn build_payload(
    api_data: Option<Value>,
    messages: &[ConversationMessage],
    claims: Option<&Map<String, Value>>,
) -> Result<Map<String, Value>, RelayError> {
    let mut payload = match api_data {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(fields)) => fields,
        Some(_) => {
            return Err(RelayError::MalformedRequest(
                "apiData must be a JSON object".to_string(),
            ));
        }
    };

    let outbound: Vec<_> = messages.iter().map(ConversationMessage::outbound).collect();
    let messages = serde_json::to_value(outbound)
        .map_err(|e| RelayError::UnexpectedFailure(e.to_string()))?;
    payload.insert("messages".to_string(), messages);
    payload.insert(
        "user_info".to_string(),
        claims.map_or(Value::Null, |claims| Value::Object(claims.clone())),
    );

    Ok(payload)
}

/// Forwards one chat turn downstream and returns the extended conversation.
///
/// # Errors
///
/// - `MalformedRequest`: body missing, not JSON, or missing `message`
/// - `MissingConfiguration`: no `apiUrl` in the body
/// - `UpstreamError`: the downstream call failed or returned an `error` key
pub async fn relay(
    client: &dyn HttpClient,
    body: Option<&str>,
    claims: Option<&Map<String, Value>>,
) -> Result<RelayReply, RelayError> {
    let request = parse_request(body)?;

    let url = request
        .target_url()
        .ok_or(RelayError::MissingConfiguration(API_URL_FIELD))?
        .to_string();

    let mut messages = request.conversation_history.unwrap_or_default();
    messages.push(ConversationMessage::user(request.message));

    let payload = Value::Object(build_payload(request.api_data, &messages, claims)?);

    let response =
        call_external_api(client, &url, Some(&payload), request.api_headers.as_ref()).await;

    if let Some(message) = upstream_error(&response) {
        return Err(RelayError::UpstreamError(message));
    }

    let reply = extract_reply(&response);
    messages.push(ConversationMessage::assistant(reply.clone()));

    Ok(RelayReply {
        response: reply,
        conversation_history: messages,
    })
}

fn log_user(claims: Option<&Map<String, Value>>) {
    let user = claims.and_then(|claims| {
        claims
            .get("email")
            .or_else(|| claims.get("cognito:username"))
            .and_then(Value::as_str)
    });

    match user {
        Some(user) => info!(user = %user, "Authenticated user"),
        None if claims.is_some() => info!("Authenticated user without email or username claim"),
        None => debug!("No authorizer claims, anonymous request"),
    }
}

/// Lambda event handler. Relays the chat message and always answers with an
/// envelope: status 200 on success, status 500 with the error text otherwise.
/// Logs the full event when `RUST_LOG=debug/trace`, only `event_size` in production.
///
/// # Errors
///
/// Never returns an error; the `Result` matches what `lambda_runtime` expects.
pub async fn function_handler(
    client: &dyn HttpClient,
    config: &RelayConfig,
    event: LambdaEvent<Value>,
) -> Result<Envelope, Error> {
    let (event_payload, context) = event.into_parts();

    let region = extract_region_from_arn(&context.invoked_function_arn, &config.fallback_region);
    info!(region = %region, "Lambda executing in region");

    info!(event_size = event_payload.to_string().len(), "Received event");
    debug!(event = %event_payload, "Received event payload");

    let result = match serde_json::from_value::<ProxyEvent>(event_payload) {
        Ok(event) if event.is_preflight() => {
            debug!("Answering CORS preflight");
            return Ok(Envelope::preflight());
        }
        Ok(event) => {
            let claims = event.claims();
            log_user(claims);
            relay(client, event.body.as_deref(), claims)
                .await
                .and_then(|reply| Envelope::success(&reply))
        }
        Err(e) => Err(RelayError::MalformedRequest(format!(
            "unrecognised event shape: {e}"
        ))),
    };

    Ok(result.unwrap_or_else(|e| {
        error!(error_type = e.error_type(), error = %e, "Relay failed");
        Envelope::failure(&e)
    }))
}

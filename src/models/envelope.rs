//! Outgoing API Gateway proxy response.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::RelayError;
use super::message::ConversationMessage;

const CORS_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
    ),
    ("Access-Control-Allow-Methods", "OPTIONS,POST"),
];

/// Returned when even the failure body cannot be encoded.
const FALLBACK_FAILURE_BODY: &str = r#"{"success":false,"error":"Unexpected failure"}"#;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Result of a successful relay.
#[derive(Debug, Clone)]
pub struct RelayReply {
    pub response: String,
    pub conversation_history: Vec<ConversationMessage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuccessBody<'a> {
    success: bool,
    response: &'a str,
    conversation_history: &'a [ConversationMessage],
}

#[derive(Serialize)]
struct FailureBody {
    success: bool,
    error: String,
}

fn cors_headers() -> HashMap<String, String> {
    CORS_HEADERS
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

impl Envelope {
    /// Builds the status-200 envelope for a relayed reply.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::UnexpectedFailure` if the body cannot be encoded.
    pub fn success(reply: &RelayReply) -> Result<Self, RelayError> {
        let body = serde_json::to_string(&SuccessBody {
            success: true,
            response: &reply.response,
            conversation_history: &reply.conversation_history,
        })
        .map_err(|e| RelayError::UnexpectedFailure(e.to_string()))?;

        Ok(Self {
            status_code: 200,
            headers: cors_headers(),
            body,
        })
    }

    #[must_use]
    pub fn failure(error: &RelayError) -> Self {
        let body = serde_json::to_string(&FailureBody {
            success: false,
            error: error.to_string(),
        })
        .unwrap_or_else(|_| FALLBACK_FAILURE_BODY.to_string());

        Self {
            status_code: 500,
            headers: cors_headers(),
            body,
        }
    }

    /// Answer to a CORS preflight request.
    #[must_use]
    pub fn preflight() -> Self {
        Self {
            status_code: 200,
            headers: cors_headers(),
            body: "{}".to_string(),
        }
    }
}

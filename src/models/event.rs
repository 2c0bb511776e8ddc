//! Inbound API Gateway proxy event and the relay request carried in its body.
//!
//! Only the fields the relay reads are modelled; everything else in the
//! event is ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::message::ConversationMessage;

/// Name of the body field holding the downstream URL.
pub const API_URL_FIELD: &str = "apiUrl";

/// API Gateway proxy event (REST `httpMethod` or HTTP API `requestContext.http`).
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpDescription>,
    #[serde(default)]
    pub authorizer: Option<Authorizer>,
}

#[derive(Deserialize, Debug, Default)]
pub struct HttpDescription {
    #[serde(default)]
    pub method: Option<String>,
}

/// Output of an upstream authorizer. Claims are passed through untouched.
#[derive(Deserialize, Debug, Default)]
pub struct Authorizer {
    #[serde(default)]
    pub claims: Option<Map<String, Value>>,
}

impl ProxyEvent {
    /// Request method, whichever API Gateway flavour sent the event.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.http_method.as_deref().or_else(|| {
            self.request_context
                .as_ref()
                .and_then(|ctx| ctx.http.as_ref())
                .and_then(|http| http.method.as_deref())
        })
    }

    #[must_use]
    pub fn is_preflight(&self) -> bool {
        self.method()
            .is_some_and(|method| method.eq_ignore_ascii_case("OPTIONS"))
    }

    /// Claims set by an authorizer, if one ran.
    #[must_use]
    pub fn claims(&self) -> Option<&Map<String, Value>> {
        self.request_context
            .as_ref()
            .and_then(|ctx| ctx.authorizer.as_ref())
            .and_then(|authorizer| authorizer.claims.as_ref())
    }
}

/// Decoded request body.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Option<Vec<ConversationMessage>>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_data: Option<Value>,
    #[serde(default)]
    pub api_headers: Option<Map<String, Value>>,
}

impl RelayRequest {
    /// Target URL, treating an empty string the same as an absent one.
    #[must_use]
    pub fn target_url(&self) -> Option<&str> {
        self.api_url.as_deref().filter(|url| !url.is_empty())
    }
}

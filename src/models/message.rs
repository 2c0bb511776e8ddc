use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

/// One turn of a conversation.
///
/// `content` is kept as raw JSON so multi-part content survives, and any other
/// keys a caller attaches to a history entry ride along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: String,
    pub content: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Role/content view of a message, as sent downstream.
#[derive(Debug, Serialize)]
pub struct OutboundMessage<'a> {
    pub role: &'a str,
    pub content: &'a Value,
}

impl ConversationMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ROLE_USER, content.into())
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ROLE_ASSISTANT, content.into())
    }

    fn new(role: &str, content: String) -> Self {
        Self {
            role: role.to_string(),
            content: Value::String(content),
            extra: Map::new(),
        }
    }

    /// Drops caller-specific keys, keeping only what the downstream needs.
    #[must_use]
    pub fn outbound(&self) -> OutboundMessage<'_> {
        OutboundMessage {
            role: &self.role,
            content: &self.content,
        }
    }
}

//! Error taxonomy for a single relay invocation.
//!
//! Every variant ends up in the same place: a status-500 envelope whose
//! `error` field is the `Display` text of the error.

use thiserror::Error;

/// Failure of one relay invocation.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request body is absent, not JSON, or lacks required fields.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    /// The request does not say where to forward the message.
    #[error("API URL is required: set `{0}` in the request body")]
    MissingConfiguration(&'static str),
    /// The downstream call failed or answered with an error marker.
    #[error("External API error: {0}")]
    UpstreamError(String),
    /// Anything else, e.g. the success envelope could not be encoded.
    #[error("Unexpected failure: {0}")]
    UnexpectedFailure(String),
}

impl RelayError {
    /// Stable name of the error kind, used as a structured log field.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::MalformedRequest(_) => "MalformedRequest",
            Self::MissingConfiguration(_) => "MissingConfiguration",
            Self::UpstreamError(_) => "UpstreamError",
            Self::UnexpectedFailure(_) => "UnexpectedFailure",
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedRequest(error.to_string())
    }
}

mod client;
mod external;

pub use client::ReqwestClient;
pub use external::call_external_api;

use async_trait::async_trait;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP method of an outbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully prepared outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Trait for HTTP client operations to enable testing with mocks.
///
/// This trait abstracts the single outbound round-trip so the handler can be
/// exercised without touching the network.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends the request and returns the response body as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the server answers with
    /// a non-success status, or the body is not valid UTF-8.
    async fn send(&self, request: OutboundRequest) -> Result<String, BoxError>;
}

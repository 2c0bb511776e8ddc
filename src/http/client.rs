use async_trait::async_trait;
use reqwest::Client;

use super::{BoxError, HttpClient, Method, OutboundRequest};
use crate::config::RelayConfig;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Production HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client once per cold start from the runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn from_config(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?))
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: OutboundRequest) -> Result<String, BoxError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

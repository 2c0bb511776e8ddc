use anyhow::Context as _;
use chat_relay::config::RelayConfig;
use chat_relay::handler::function_handler;
use chat_relay::http::ReqwestClient;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_runtime::tracing::init_default_subscriber();

    let config = RelayConfig::from_env().context("invalid relay configuration")?;
    let client = ReqwestClient::from_config(&config).context("failed to build HTTP client")?;

    let config = &config;
    let client = &client;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(client, config, event).await
    }))
    .await
}

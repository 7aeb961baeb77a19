use aws_sdk_dynamodb::Client;
use get_images::{config::Config, handler, response::Response};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn invoke(
    event: LambdaEvent<Value>,
    client: &Client,
    config: &Config,
) -> Result<Response, Error> {
    Ok(handler::handle(event, client, config).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Respect RUST_LOG if set, otherwise log the function itself at info.
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "get_images=info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_ansi(false)
        .init();

    let config = Config::from_env();

    // One client per process, reused across invocations.
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = Client::new(&aws_config);

    tracing::info!(table = %config.table_name, "function initialized");

    run(service_fn(|event| invoke(event, &client, &config))).await
}

//! The scan handler: one full-table read, serialized to a response envelope.

use aws_sdk_dynamodb::Client;
use lambda_runtime::LambdaEvent;
use serde_json::Value;

use crate::config::Config;
use crate::encode;
use crate::error::{Error, Result};
use crate::response::Response;

/// Handle one invocation: scan the table, encode the records, respond.
///
/// The event payload is accepted but not inspected. Failures never propagate
/// to the runtime; they become a 500 envelope carrying the error message.
pub async fn handle(event: LambdaEvent<Value>, client: &Client, config: &Config) -> Response {
    let (_payload, context) = event.into_parts();
    tracing::debug!(
        request_id = %context.request_id,
        table = %config.table_name,
        "scanning table"
    );

    match scan_to_json(client, &config.table_name).await {
        Ok(body) => Response::ok(body),
        Err(err) => {
            tracing::error!(error = %err, table = %config.table_name, "invocation failed");
            Response::internal_error(&err.to_string())
        }
    }
}

/// Scan the table and serialize the first result page as a JSON array.
async fn scan_to_json(client: &Client, table: &str) -> Result<String> {
    let output = client
        .scan()
        .table_name(table)
        .send()
        .await
        .map_err(Error::scan)?;

    // Continuation tokens are deliberately not followed; a multi-page table
    // yields a truncated result. Surface that in the logs at least.
    if output.last_evaluated_key().is_some() {
        tracing::warn!(table, "scan result is paginated; only the first page is returned");
    }

    let items = output.items();
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        records.push(encode::record_to_json(item)?);
    }
    Ok(serde_json::to_string(&Value::Array(records))?)
}

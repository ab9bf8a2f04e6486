//! Application execution logic.
//!
//! Reads the message to send, dispatches it, and reports the outcome.

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use connector_invoke::config::ConnectorConfig;
use connector_invoke::invoke::{DispatchError, Dispatcher, HttpClient, HttpResponse};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The message could not be read from the input stream.
    #[error("Failed to read message from stdin: {0}")]
    ReadMessage(#[source] std::io::Error),

    /// The invocation failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Returns the explicit message, or reads all of `input` as the message.
///
/// # Errors
///
/// Returns [`RunError::ReadMessage`] if `input` fails or is not UTF-8.
pub async fn read_message<R>(explicit: Option<String>, mut input: R) -> Result<String, RunError>
where
    R: AsyncRead + Unpin,
{
    if let Some(message) = explicit {
        return Ok(message);
    }

    let mut message = String::new();
    input
        .read_to_string(&mut message)
        .await
        .map_err(RunError::ReadMessage)?;
    Ok(message)
}

/// Dispatches `message` and logs the outcome.
///
/// # Errors
///
/// Returns [`RunError::Dispatch`] when the dispatcher reports failure.
pub async fn execute<H: HttpClient>(
    dispatcher: &Dispatcher<H>,
    config: &ConnectorConfig,
    message: &str,
    headers: &http::HeaderMap,
) -> Result<HttpResponse, RunError> {
    let response = dispatcher.dispatch(message, headers, config).await?;

    tracing::info!(
        status = response.status.as_u16(),
        http_endpoint = %config.http_endpoint,
        source = %config.source_name,
        response_topic = config.response_topic.as_deref().unwrap_or("none"),
        "Function invocation succeeded"
    );

    Ok(response)
}

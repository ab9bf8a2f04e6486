//! Retrying dispatch of a message to the configured function endpoint.

use crate::config::ConnectorConfig;

use super::{DispatchError, FailurePayload, HttpClient, HttpError, HttpRequest, HttpResponse};

/// Sends messages to the function endpoint, retrying immediately on
/// transport failures.
///
/// Holds no per-call state, so one dispatcher can serve concurrent callers.
///
/// # Example
///
/// ```no_run
/// use connector_invoke::config::ConnectorConfig;
/// use connector_invoke::invoke::{Dispatcher, ReqwestClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConnectorConfig::from_process_env()?;
/// let dispatcher = Dispatcher::new(ReqwestClient::new());
/// let response = dispatcher
///     .dispatch("hello", &http::HeaderMap::new(), &config)
///     .await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<H> {
    client: H,
}

/// What a single attempt produced.
#[derive(Debug)]
enum Attempt {
    /// Status in `[200, 300)`.
    Succeeded(HttpResponse),
    /// Any other status.
    Responded(HttpResponse),
    /// No response was obtained.
    NoResponse,
}

impl<H> Dispatcher<H> {
    /// Creates a dispatcher sending through the given client.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> Dispatcher<H> {
    /// POSTs `message` with `headers` to `config.http_endpoint`.
    ///
    /// Makes up to `config.max_retries + 1` attempts with no delay between
    /// them. A `[200, 300)` response ends the loop at once. Transport failures
    /// and other statuses both move on to the next attempt; only the outcome
    /// of the final attempt decides the result.
    ///
    /// Every header value is sent, and no header is added implicitly.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::RequestConstruction`] if the request cannot be built;
    ///   nothing is sent
    /// - [`DispatchError::AllAttemptsExhausted`] (status 503) if the final
    ///   attempt obtained no response
    /// - [`DispatchError::NonSuccessStatus`] if the final response's status is
    ///   below 200 or above 300
    pub async fn dispatch(
        &self,
        message: &str,
        headers: &http::HeaderMap,
        config: &ConnectorConfig,
    ) -> Result<HttpResponse, DispatchError> {
        let request = build_request(message, headers, config)?;
        let attempts = config.attempt_budget();

        let mut last = Attempt::NoResponse;
        for attempt in 1..=attempts {
            last = self.attempt(&request, config, attempt).await?;
            if let Attempt::Succeeded(response) = last {
                return Ok(response);
            }
        }

        match last {
            Attempt::NoResponse => {
                let payload = FailurePayload::no_response(config, message);
                tracing::info!("{payload}");
                Err(DispatchError::AllAttemptsExhausted { attempts, payload })
            }
            Attempt::Responded(response) if is_failure_status(response.status) => {
                let payload = FailurePayload::failure_status(
                    config,
                    response.status.as_u16(),
                    response.body_text_lossy(),
                    message,
                );
                tracing::info!("{payload}");
                Err(DispatchError::NonSuccessStatus { payload })
            }
            Attempt::Responded(response) | Attempt::Succeeded(response) => Ok(response),
        }
    }

    /// Executes a single send and classifies its outcome.
    async fn attempt(
        &self,
        request: &HttpRequest,
        config: &ConnectorConfig,
        attempt: u64,
    ) -> Result<Attempt, DispatchError> {
        tracing::debug!(
            attempt,
            http_endpoint = %config.http_endpoint,
            "Invoking function"
        );

        match self.client.request(request.clone()).await {
            Ok(response) if response.is_success() => Ok(Attempt::Succeeded(response)),
            Ok(response) => {
                tracing::debug!(
                    attempt,
                    status = response.status.as_u16(),
                    http_endpoint = %config.http_endpoint,
                    "Function returned failure status"
                );
                Ok(Attempt::Responded(response))
            }
            Err(e) if !e.is_retryable() => Err(construction_error(config, &e)),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    http_endpoint = %config.http_endpoint,
                    source = %config.source_name,
                    "sending function invocation request failed"
                );
                Ok(Attempt::NoResponse)
            }
        }
    }
}

/// Failure check applied to the final response.
///
/// Unlike [`HttpResponse::is_success`] this treats exactly 300 as success.
/// The two checks disagree at that one status and are kept separate.
const fn is_failure_status(status: http::StatusCode) -> bool {
    let code = status.as_u16();
    code < 200 || code > 300
}

fn build_request(
    message: &str,
    headers: &http::HeaderMap,
    config: &ConnectorConfig,
) -> Result<HttpRequest, DispatchError> {
    let url = url::Url::parse(&config.http_endpoint).map_err(|e| construction_error(config, &e))?;

    Ok(HttpRequest::post(url)
        .with_headers(headers)
        .with_body(message.as_bytes().to_vec()))
}

fn construction_error(config: &ConnectorConfig, reason: &impl std::fmt::Display) -> DispatchError {
    DispatchError::RequestConstruction {
        endpoint: config.http_endpoint.clone(),
        source_name: config.source_name.clone(),
        reason: reason.to_string(),
    }
}

/// Extension trait for checking if an error is retryable.
///
/// Determines whether a failed attempt is worth repeating. Used by
/// [`Dispatcher`] to decide between moving on and failing at once.
pub trait IsRetryable {
    /// Returns true if the error is potentially transient and should be retried.
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for HttpError {
    fn is_retryable(&self) -> bool {
        match self {
            // Network errors are typically transient
            Self::Connection(_) | Self::Timeout => true,
            // URL errors are configuration issues, not transient
            Self::InvalidUrl(_) => false,
        }
    }
}

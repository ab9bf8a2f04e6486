//! Error types for function invocation.

use thiserror::Error;

use super::FailurePayload;

/// Error type for a single HTTP exchange.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The client refused to build the request, so nothing was sent.
    ///
    /// Points at configuration rather than a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error returned by [`Dispatcher::dispatch`](super::Dispatcher::dispatch).
///
/// The two post-send variants carry the structured [`FailurePayload`]; their
/// `Display` output is exactly its JSON text.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Every attempt failed without obtaining a response. Status is 503.
    #[error("{payload}")]
    AllAttemptsExhausted {
        /// Number of send attempts made
        attempts: u64,
        /// Structured error reported to the caller
        payload: FailurePayload,
    },

    /// The endpoint answered the final attempt with a failure status.
    #[error("{payload}")]
    NonSuccessStatus {
        /// Structured error reported to the caller
        payload: FailurePayload,
    },

    /// The request could not be built; nothing was sent.
    #[error(
        "failed to create HTTP request to invoke function. http_endpoint: {endpoint}, source: {source_name}: {reason}"
    )]
    RequestConstruction {
        /// Configured endpoint
        endpoint: String,
        /// Source identifier
        source_name: String,
        /// Why construction failed
        reason: String,
    },
}

impl DispatchError {
    /// Returns the structured error payload, if a send was attempted.
    #[must_use]
    pub const fn payload(&self) -> Option<&FailurePayload> {
        match self {
            Self::AllAttemptsExhausted { payload, .. } | Self::NonSuccessStatus { payload } => {
                Some(payload)
            }
            Self::RequestConstruction { .. } => None,
        }
    }

    /// Returns the status reported to the caller, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self.payload() {
            Some(payload) => Some(payload.status),
            None => None,
        }
    }
}

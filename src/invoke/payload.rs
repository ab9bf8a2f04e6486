//! Structured failure payload reported when an invocation fails.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ConnectorConfig;

/// Message used when no attempt obtained a response.
pub const EMPTY_RESPONSE_MESSAGE: &str =
    "every function invocation retry failed; final retry gave empty response";

/// Message used when the endpoint answered with a failure status.
pub const FAILURE_STATUS_MESSAGE: &str = "request returned failure";

/// Status reported when no response was obtained.
pub const NO_RESPONSE_STATUS: u16 = 503;

/// JSON-shaped failure record, used both as a log line and as the error
/// surfaced to the caller.
///
/// Serializes as
/// `{"status":..,"message":..,"http_endpoint":..,"source":..,"body":..,"request":..}`.
/// `body` is empty when no response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailurePayload {
    /// 503 when nothing came back, otherwise the endpoint's status
    pub status: u16,
    /// Human-readable summary
    pub message: String,
    /// Configured endpoint
    pub http_endpoint: String,
    /// Source identifier
    pub source: String,
    /// Response body text of the final attempt
    pub body: String,
    /// Original request body
    pub request: String,
}

impl FailurePayload {
    /// Payload for a call where every attempt failed before a response.
    #[must_use]
    pub fn no_response(config: &ConnectorConfig, request: &str) -> Self {
        Self {
            status: NO_RESPONSE_STATUS,
            message: EMPTY_RESPONSE_MESSAGE.to_string(),
            http_endpoint: config.http_endpoint.clone(),
            source: config.source_name.clone(),
            body: String::new(),
            request: request.to_string(),
        }
    }

    /// Payload for a call whose final response had a failure status.
    #[must_use]
    pub fn failure_status(
        config: &ConnectorConfig,
        status: u16,
        body: String,
        request: &str,
    ) -> Self {
        Self {
            status,
            message: FAILURE_STATUS_MESSAGE.to_string(),
            http_endpoint: config.http_endpoint.clone(),
            source: config.source_name.clone(),
            body,
            request: request.to_string(),
        }
    }

    /// Serializes the payload to compact JSON.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors; with plain string and integer fields
    /// this does not fail in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for FailurePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

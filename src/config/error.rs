//! Error types for configuration materialization.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Every variant is terminal: callers surface it instead of retrying.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("environment variable not found: {name}")]
    MissingVariable {
        /// Name of the missing variable
        name: &'static str,
    },

    /// `MAX_RETRIES` is not a non-negative integer.
    #[error("failed to parse value '{value}' from MAX_RETRIES environment variable: {source}")]
    InvalidRetryCount {
        /// The raw value as read from the environment
        value: String,
        /// Underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// `AWS_REGION` is unset or empty.
    #[error("aws region required")]
    MissingRegion,

    /// None of the endpoint, static key, or shared profile variable sets is complete.
    #[error("no aws configuration specified")]
    NoCredentialSource,

    /// Invalid header format.
    #[error("Invalid header format '{value}': expected 'Key=Value' or 'Key: Value'")]
    InvalidHeader {
        /// The invalid header string
        value: String,
    },

    /// Invalid header name.
    #[error("Invalid header name '{name}': {reason}")]
    InvalidHeaderName {
        /// The invalid header name
        name: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid header value.
    #[error("Invalid header value for '{name}': {reason}")]
    InvalidHeaderValue {
        /// The header name
        name: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl ConfigError {
    /// Creates a `MissingVariable` error for the named variable.
    #[must_use]
    pub const fn missing(name: &'static str) -> Self {
        Self::MissingVariable { name }
    }

    /// Returns the name of the offending environment variable, if the error
    /// concerns a single variable.
    #[must_use]
    pub const fn variable(&self) -> Option<&'static str> {
        match self {
            Self::MissingVariable { name } => Some(*name),
            Self::InvalidRetryCount { .. } => Some(super::vars::MAX_RETRIES),
            Self::MissingRegion => Some(super::vars::AWS_REGION),
            Self::NoCredentialSource
            | Self::InvalidHeader { .. }
            | Self::InvalidHeaderName { .. }
            | Self::InvalidHeaderValue { .. } => None,
        }
    }
}

//! Connector configuration materialized from environment variables.

use std::fmt;
use std::num::ParseIntError;

use crate::env::{EnvSource, ProcessEnv};

use super::defaults;
use super::error::ConfigError;
use super::vars;

/// Immutable connector settings shared by every invocation.
///
/// Built once per process by [`ConnectorConfig::from_env`] and passed by
/// reference to the dispatcher; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// Destination topic name
    pub topic: String,

    /// Topic for successful responses, if any
    pub response_topic: Option<String>,

    /// Topic for failure payloads, if any
    pub error_topic: Option<String>,

    /// Function endpoint, kept as the raw string it was configured with
    pub http_endpoint: String,

    /// Retries after the first attempt; the attempt budget is `max_retries + 1`
    pub max_retries: u32,

    /// Content type of outbound messages
    pub content_type: String,

    /// Identifier reported as `source` in logs and error payloads
    pub source_name: String,
}

impl fmt::Display for ConnectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ topic: {}, response_topic: {}, error_topic: {}, http_endpoint: {}, \
             max_retries: {}, content_type: {}, source: {} }}",
            self.topic,
            self.response_topic.as_deref().unwrap_or("none"),
            self.error_topic.as_deref().unwrap_or("none"),
            self.http_endpoint,
            self.max_retries,
            self.content_type,
            self.source_name,
        )
    }
}

impl ConnectorConfig {
    /// Materializes the configuration from the given environment source.
    ///
    /// Required variables are checked in the order `TOPIC`, `HTTP_ENDPOINT`,
    /// `MAX_RETRIES`, `CONTENT_TYPE`; the first missing one is reported.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required variable is unset or empty ([`ConfigError::MissingVariable`])
    /// - `MAX_RETRIES` is not a non-negative integer ([`ConfigError::InvalidRetryCount`])
    pub fn from_env(env: &impl EnvSource) -> Result<Self, ConfigError> {
        if let Some(name) = vars::REQUIRED_CONNECTOR
            .into_iter()
            .find(|name| env.get(name).is_none())
        {
            return Err(ConfigError::missing(name));
        }

        let required = |name: &'static str| env.get(name).ok_or(ConfigError::missing(name));

        let raw_retries = required(vars::MAX_RETRIES)?;
        let max_retries =
            parse_retry_count(&raw_retries).map_err(|source| ConfigError::InvalidRetryCount {
                value: raw_retries.clone(),
                source,
            })?;

        Ok(Self {
            topic: required(vars::TOPIC)?,
            response_topic: env.get(vars::RESPONSE_TOPIC),
            error_topic: env.get(vars::ERROR_TOPIC),
            http_endpoint: required(vars::HTTP_ENDPOINT)?,
            max_retries,
            content_type: required(vars::CONTENT_TYPE)?,
            source_name: env
                .get(vars::SOURCE_NAME)
                .unwrap_or_else(|| defaults::SOURCE_NAME.to_string()),
        })
    }

    /// Materializes the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ConnectorConfig::from_env`].
    pub fn from_process_env() -> Result<Self, ConfigError> {
        Self::from_env(&ProcessEnv)
    }

    /// Total number of send attempts per dispatch.
    #[must_use]
    pub fn attempt_budget(&self) -> u64 {
        u64::from(self.max_retries) + 1
    }
}

/// Parses a retry count whose base is given by its prefix.
///
/// Accepts surrounding whitespace, an optional `+`, the prefixes `0x`, `0o`,
/// `0b` (any case) and a bare leading `0` for octal. A single `_` may sit
/// between digits or directly after a prefix, so `0x_1f` and `0_7` parse.
/// A leading `-` is rejected by the unsigned parse.
pub(crate) fn parse_retry_count(raw: &str) -> Result<u32, ParseIntError> {
    let trimmed = raw.trim();
    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'+' | b'-') => trimmed.split_at(1),
        _ => ("", trimmed),
    };

    let lower = unsigned.to_ascii_lowercase();
    let (radix, prefixed, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, true, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, true, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, true, rest)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, true, &lower[1..])
    } else {
        (10, false, lower.as_str())
    };

    // Misplaced separators are left in place so the parse rejects them.
    let well_separated = (prefixed || !digits.starts_with('_'))
        && !digits.ends_with('_')
        && !digits.contains("__");
    let digits = if well_separated {
        digits.replace('_', "")
    } else {
        digits.to_string()
    };

    u32::from_str_radix(&format!("{sign}{digits}"), radix)
}

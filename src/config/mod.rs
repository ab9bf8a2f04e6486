//! Configuration layer for the connector invoker.
//!
//! This module provides:
//! - Connector settings materialized from the environment ([`ConnectorConfig`])
//! - Cloud access resolution ([`CloudAccessConfig`], [`CredentialSource`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Header parsing for caller-supplied headers ([`parse_headers`])
//! - Environment variable names ([`vars`]) and default values ([`defaults`])
//!
//! # Environment
//!
//! Every entry point takes an [`EnvSource`](crate::env::EnvSource) rather than
//! reading the process environment itself. A variable set to the empty string
//! is treated exactly like an unset one.
//!
//! # Cloud credential priority
//!
//! `AWS_REGION` is always required. The first complete branch wins:
//!
//! 1. **Endpoint override** - `AWS_ENDPOINT`
//! 2. **Static keys** - `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`
//! 3. **Shared profile** - `AWS_CRED_PATH` and `AWS_CRED_PROFILE`

mod cli;
mod cloud;
mod connector;
pub mod defaults;
mod error;
mod headers;
pub mod vars;

#[cfg(test)]
mod connector_tests;

pub use cli::{Cli, Command};
pub use cloud::{CloudAccessConfig, CredentialSource};
pub use connector::ConnectorConfig;
pub use error::ConfigError;
pub use headers::parse_headers;

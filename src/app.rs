//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use connector_invoke::config::{ConfigError, vars};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - missing or malformed variables, bad headers.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - unreadable input, failed invocation.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingVariable { name } => {
            eprintln!("\nSet {name} in the environment before starting the connector.");
        }
        ConfigError::InvalidRetryCount { .. } => {
            eprintln!(
                "\n{} must be a non-negative integer (decimal, 0x hex, 0o octal or 0b binary).",
                vars::MAX_RETRIES
            );
        }
        ConfigError::NoCredentialSource => {
            eprintln!(
                "\nSet {}, or {} and {}, or {} and {}.",
                vars::AWS_ENDPOINT,
                vars::AWS_ACCESS_KEY_ID,
                vars::AWS_SECRET_ACCESS_KEY,
                vars::AWS_CRED_PATH,
                vars::AWS_CRED_PROFILE
            );
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only the function's response.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

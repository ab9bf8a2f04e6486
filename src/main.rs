//! connector-invoke: function invocation helper for event-driven connectors
//!
//! Entry point for the connector-invoke application.

use std::io::Write;
use std::process::ExitCode;

use connector_invoke::config::{Cli, CloudAccessConfig, Command, ConnectorConfig, parse_headers};
use connector_invoke::invoke::{Dispatcher, ReqwestClient};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};
use run::RunError;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    match cli.command {
        Command::Invoke { message, headers } => handle_invoke(message, &headers),
        Command::CloudConfig => handle_cloud_config(),
    }
}

/// Handles the `cloud-config` subcommand.
fn handle_cloud_config() -> ExitCode {
    match CloudAccessConfig::from_process_env() {
        Ok(config) => {
            tracing::info!(kind = config.credentials.kind(), "{config}");
            println!("{config}");
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `invoke` subcommand.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn handle_invoke(message: Option<String>, raw_headers: &[String]) -> ExitCode {
    let config = match ConnectorConfig::from_process_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };
    tracing::info!("{config}");

    let headers = match parse_headers(raw_headers, Some(&config.content_type)) {
        Ok(headers) => headers,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    let dispatcher = Dispatcher::new(ReqwestClient::new());
    let outcome = runtime.block_on(async {
        let message = run::read_message(message, tokio::io::stdin()).await?;
        run::execute(&dispatcher, &config, &message, &headers).await
    });

    match outcome {
        Ok(response) => {
            if let Err(e) = std::io::stdout().write_all(&response.body) {
                tracing::error!("Failed to write response: {e}");
                return exit_code::runtime_error();
            }
            exit_code::SUCCESS
        }
        Err(RunError::Dispatch(e)) => {
            // The dispatcher already logged the structured payload
            eprintln!("{e}");
            exit_code::runtime_error()
        }
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}

//! CLI argument parsing using clap.
//!
//! Connector settings come from the environment; the command line only
//! carries the per-invocation message and headers.

use clap::{Parser, Subcommand};

/// Connector function invoker
///
/// Posts a message to the function endpoint configured through environment
/// variables, retrying transport failures, or resolves cloud access settings.
#[derive(Debug, Parser)]
#[command(name = "connector-invoke")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for connector-invoke
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a message to the configured HTTP endpoint
    Invoke {
        /// Message body; read from stdin when omitted
        #[arg(long, short)]
        message: Option<String>,

        /// HTTP headers in 'Key=Value' or 'Key: Value' format (can be specified multiple times)
        #[arg(long = "header", short = 'H', value_name = "K=V")]
        headers: Vec<String>,
    },

    /// Resolve and print the cloud access configuration
    CloudConfig,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the invoke command.
    #[must_use]
    pub const fn is_invoke(&self) -> bool {
        matches!(self.command, Command::Invoke { .. })
    }
}

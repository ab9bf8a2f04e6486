//! Default values for configuration options.

/// Source identifier used when `SOURCE_NAME` is unset or empty.
pub const SOURCE_NAME: &str = "KEDAConnector";

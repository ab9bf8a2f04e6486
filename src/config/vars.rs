//! Names of the environment variables the connector reads.

/// Destination topic (required).
pub const TOPIC: &str = "TOPIC";
/// Topic for successful invocation responses (optional).
pub const RESPONSE_TOPIC: &str = "RESPONSE_TOPIC";
/// Topic for failed invocation payloads (optional).
pub const ERROR_TOPIC: &str = "ERROR_TOPIC";
/// Function endpoint invoked with each message (required).
pub const HTTP_ENDPOINT: &str = "HTTP_ENDPOINT";
/// Retries after the first attempt (required).
pub const MAX_RETRIES: &str = "MAX_RETRIES";
/// Content type of outbound messages (required).
pub const CONTENT_TYPE: &str = "CONTENT_TYPE";
/// Identifier reported as `source` in error payloads (optional).
pub const SOURCE_NAME: &str = "SOURCE_NAME";

/// Cloud region (required for cloud access).
pub const AWS_REGION: &str = "AWS_REGION";
/// Explicit service endpoint override.
pub const AWS_ENDPOINT: &str = "AWS_ENDPOINT";
/// Static access key id.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Static secret access key.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Shared credentials file path.
pub const AWS_CRED_PATH: &str = "AWS_CRED_PATH";
/// Profile inside the shared credentials file.
pub const AWS_CRED_PROFILE: &str = "AWS_CRED_PROFILE";

/// Variables that must be present for [`ConnectorConfig`](super::ConnectorConfig),
/// in the order they are checked.
pub const REQUIRED_CONNECTOR: [&str; 4] = [TOPIC, HTTP_ENDPOINT, MAX_RETRIES, CONTENT_TYPE];

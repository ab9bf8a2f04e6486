//! Cloud access configuration resolved from environment variables.

use std::fmt;
use std::path::PathBuf;

use crate::env::{EnvSource, ProcessEnv};

use super::error::ConfigError;
use super::vars;

/// How the cloud client authenticates or where it connects.
///
/// Exactly one variant is chosen, by priority: endpoint override, then
/// static keys, then shared profile.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Explicit service endpoint (e.g. a local emulator); no credentials attached.
    Endpoint(String),

    /// Static access key pair.
    Static {
        /// Access key id
        access_key_id: String,
        /// Secret access key
        secret_access_key: String,
    },

    /// Profile from a shared credentials file.
    SharedProfile {
        /// Path to the credentials file
        path: PathBuf,
        /// Profile name inside the file
        profile: String,
    },
}

impl CredentialSource {
    /// Short label of the chosen branch, for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Endpoint(_) => "endpoint",
            Self::Static { .. } => "static",
            Self::SharedProfile { .. } => "shared-profile",
        }
    }
}

// Hand-written so the secret never reaches logs.
impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Endpoint(endpoint) => f.debug_tuple("Endpoint").field(endpoint).finish(),
            Self::Static { access_key_id, .. } => f
                .debug_struct("Static")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"<redacted>")
                .finish(),
            Self::SharedProfile { path, profile } => f
                .debug_struct("SharedProfile")
                .field("path", path)
                .field("profile", profile)
                .finish(),
        }
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Endpoint(endpoint) => write!(f, "endpoint {endpoint}"),
            Self::Static { access_key_id, .. } => write!(f, "static key {access_key_id}"),
            Self::SharedProfile { path, profile } => {
                write!(f, "profile '{profile}' from {}", path.display())
            }
        }
    }
}

/// Region plus the selected credential source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudAccessConfig {
    /// Cloud region, never empty
    pub region: String,

    /// The credential branch chosen by priority
    pub credentials: CredentialSource,
}

impl fmt::Display for CloudAccessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CloudAccess {{ region: {}, credentials: {} }}",
            self.region, self.credentials
        )
    }
}

impl CloudAccessConfig {
    /// Resolves cloud access from the given environment source.
    ///
    /// The first complete branch wins:
    /// 1. `AWS_ENDPOINT`
    /// 2. `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`
    /// 3. `AWS_CRED_PATH` and `AWS_CRED_PROFILE`
    ///
    /// A half-specified pair is skipped, not reported.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRegion`] if `AWS_REGION` is unset, or
    /// [`ConfigError::NoCredentialSource`] if no branch is complete.
    pub fn from_env(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let region = env.get(vars::AWS_REGION).ok_or(ConfigError::MissingRegion)?;
        let credentials = resolve_credentials(env).ok_or(ConfigError::NoCredentialSource)?;

        Ok(Self {
            region,
            credentials,
        })
    }

    /// Resolves cloud access from the process environment.
    ///
    /// # Errors
    ///
    /// See [`CloudAccessConfig::from_env`].
    pub fn from_process_env() -> Result<Self, ConfigError> {
        Self::from_env(&ProcessEnv)
    }
}

fn resolve_credentials(env: &impl EnvSource) -> Option<CredentialSource> {
    if let Some(endpoint) = env.get(vars::AWS_ENDPOINT) {
        return Some(CredentialSource::Endpoint(endpoint));
    }

    if let (Some(access_key_id), Some(secret_access_key)) = (
        env.get(vars::AWS_ACCESS_KEY_ID),
        env.get(vars::AWS_SECRET_ACCESS_KEY),
    ) {
        return Some(CredentialSource::Static {
            access_key_id,
            secret_access_key,
        });
    }

    if let (Some(path), Some(profile)) = (env.get(vars::AWS_CRED_PATH), env.get(vars::AWS_CRED_PROFILE))
    {
        return Some(CredentialSource::SharedProfile {
            path: PathBuf::from(path),
            profile,
        });
    }

    None
}

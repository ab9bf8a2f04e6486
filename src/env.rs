//! Environment abstraction for testability.
//!
//! Configuration is read through the [`EnvSource`] trait instead of touching
//! the process environment directly, so tests and embedders can supply
//! variables explicitly while production code uses [`ProcessEnv`].

use std::collections::HashMap;

/// Source of named configuration values.
///
/// An empty value is reported as absent: `get` returns `None` for both an
/// unset variable and one set to `""`.
///
/// # Example
///
/// ```
/// use connector_invoke::env::{EnvSource, MapEnv};
///
/// let env = MapEnv::new().with("TOPIC", "orders").with("EMPTY", "");
/// assert_eq!(env.get("TOPIC").as_deref(), Some("orders"));
/// assert_eq!(env.get("EMPTY"), None);
/// assert_eq!(env.get("MISSING"), None);
/// ```
pub trait EnvSource: Send + Sync {
    /// Returns the raw value of the variable, or `None` if it is unset or empty.
    fn get(&self, name: &str) -> Option<String>;
}

/// Production source backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// In-memory source holding an explicit set of variables.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, replacing any previous value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|v| !v.is_empty()).cloned()
    }
}

//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use crowdgate_auth::Provider;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main configuration structure.
///
/// This is the unified configuration after merging all layers. Fields with
/// `#[serde(default)]` are optional in the config file.
///
/// # Example
///
/// ```
/// use crowdgate_runtime::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.audit.log_allowed);
/// assert!(config.credentials.known_providers().is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Decision audit logging.
    pub audit: AuditConfig,

    /// Credential domain settings.
    pub credentials: CredentialsConfig,
}

impl EngineConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes to TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Merges another config into this one.
    ///
    /// Fields in `other` that differ from their defaults override `self`.
    pub fn merge(&mut self, other: &Self) {
        self.audit.merge(&other.audit);
        self.credentials.merge(&other.credentials);
    }
}

/// Audit logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuditConfig {
    /// Emit a `debug` event for every allowed decision.
    pub log_allowed: bool,

    /// Emit a `warn` event for every denied decision.
    pub log_denied: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_allowed: true,
            log_denied: true,
        }
    }
}

impl AuditConfig {
    fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.log_allowed != default.log_allowed {
            self.log_allowed = other.log_allowed;
        }
        if other.log_denied != default.log_denied {
            self.log_denied = other.log_denied;
        }
    }
}

/// Credential domain configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Providers the deployment links credentials for.
    ///
    /// Empty means "any provider name".
    pub providers: Vec<String>,
}

impl CredentialsConfig {
    /// Returns the normalized set of known providers, or `None` when every
    /// provider is accepted.
    #[must_use]
    pub fn known_providers(&self) -> Option<HashSet<Provider>> {
        if self.providers.is_empty() {
            return None;
        }
        Some(self.providers.iter().map(Provider::new).collect())
    }

    fn merge(&mut self, other: &Self) {
        if !other.providers.is_empty() {
            self.providers = other.providers.clone();
        }
    }
}

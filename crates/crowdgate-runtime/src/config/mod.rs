//! Configuration management with hierarchical layering.
//!
//! # Architecture
//!
//! ```text
//! Priority (highest to lowest):
//!
//! ┌──────────────────────────────────────────────┐
//! │  1. Environment Variables (CROWDGATE_*)      │  Runtime override
//! ├──────────────────────────────────────────────┤
//! │  2. Project Config (.crowdgate/config.toml)  │  Deployment-specific
//! ├──────────────────────────────────────────────┤
//! │  3. Global Config (~/.crowdgate/config.toml) │  Host defaults
//! ├──────────────────────────────────────────────┤
//! │  4. Default Values (compile-time)            │  Fallback
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Configuration never changes a rule. It only controls audit logging and
//! which provider names the credential domain recognizes.
//!
//! # Environment Variables
//!
//! | Variable | Config Field | Type |
//! |----------|--------------|------|
//! | `CROWDGATE_AUDIT_ALLOWED` | `audit.log_allowed` | bool |
//! | `CROWDGATE_AUDIT_DENIED` | `audit.log_denied` | bool |
//! | `CROWDGATE_PROVIDERS` | `credentials.providers` | comma-separated list |
//!
//! # Example Configuration
//!
//! ```toml
//! [audit]
//! log_allowed = true
//! log_denied = true
//!
//! [credentials]
//! providers = ["twitter", "facebook", "google"]
//! ```

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use types::{AuditConfig, CredentialsConfig, EngineConfig};

/// Default global config directory.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".crowdgate")
}

/// Default global config file path.
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("config.toml")
}

/// Project config directory name.
pub const PROJECT_CONFIG_DIR: &str = ".crowdgate";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "config.toml";

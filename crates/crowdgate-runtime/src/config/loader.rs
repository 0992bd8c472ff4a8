//! Configuration loader with hierarchical merging.
//!
//! # Load Order
//!
//! 1. Default values (compile-time)
//! 2. Global config (`~/.crowdgate/config.toml`)
//! 3. Project config (`.crowdgate/config.toml`)
//! 4. Environment variables (`CROWDGATE_*`)
//!
//! Each layer overrides the previous.

use super::{
    default_config_path, ConfigError, EngineConfig, PROJECT_CONFIG_DIR, PROJECT_CONFIG_FILE,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Helper macro for parsing boolean environment variables.
macro_rules! parse_env_bool {
    ($get:expr, $field:expr, $var:literal) => {
        if let Some(val) = $get($var) {
            $field =
                parse_bool(&val).ok_or_else(|| ConfigError::invalid_env_var($var, "expected bool"))?;
        }
    };
}

/// Configuration loader with builder pattern.
///
/// # Example
///
/// ```no_run
/// use crowdgate_runtime::config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .with_project_root("/srv/crowdgate")
///     .skip_env_vars()
///     .load()?;
/// # Ok::<(), crowdgate_runtime::config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Global config file path (defaults to ~/.crowdgate/config.toml).
    global_config_path: Option<PathBuf>,

    /// Project root directory.
    project_root: Option<PathBuf>,

    /// Skip environment variable loading.
    skip_env: bool,

    /// Skip global config loading.
    skip_global: bool,

    /// Skip project config loading.
    skip_project: bool,
}

impl ConfigLoader {
    /// Creates a new loader with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom global config path.
    #[must_use]
    pub fn with_global_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_config_path = Some(path.into());
        self
    }

    /// Sets the project root directory.
    ///
    /// Project config will be loaded from `<project_root>/.crowdgate/config.toml`.
    #[must_use]
    pub fn with_project_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_root = Some(path.into());
        self
    }

    /// Skips environment variable loading.
    #[must_use]
    pub fn skip_env_vars(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Skips global config loading.
    #[must_use]
    pub fn skip_global_config(mut self) -> Self {
        self.skip_global = true;
        self
    }

    /// Skips project config loading.
    #[must_use]
    pub fn skip_project_config(mut self) -> Self {
        self.skip_project = true;
        self
    }

    /// Loads and merges configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any config file exists but cannot be read
    /// or parsed, or an environment variable holds an invalid value.
    /// Missing config files are silently ignored.
    pub fn load(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = EngineConfig::default();

        // Layer 1: Global config
        if !self.skip_global {
            let global_path = self
                .global_config_path
                .clone()
                .unwrap_or_else(default_config_path);

            if let Some(global_config) = load_file(&global_path)? {
                debug!(path = %global_path.display(), "Loaded global config");
                config.merge(&global_config);
            }
        }

        // Layer 2: Project config
        if !self.skip_project {
            if let Some(ref project_root) = self.project_root {
                let project_config_path = project_root
                    .join(PROJECT_CONFIG_DIR)
                    .join(PROJECT_CONFIG_FILE);

                if let Some(project_config) = load_file(&project_config_path)? {
                    debug!(
                        path = %project_config_path.display(),
                        project = %project_root.display(),
                        "Loaded project config"
                    );
                    config.merge(&project_config);
                }
            }
        }

        // Layer 3: Environment variables
        if !self.skip_env {
            apply_env_vars(&mut config, |name| std::env::var(name).ok())?;
        }

        Ok(config)
    }
}

/// Loads a config file, returning None if it doesn't exist.
fn load_file(path: &Path) -> Result<Option<EngineConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = EngineConfig::from_toml(&content).map_err(|e| ConfigError::parse_toml(path, e))?;

    Ok(Some(config))
}

/// Applies environment variable overrides read through `get`.
fn apply_env_vars(
    config: &mut EngineConfig,
    get: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    parse_env_bool!(get, config.audit.log_allowed, "CROWDGATE_AUDIT_ALLOWED");
    parse_env_bool!(get, config.audit.log_denied, "CROWDGATE_AUDIT_DENIED");

    if let Some(val) = get("CROWDGATE_PROVIDERS") {
        config.credentials.providers = val
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
    }

    Ok(())
}

/// Parses a boolean from string.
///
/// Accepts: "true", "false", "1", "0", "yes", "no", "on", "off" (case-insensitive).
fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn create_config_file(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("should write config file");
        path
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn load_defaults_only() {
        let config = ConfigLoader::new()
            .skip_global_config()
            .skip_project_config()
            .skip_env_vars()
            .load()
            .expect("defaults should load");

        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn load_global_config() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = create_config_file(
            temp.path(),
            r#"
[audit]
log_allowed = false

[credentials]
providers = ["twitter", "facebook", "google"]
"#,
        );

        let config = ConfigLoader::new()
            .with_global_config(&config_path)
            .skip_project_config()
            .skip_env_vars()
            .load()
            .expect("global config should load");

        assert!(!config.audit.log_allowed);
        assert_eq!(config.credentials.providers.len(), 3);
    }

    #[test]
    fn load_project_overrides_global() {
        let global_temp = TempDir::new().expect("should create temp dir");
        let project_temp = TempDir::new().expect("should create temp dir");

        let project_dir = project_temp.path().join(PROJECT_CONFIG_DIR);
        std::fs::create_dir_all(&project_dir).expect("should create project config dir");

        let global_path = create_config_file(
            global_temp.path(),
            r#"
[audit]
log_allowed = false

[credentials]
providers = ["twitter"]
"#,
        );

        create_config_file(
            &project_dir,
            r#"
[credentials]
providers = ["google"]
"#,
        );

        let config = ConfigLoader::new()
            .with_global_config(&global_path)
            .with_project_root(project_temp.path())
            .skip_env_vars()
            .load()
            .expect("layered config should load");

        // audit from global (not overridden in project)
        assert!(!config.audit.log_allowed);
        // providers from project (overrides global)
        assert_eq!(config.credentials.providers, vec!["google".to_string()]);
    }

    #[test]
    fn missing_config_files_ok() {
        let config = ConfigLoader::new()
            .with_global_config("/nonexistent/path/config.toml")
            .with_project_root("/nonexistent/project")
            .skip_env_vars()
            .load()
            .expect("missing files should be ignored");

        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn malformed_config_is_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = create_config_file(temp.path(), "[audit\nlog_allowed = ");

        let err = ConfigLoader::new()
            .with_global_config(&config_path)
            .skip_project_config()
            .skip_env_vars()
            .load()
            .expect_err("malformed toml should fail");

        assert!(matches!(err, ConfigError::ParseToml { .. }), "got: {err}");
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = EngineConfig::default();
        apply_env_vars(
            &mut config,
            env(&[
                ("CROWDGATE_AUDIT_ALLOWED", "off"),
                ("CROWDGATE_PROVIDERS", "twitter, google,,"),
            ]),
        )
        .expect("valid env should apply");

        assert!(!config.audit.log_allowed);
        assert!(config.audit.log_denied);
        assert_eq!(
            config.credentials.providers,
            vec!["twitter".to_string(), "google".to_string()]
        );
    }

    #[test]
    fn env_invalid_bool_is_error() {
        let mut config = EngineConfig::default();
        let err = apply_env_vars(&mut config, env(&[("CROWDGATE_AUDIT_DENIED", "maybe")]))
            .expect_err("invalid bool should fail");

        assert!(err.to_string().contains("CROWDGATE_AUDIT_DENIED"), "got: {err}");
    }

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool("on"), Some(true));

        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("off"), Some(false));

        assert_eq!(parse_bool("invalid"), None);
    }
}

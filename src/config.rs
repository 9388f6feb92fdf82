//! Configuration file support for the devcontrol CLI.
//!
//! Provides YAML-based configuration through `devcontrol.config.yml` files,
//! and resolves the effective settings from the file, command-line flags and
//! built-in defaults (in that order of precedence: flags, file, defaults).

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::filesystem::DEFAULT_CACHE_PATH;
use crate::adapters::outbound::network::{ApiClientSettings, Backoff, RetryPolicy};
use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "devcontrol.config.yml";

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SNAPSHOT_PATH: &str = "demo-snapshot.json";

/// Environment variable holding the bearer token
pub const API_TOKEN_ENV: &str = "DEVCONTROL_API_TOKEN";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub demo_mode: Option<bool>,
    pub snapshot_path: Option<PathBuf>,
    pub cache_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub retry: Option<RetryConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `retry:` section of the config file.
#[derive(Debug, Deserialize, Default)]
pub struct RetryConfig {
    pub max_attempts: Option<u32>,
    pub base_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
    pub backoff: Option<Backoff>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_api_url(url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!(
            "Invalid config: api_url '{}' must start with http:// or https://.\n\n\
             💡 Hint: Use the full base URL of the DevControl API (e.g., \"https://api.example.com/v1\").",
            url
        );
    }
    Ok(())
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.api_url {
        validate_api_url(url)?;
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default of {} seconds.",
            DEFAULT_TIMEOUT_SECS
        );
    }

    if let Some(ref retry) = config.retry {
        if retry.max_attempts == Some(0) {
            bail!(
                "Invalid config: retry.max_attempts must be at least 1.\n\n\
                 💡 Hint: Use 1 to disable retries."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let retry_unknown = config
        .retry
        .iter()
        .flat_map(|r| r.unknown_fields.keys().map(|k| format!("retry.{}", k)));
    let unknown = config.unknown_fields.keys().cloned().chain(retry_unknown);

    for key in unknown {
        tracing::warn!(field = %key, "Unknown config field");
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    /// `Some(None)` is a bare `--demo`, `Some(Some(path))` names a snapshot
    pub demo: Option<Option<PathBuf>>,
    pub format: Option<OutputFormat>,
}

/// Effective settings after merging flags, file and defaults
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub demo_mode: bool,
    pub snapshot_path: PathBuf,
    pub cache_path: PathBuf,
    pub format: OutputFormat,
}

impl AppConfig {
    /// Merges the optional config file with command-line overrides
    pub fn resolve(file: Option<ConfigFile>, overrides: ConfigOverrides) -> Result<Self> {
        let file = file.unwrap_or_default();
        let retry_file = file.retry.unwrap_or_default();
        let defaults = RetryPolicy::default();

        let api_url = overrides
            .api_url
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        let (demo_mode, snapshot_override) = match overrides.demo {
            Some(path) => (true, path),
            None => (file.demo_mode.unwrap_or(false), None),
        };

        let retry = RetryPolicy {
            max_attempts: retry_file.max_attempts.unwrap_or(defaults.max_attempts),
            base_delay: retry_file
                .base_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.base_delay),
            max_delay: retry_file
                .max_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.max_delay),
            backoff: retry_file.backoff.unwrap_or(defaults.backoff),
        };

        Ok(Self {
            api_url,
            api_token: overrides.api_token.filter(|t| !t.trim().is_empty()),
            timeout: Duration::from_secs(file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            retry,
            demo_mode,
            snapshot_path: snapshot_override
                .or(file.snapshot_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH)),
            cache_path: file
                .cache_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_PATH)),
            format: overrides.format.or(file.format).unwrap_or_default(),
        })
    }

    pub fn api_client_settings(&self) -> ApiClientSettings {
        ApiClientSettings {
            base_url: self.api_url.clone(),
            api_token: self.api_token.clone(),
            timeout: self.timeout,
            retry: self.retry,
        }
    }
}

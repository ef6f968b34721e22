//! Configuration for license-auditor.
//!
//! Provides the YAML `license-auditor.config.yml` file (data structures,
//! discovery, validation) and the access credential read from the
//! environment.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::application::dto::MAX_CONCURRENCY;
use crate::shared::error::AuditError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-auditor.config.yml";

/// Environment variable holding the GitHub personal access token
pub const TOKEN_VARIABLE: &str = "GITHUB_TOKEN";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub concurrency: Option<usize>,
    pub dry_run: Option<bool>,
    pub exclude_repositories: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
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

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

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

fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    let invalid = |reason: String, hint: &str| AuditError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
        hint: hint.to_string(),
    };

    if let Some(concurrency) = config.concurrency {
        if concurrency == 0 || concurrency > MAX_CONCURRENCY {
            return Err(invalid(
                format!(
                    "concurrency must be between 1 and {} (got {})",
                    MAX_CONCURRENCY, concurrency
                ),
                "Use 1 to process repositories one at a time.",
            )
            .into());
        }
    }

    if let Some(ref api_url) = config.api_url {
        if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
            return Err(invalid(
                format!("api_url must start with http:// or https:// (got '{}')", api_url),
                "Use e.g. https://api.github.com or https://github.example.com/api/v3",
            )
            .into());
        }
    }

    if let Some(ref patterns) = config.exclude_repositories {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                return Err(invalid(
                    format!("exclude_repositories[{}] must not be empty", i),
                    "Each entry must be a repository name or owner/name pattern (e.g. \"archive-*\").",
                )
                .into());
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Access credential for the hosting platform
///
/// Read once at startup and passed explicitly to the adapter that needs it.
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AuditError::MissingCredential {
                variable: TOKEN_VARIABLE.to_string(),
            }
            .into());
        }
        Ok(Self { token })
    }

    /// Reads the token from `GITHUB_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the token through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match lookup(TOKEN_VARIABLE) {
            Some(token) => Self::new(token),
            None => Err(AuditError::MissingCredential {
                variable: TOKEN_VARIABLE.to_string(),
            }
            .into()),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

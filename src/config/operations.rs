//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{LintError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LintError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LintError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Otherwise `.overlay-lint.yaml` in `dir`
    /// is used when present, and defaults when not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config file");
            return Self::load(candidate);
        }

        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| LintError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LintError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `extensions` must be non-empty; entries are empty or start with `.`
    /// - `provenance_key` and `component_key` must be non-empty
    /// - `exclude` entries must be valid globs
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(LintError::UserError(
                "config validation failed: extensions must not be empty".to_string(),
            ));
        }

        for ext in &self.extensions {
            if !ext.is_empty() && !ext.starts_with('.') {
                return Err(LintError::UserError(format!(
                    "config validation failed: extensions entries must be empty or start with a dot (found '{}'). Use '.{}' instead.",
                    ext, ext
                )));
            }
        }

        if self.provenance_key.trim().is_empty() {
            return Err(LintError::UserError(
                "config validation failed: provenance_key must be non-empty".to_string(),
            ));
        }

        if self.component_key.trim().is_empty() {
            return Err(LintError::UserError(
                "config validation failed: component_key must be non-empty".to_string(),
            ));
        }

        self.exclude_set()?;
        Ok(())
    }

    /// Compile `exclude` into a glob set.
    pub fn exclude_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();

        for pattern in &self.exclude {
            let normalized = pattern.trim().replace('\\', "/");
            if normalized.is_empty() {
                continue;
            }
            let glob = Glob::new(&normalized).map_err(|e| {
                LintError::UserError(format!(
                    "config validation failed: invalid exclude pattern '{}': {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        builder
            .build()
            .map_err(|e| LintError::UserError(format!("failed to build exclude set: {}", e)))
    }
}

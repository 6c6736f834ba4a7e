//! Config loading, validation, and override operations.

use super::model::{Config, ConfigOverrides};
use crate::error::{PatchError, Result};
use crate::lock_table::{DigestUpdate, LockKey};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// An MD5 digest as hex. Terraform writes lowercase; either case is accepted.
static DIGEST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{32}$").expect("Invalid digest regex"));

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully parsed config (not yet validated)
    /// * `Err(PatchError::ConfigError)` - Read or parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PatchError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Missing fields take their default values. An empty document yields
    /// the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml)
            .map_err(|e| PatchError::ConfigError(format!("failed to parse config YAML: {}", e)))
    }

    /// Serialize config to YAML string.
    #[cfg(test)]
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PatchError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Build the effective config: defaults, then the optional file, then
    /// command-line overrides. The result is validated.
    pub fn resolve(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Replace every field for which an override is present.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(region) = &overrides.region {
            self.region = region.clone();
        }
        if let Some(table_name) = &overrides.table_name {
            self.table_name = table_name.clone();
        }
        if let Some(lock_id) = &overrides.lock_id {
            self.lock_id = lock_id.clone();
        }
        if let Some(digest) = &overrides.digest {
            self.digest = digest.clone();
        }
        if let Some(endpoint_url) = &overrides.endpoint_url {
            self.endpoint_url = Some(endpoint_url.clone());
        }
        if let Some(profile) = &overrides.profile {
            self.profile = Some(profile.clone());
        }
        if let Some(audit_log) = &overrides.audit_log {
            self.audit_log = Some(audit_log.clone());
        }
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `region`, `table_name` and `lock_id` must be non-empty
    /// - `digest` must be 32 hexadecimal characters
    /// - `endpoint_url`, when set, must be an http(s) URL
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("region", &self.region),
            ("table_name", &self.table_name),
            ("lock_id", &self.lock_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PatchError::ConfigError(format!(
                    "config validation failed: {} must not be empty",
                    field
                )));
            }
        }

        if !DIGEST_REGEX.is_match(&self.digest) {
            return Err(PatchError::ConfigError(format!(
                "config validation failed: digest must be 32 hexadecimal characters (found '{}')",
                self.digest
            )));
        }

        if let Some(url) = &self.endpoint_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(PatchError::ConfigError(format!(
                "config validation failed: endpoint_url must start with http:// or https:// (found '{}')",
                url
            )));
        }

        Ok(())
    }

    /// The record this config targets.
    pub fn lock_key(&self) -> LockKey {
        LockKey::new(&self.table_name, &self.lock_id)
    }

    /// The update request this config describes.
    pub fn digest_update(&self) -> DigestUpdate {
        DigestUpdate::new(self.lock_key(), &self.digest)
    }
}

//! Manifest configuration.
//!
//! An optional `media-manifest.toml` in the content root adjusts where the
//! manifest is written and how it is laid out. Stock defaults are the base
//! layer; the file only needs the keys it wants to change:
//!
//! ```toml
//! output = "content_data.json"  # Manifest path, relative to the working directory
//! indent = 4                    # Spaces per JSON indentation level (0-16)
//! ```
//!
//! Unknown keys are rejected to catch typos early. A file that cannot be used
//! never stops a run: [`load_config_or_default`] hands back the stock defaults
//! together with the error so the caller can warn about it. Which file
//! extensions are listed is fixed and not part of the config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the content root.
pub const CONFIG_FILE_NAME: &str = "media-manifest.toml";

const MAX_INDENT: usize = 16;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings loaded from `media-manifest.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Where the manifest is written, relative to the working directory.
    pub output: String,
    /// Spaces per indentation level in the JSON output.
    pub indent: usize,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            output: "content_data.json".to_string(),
            indent: 4,
        }
    }
}

impl ManifestConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.indent > MAX_INDENT {
            return Err(ConfigError::Validation(format!(
                "indent must be 0-{MAX_INDENT}"
            )));
        }
        Ok(())
    }
}

/// Stock defaults as a TOML table, the base layer for merging.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(ManifestConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read the config file from `dir` as a raw value, `Ok(None)` if there is none.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto `base`, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ManifestConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ManifestConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config for a content root, falling back to stock defaults.
pub fn load_config(root: &Path) -> Result<ManifestConfig, ConfigError> {
    resolve_config(stock_defaults_value()?, load_raw_config(root)?)
}

/// Like [`load_config`], but an unusable file falls back to stock defaults.
///
/// The error, if any, is returned next to the config so the caller can report
/// it.
pub fn load_config_or_default(root: &Path) -> (ManifestConfig, Option<ConfigError>) {
    match load_config(root) {
        Ok(config) => (config, None),
        Err(err) => (ManifestConfig::default(), Some(err)),
    }
}

/// A fully commented stock config file, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# media-manifest configuration
# ============================
# Place this file in the content root as media-manifest.toml.
# If it cannot be parsed, a warning is printed and the defaults are used.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Manifest path, relative to the working directory.
# The --output flag takes precedence over this value.
output = "content_data.json"

# Spaces per JSON indentation level (0-16).
indent = 4
"##
}

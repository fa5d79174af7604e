//! Manifest configuration module.
//!
//! Handles loading, validating, and merging `photo-manifest.toml`. The file is
//! optional: without it the tool writes the customer-photos manifest only,
//! which is what a bare run has always done.
//!
//! ## Config File Location
//!
//! ```text
//! site/                         # Repository root (--root, default ".")
//! ├── photo-manifest.toml       # Optional
//! └── img/
//!     ├── customer_photos/
//!     │   └── manifest.json     # Written
//!     └── partners/
//!         └── manifest.json     # Written when listed as a target
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! extensions = ["jpg", "jpeg", "png", "webp", "svg"]
//! numbered_prefix = "vinvel_cus_"
//!
//! [[manifests]]
//! dir = "img/customer_photos"
//! order = "numbered"        # or "alphabetical"
//! # base_path = "img/customer_photos/"   # defaults to dir + "/"
//! ```
//!
//! ## Partial Configuration
//!
//! The file is merged over the stock defaults key by key, so overriding
//! `numbered_prefix` alone keeps the default targets. Arrays are replaced
//! whole: a file that lists `[[manifests]]` owns the complete target list.
//!
//! Unknown keys are rejected to catch typos early.

use crate::ordering::{DEFAULT_NUMBERED_PREFIX, Order};
use crate::scan::IMAGE_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file in the repository root.
pub const CONFIG_FILE_NAME: &str = "photo-manifest.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `photo-manifest.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Image extensions to list, without the dot. Matched case-insensitively.
    pub extensions: Vec<String>,
    /// Marker that precedes a customer number in a file name.
    pub numbered_prefix: String,
    /// Gallery directories to write a manifest for, in run order.
    pub manifests: Vec<Target>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            numbered_prefix: DEFAULT_NUMBERED_PREFIX.to_string(),
            manifests: vec![Target::customer_photos()],
        }
    }
}

/// One gallery directory and how its manifest is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    /// Directory relative to the repository root, `/`-separated.
    pub dir: String,
    /// `basePath` written into the manifest. Defaults to `dir` plus `/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(default)]
    pub order: Order,
}

impl Target {
    pub fn customer_photos() -> Self {
        Self {
            dir: "img/customer_photos".to_string(),
            base_path: None,
            order: Order::Numbered,
        }
    }

    /// The `basePath` value, always with exactly one trailing `/`.
    pub fn base_path(&self) -> String {
        let raw = self.base_path.as_deref().unwrap_or(&self.dir);
        format!("{}/", raw.trim_end_matches('/'))
    }

    /// Manifest location relative to the root, for display.
    pub fn manifest_display_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.dir.trim_end_matches('/'), file_name)
    }

    /// Absolute (or root-relative) path of the gallery directory.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        self.dir
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(root.to_path_buf(), |path, part| path.join(part))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let trimmed = self.dir.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::Validation(
                "manifests.dir must not be empty".into(),
            ));
        }
        let only_normal = Path::new(trimmed)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !only_normal {
            return Err(ConfigError::Validation(format!(
                "manifests.dir must be a plain relative path: {}",
                self.dir
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        for ext in &self.extensions {
            if ext.is_empty() || ext.contains('.') {
                return Err(ConfigError::Validation(format!(
                    "extensions must be given without a dot: {ext:?}"
                )));
            }
        }
        if self.numbered_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "numbered_prefix must not be empty".into(),
            ));
        }
        if self.manifests.is_empty() {
            return Err(ConfigError::Validation(
                "manifests must list at least one directory".into(),
            ));
        }
        let mut seen = HashSet::new();
        for target in &self.manifests {
            target.validate()?;
            if !seen.insert(target.dir.trim_end_matches('/')) {
                return Err(ConfigError::Validation(format!(
                    "manifests.dir listed twice: {}",
                    target.dir
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(Config::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
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

/// Load `photo-manifest.toml` from the root as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<Config, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `photo-manifest.toml` in the given root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<Config, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `photo-manifest.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# photo-manifest configuration
# ============================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Image extensions to list, without the dot. Case-insensitive.
extensions = ["jpg", "jpeg", "png", "webp", "svg"]

# Files whose name contains this prefix followed by digits are customer
# photos. They are listed first, ordered by that number.
numbered_prefix = "vinvel_cus_"

# ---------------------------------------------------------------------------
# Manifests
# ---------------------------------------------------------------------------
# One table per gallery directory. Listing any [[manifests]] replaces the
# whole default list.
#
#   dir        directory relative to the repository root
#   order      "numbered" (customer photos first) or "alphabetical"
#   base_path  basePath written to the manifest (default: dir + "/")

[[manifests]]
dir = "img/customer_photos"
order = "numbered"

# [[manifests]]
# dir = "img/partners"
# order = "alphabetical"
"##
}

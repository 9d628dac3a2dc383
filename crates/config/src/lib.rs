//! Configuration loading and validation for ribbonboard.
//!
//! Loads configuration from `~/.ribbonboard/config.toml` with environment
//! variable overrides. Every setting has a default, so a missing file is
//! not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.ribbonboard/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pixels per ribbon unit when rendering
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Catalog file layered over the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Default records file for `ribbonboard records`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_path: Option<PathBuf>,

    /// Where generated files are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Board row layout
    #[serde(default)]
    pub board: BoardConfig,

    /// Per-count variant generation
    #[serde(default)]
    pub variants: VariantsConfig,
}

fn default_scale() -> f64 {
    3.0
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Upper bound on `scale`; beyond this a single ribbon is wider than most
/// screens.
const MAX_SCALE: f64 = 20.0;

/// How entries are broken into rows on a ribbon board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Boards with at least this many entries use `wide_columns`
    #[serde(default = "default_wide_threshold")]
    pub wide_threshold: usize,

    #[serde(default = "default_narrow_columns")]
    pub narrow_columns: usize,

    #[serde(default = "default_wide_columns")]
    pub wide_columns: usize,
}

fn default_wide_threshold() -> usize {
    12
}
fn default_narrow_columns() -> usize {
    3
}
fn default_wide_columns() -> usize {
    4
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            wide_threshold: default_wide_threshold(),
            narrow_columns: default_narrow_columns(),
            wide_columns: default_wide_columns(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantsConfig {
    /// Highest award count considered when listing distinguishable counts
    #[serde(default = "default_max_count")]
    pub max_count: u32,
}

fn default_max_count() -> u32 {
    20
}

impl Default for VariantsConfig {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.ribbonboard/config.toml).
    ///
    /// Environment variables override the file:
    /// - `RIBBONBOARD_SCALE`
    /// - `RIBBONBOARD_CATALOG`
    /// - `RIBBONBOARD_OUTPUT_DIR`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let mut config = Self::load_from(&config_path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the environment. `lookup` returns the value of
    /// a variable, if set.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(scale) = lookup("RIBBONBOARD_SCALE") {
            self.scale = scale.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("RIBBONBOARD_SCALE is not a number: {scale}"))
            })?;
        }

        if let Some(catalog) = lookup("RIBBONBOARD_CATALOG") {
            self.catalog_path = Some(PathBuf::from(catalog));
        }

        if let Some(dir) = lookup("RIBBONBOARD_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".ribbonboard")
    }

    /// Path of the default config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale.is_finite() && self.scale > 0.0 && self.scale <= MAX_SCALE) {
            return Err(ConfigError::ValidationError(format!(
                "scale must be greater than 0 and at most {MAX_SCALE}"
            )));
        }

        if self.board.narrow_columns == 0 || self.board.wide_columns == 0 {
            return Err(ConfigError::ValidationError(
                "board columns must be at least 1".into(),
            ));
        }

        if self.variants.max_count == 0 {
            return Err(ConfigError::ValidationError(
                "variants.max_count must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `config init`).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            catalog_path: None,
            records_path: None,
            output_dir: default_output_dir(),
            board: BoardConfig::default(),
            variants: VariantsConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

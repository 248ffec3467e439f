//! Configuration loading and config file resolution
//!
//! Configuration is bootstrap-only: it shapes logging, output formatting and
//! batch throughput, never classification results.
//!
//! # Config File Priority
//!
//! 1. Command-line argument (`--config`)
//! 2. Environment variable (`AMRC_CONFIG`)
//! 3. Platform config directory (`<config_dir>/amrc/<module>.toml`)
//! 4. Built-in defaults (no file)
//!
//! A missing file degrades to defaults with a warning. A file that exists but
//! cannot be read or parsed is a configuration error.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "AMRC_CONFIG";

/// Environment variable overriding the configured log level
pub const LOG_LEVEL_ENV_VAR: &str = "AMRC_LOG_LEVEL";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// JSON output configuration (optional)
    #[serde(default)]
    pub output: OutputConfig,

    /// Batch classification configuration (optional)
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Emit the flattened summary projection instead of the full result
    #[serde(default)]
    pub summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            summary: false,
        }
    }
}

/// Batch classification configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum number of reports classified at once
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_max_concurrency() -> usize {
    8
}

/// Config file resolver for one module
///
/// Resolves which TOML file (if any) should be read, following the
/// CLI → ENV → platform default priority.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    module_name: String,
}

impl ConfigResolver {
    /// Create resolver for a module (file stem of the default config file)
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
        }
    }

    /// Resolve config file path
    ///
    /// Returns `None` when no explicit path is given and the platform default
    /// file does not exist.
    pub fn resolve(&self, cli_arg: Option<&Path>) -> Option<PathBuf> {
        // Priority 1: Command-line argument
        if let Some(path) = cli_arg {
            return Some(path.to_path_buf());
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        // Priority 3: Platform config directory
        let default_path = self.default_config_path()?;
        if default_path.exists() {
            Some(default_path)
        } else {
            None
        }
    }

    /// Platform default config file path (`<config_dir>/amrc/<module>.toml`)
    pub fn default_config_path(&self) -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("amrc").join(format!("{}.toml", self.module_name)))
    }

    /// Resolve and load configuration, falling back to defaults
    pub fn load(&self, cli_arg: Option<&Path>) -> Result<TomlConfig> {
        match self.resolve(cli_arg) {
            Some(path) => load_toml_config(&path),
            None => {
                info!("No config file found for {}, using built-in defaults", self.module_name);
                Ok(TomlConfig::default())
            }
        }
    }
}

/// Load TOML configuration from a file
///
/// Missing file → warning + defaults. Unreadable or malformed file → error.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!("Config file {} not found, using built-in defaults", path.display());
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed ({}): {}", path.display(), e)))?;

    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))?;

    if config.batch.max_concurrency == 0 {
        return Err(Error::Config(format!(
            "batch.max_concurrency must be at least 1 ({})",
            path.display()
        )));
    }

    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Resolve effective log level
///
/// **Priority:** CLI → `AMRC_LOG_LEVEL` → TOML → "info"
pub fn resolve_log_level(cli_level: Option<&str>, config: &TomlConfig) -> String {
    if let Some(level) = cli_level.filter(|l| !l.trim().is_empty()) {
        return level.trim().to_lowercase();
    }

    if let Ok(level) = std::env::var(LOG_LEVEL_ENV_VAR) {
        if !level.trim().is_empty() {
            return level.trim().to_lowercase();
        }
    }

    config.logging.level.trim().to_lowercase()
}

//! Configuration file support for the ltlsimp CLI
//!
//! Supports loading configuration from .ltlsimprc files in:
//! - Custom path via environment variable
//! - Current directory
//! - User home directory

use anyhow::{Context, Result};
use ltlsimp_ir::{SimplifierConfig, Strategy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const FILE_NAME: &str = ".ltlsimprc";
const ENV_VAR: &str = "LTLSIMP_CONFIG";

/// Configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default simplification strategy
    pub strategy: String,

    /// Default output format (text, json, stats)
    pub output_format: String,

    /// Upper bound on simplification passes
    pub max_passes: usize,

    /// Enable colored output
    pub colored: bool,

    /// Log filter used when RUST_LOG is unset
    pub log_level: String,

    /// Batch settings
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Show a progress bar
    pub progress: bool,

    /// Stop at the first failing formula
    pub fail_fast: bool,
}

impl Default for Config {
    fn default() -> Self {
        let simplifier = SimplifierConfig::default();
        Self {
            strategy: simplifier.strategy.name().to_string(),
            output_format: "text".to_string(),
            max_passes: simplifier.max_passes,
            colored: true,
            log_level: "warn".to_string(),
            batch: BatchConfig::default(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            progress: true,
            fail_fast: false,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Find and load configuration file
    ///
    /// Search order:
    /// 1. LTLSIMP_CONFIG environment variable
    /// 2. .ltlsimprc in current directory
    /// 3. .ltlsimprc in user home directory
    ///
    /// A file that exists but does not parse is an error; a missing file falls
    /// through to the next location and finally to the defaults.
    pub fn load_default() -> Result<Self> {
        match Self::find() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn find() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        let current = PathBuf::from(FILE_NAME);
        if current.exists() {
            return Some(current);
        }

        dirs::home_dir()
            .map(|home| home.join(FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Get configuration file path (environment, current or home)
    pub fn config_path() -> PathBuf {
        if let Some(path) = Self::find() {
            return path;
        }

        // Default to home directory
        match dirs::home_dir() {
            Some(home) => home.join(FILE_NAME),
            None => PathBuf::from(FILE_NAME),
        }
    }

    /// Create a default configuration file, refusing to overwrite one
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path();
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        Self::default().save(&path)?;
        Ok(path)
    }

    pub fn strategy(&self) -> Result<Strategy> {
        self.strategy
            .parse()
            .context("Invalid strategy in configuration or --strategy")
    }

    pub fn simplifier_config(&self) -> Result<SimplifierConfig> {
        if self.max_passes == 0 {
            anyhow::bail!("max_passes must be at least 1");
        }
        Ok(SimplifierConfig::with_strategy(self.strategy()?).with_max_passes(self.max_passes))
    }
}

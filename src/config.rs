//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-generator.toml` in current directory
//! 4. `~/.config/sql-generator/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [output]
//! directory = "./storage"
//!
//! [input]
//! missing_markers = ["", "NA", "N/A", "NULL", "null"]
//!
//! [select]
//! default_limit = "10"
//! default_offset = "0"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_GENERATOR_OUTPUT_DIR` | Directory for generated `.sql` files |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{AppResult, config_error},
    statement::{DEFAULT_LIMIT, DEFAULT_OFFSET}
};

/// Local config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".sql-generator.toml";

/// Environment variable overriding the output directory
pub const OUTPUT_DIR_ENV: &str = "SQL_GENERATOR_OUTPUT_DIR";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub input:  InputConfig,
    #[serde(default)]
    pub select: SelectConfig
}

/// Where generated files are written
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir()
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./storage")
}

/// Input reader settings
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Exact cell texts the CSV and Excel readers load as missing
    #[serde(default = "default_missing_markers")]
    pub missing_markers: Vec<String>
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            missing_markers: default_missing_markers()
        }
    }
}

fn default_missing_markers() -> Vec<String> {
    [
        "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
        "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null"
    ]
    .iter()
    .map(|marker| marker.to_string())
    .collect()
}

/// SELECT defaults applied to blank answers
#[derive(Debug, Clone, Deserialize)]
pub struct SelectConfig {
    #[serde(default = "default_limit")]
    pub default_limit:  String,
    #[serde(default = "default_offset")]
    pub default_offset: String
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            default_limit:  default_limit(),
            default_offset: default_offset()
        }
    }
}

fn default_limit() -> String {
    String::from(DEFAULT_LIMIT)
}

fn default_offset() -> String {
    String::from(DEFAULT_OFFSET)
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-generator.toml)
    /// 3. Config file in home directory (~/.config/sql-generator/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-generator")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        if let Some(dir) = env::var_os(OUTPUT_DIR_ENV) {
            debug!(dir = ?dir, "output directory from environment");
            config.output.directory = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Parse a single TOML config file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml("[output]\ndirectory = \"out\"\n").unwrap();
        assert_eq!(config.output.directory, PathBuf::from("out"));
        assert_eq!(config.select.default_limit, "10");
        assert!(config.input.missing_markers.contains(&"NA".to_string()));
    }

    #[test]
    fn test_invalid_file_is_error() {
        assert!(Config::from_toml("[output\n").is_err());
    }
}

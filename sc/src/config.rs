//! Configuration for schemacheck

use eyre::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Collection document checked when no path is given on the command line
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(default)]
    pub log_level: Option<String>,

    /// Print the follow-up hint after a passing run
    #[serde(default = "default_show_next_steps")]
    pub show_next_steps: bool,
}

fn default_input_path() -> PathBuf {
    PathBuf::from(crate::DEFAULT_INPUT_FILE)
}

fn default_show_next_steps() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            log_level: None,
            show_next_steps: default_show_next_steps(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_file(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("schemacheck").join("config.yml")),
            Some(PathBuf::from("schemacheck.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_file(path);
            }
        }

        Ok(Config::default())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context(format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            serde_yaml::from_str(&content).context(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "STRATUS_API_KEY";

/// Top-level configuration stored on disk.
///
/// The OpenWeatherMap key is deliberately not a constant in the source: it
/// lives in the config file or in [`API_KEY_ENV`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,

    /// City fetched on startup when no `--city` flag is given.
    pub default_city: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "stratus", "stratus")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// The API key to use: the environment override wins, then the stored key.
    pub fn resolved_api_key(&self) -> Result<String> {
        self.api_key_with_env(env::var(API_KEY_ENV).ok()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `stratus configure` and enter your OpenWeatherMap key,\n\
                 or set the {API_KEY_ENV} environment variable."
            )
        })
    }

    fn api_key_with_env(&self, env_key: Option<String>) -> Option<String> {
        env_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone())
            .filter(|k| !k.trim().is_empty())
    }
}

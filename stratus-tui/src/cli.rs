use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stratus_core::Config;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "stratus", version, about = "Terminal weather lookup")]
pub struct Cli {
    /// City fetched on startup. Falls back to the configured default city,
    /// then to "London".
    #[arg(long, short)]
    pub city: Option<String>,

    /// Append tracing output to this file. Nothing is logged without it,
    /// since stderr belongs to the terminal UI.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key in the platform config file.
    Configure,
}

impl Cli {
    pub fn startup_city(&self, config: &Config) -> String {
        self.city
            .clone()
            .or_else(|| config.default_city.clone())
            .unwrap_or_else(|| "London".to_string())
    }
}

/// Prompt for the API key and persist it.
pub fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key from prompt")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(city: Option<&str>) -> Cli {
        Cli {
            city: city.map(str::to_string),
            log_file: None,
            command: None,
        }
    }

    #[test]
    fn startup_city_defaults_to_london() {
        assert_eq!(cli(None).startup_city(&Config::default()), "London");
    }

    #[test]
    fn configured_default_city_beats_london() {
        let config = Config {
            default_city: Some("Tokyo".into()),
            ..Config::default()
        };
        assert_eq!(cli(None).startup_city(&config), "Tokyo");
    }

    #[test]
    fn explicit_flag_beats_configured_default() {
        let config = Config {
            default_city: Some("Tokyo".into()),
            ..Config::default()
        };
        assert_eq!(cli(Some("Paris")).startup_city(&config), "Paris");
    }
}

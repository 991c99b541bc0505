use crate::constants::env_vars;
use crate::constants::season::{DEFAULT_START_MONTH, DEFAULT_START_YEAR};
use crate::error::AppError;
use crate::match_data::{MatchFilter, SeasonWindow};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Calendar year in which the processed season starts.
    #[serde(default = "default_season_start_year")]
    pub season_start_year: i32,
    /// First month (1-12) that still belongs to the starting year.
    #[serde(default = "default_season_start_month")]
    pub season_start_month: u32,
    /// Only process records of this league, e.g. "Premier-league".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
    /// Only process records with this season label, e.g. "2022/2023".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_label: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_season_start_year() -> i32 {
    DEFAULT_START_YEAR
}

fn default_season_start_month() -> u32 {
    DEFAULT_START_MONTH
}

impl Default for Config {
    fn default() -> Self {
        Config {
            season_start_year: default_season_start_year(),
            season_start_month: default_season_start_month(),
            league: None,
            season_label: None,
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `MATCH_PROFILES_LOG_FILE` - Override log file path
    /// - `MATCH_PROFILES_SEASON_START_YEAR` - Override season start year
    /// - `MATCH_PROFILES_LEAGUE` - Override league filter
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Error occurred during load or validation
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(year) = std::env::var(env_vars::SEASON_START_YEAR)
            .ok()
            .and_then(|s| s.parse::<i32>().ok())
        {
            self.season_start_year = year;
        }

        if let Ok(league) = std::env::var(env_vars::LEAGUE) {
            self.league = Some(league);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            self.season_start_month,
            &self.league,
            &self.season_label,
            &self.log_file_path,
        )
    }

    /// Season boundaries used to resolve `DD.MM` match days.
    pub fn season_window(&self) -> SeasonWindow {
        SeasonWindow::new(self.season_start_year, self.season_start_month)
    }

    /// League and season-label filter for the feature stage.
    pub fn match_filter(&self) -> MatchFilter {
        MatchFilter {
            league: self.league.clone(),
            season_label: self.season_label.clone(),
        }
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using defaults)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Season:");
        println!(
            "starts {}-{:02}",
            config.season_start_year, config.season_start_month
        );
        println!("────────────────────────────────────");
        println!("League Filter:");
        println!("{}", config.league.as_deref().unwrap_or("(all leagues)"));
        println!("────────────────────────────────────");
        println!("Season Label Filter:");
        println!(
            "{}",
            config.season_label.as_deref().unwrap_or("(all seasons)")
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", crate::constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the sports-data API, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Directory that receives the dated JSON files. Created on demand.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Timeout for listing, detail and channel-map requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Timeout for a single channel-name lookup.
    #[serde(default = "default_channel_timeout")]
    pub channel_timeout_seconds: u64,
    /// Only the first `max_events` listed events are enriched.
    #[serde(default = "default_max_events")]
    pub max_events: usize,
    /// Pause between successive events, in milliseconds.
    #[serde(default = "default_event_delay_ms")]
    pub event_delay_ms: u64,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_output_dir() -> String {
    constants::DEFAULT_OUTPUT_DIR.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_channel_timeout() -> u64 {
    constants::DEFAULT_CHANNEL_TIMEOUT_SECONDS
}

fn default_max_events() -> usize {
    constants::DEFAULT_MAX_EVENTS
}

fn default_event_delay_ms() -> u64 {
    constants::DEFAULT_EVENT_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            output_dir: default_output_dir(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            channel_timeout_seconds: default_channel_timeout(),
            max_events: default_max_events(),
            event_delay_ms: default_event_delay_ms(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the built-in defaults are used; the tool is
    /// meant to run unattended, so there is no first-run prompt.
    ///
    /// The result is not validated: command line overrides still apply on
    /// top of it, so callers validate once those are in place.
    ///
    /// # Environment Variables
    /// - `FIXTURE_TV_API_URL` - Override API base URL
    /// - `FIXTURE_TV_OUTPUT_DIR` - Override output directory
    /// - `FIXTURE_TV_LOG_FILE` - Override log file path
    /// - `FIXTURE_TV_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `FIXTURE_TV_MAX_EVENTS` - Override the per-date event cap
    /// - `FIXTURE_TV_EVENT_DELAY_MS` - Override the pause between events
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_env(&get_config_path()).await
    }

    /// Reads `config_path` if it exists (defaults otherwise) and applies
    /// `FIXTURE_TV_*` environment overrides.
    pub async fn load_with_env(config_path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(config_path).exists() {
            Self::load_from_path(config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Overrides fields from `FIXTURE_TV_*` environment variables.
    /// Unparseable numeric values are ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::API_URL) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = dir;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = parse_env::<u64>(env_vars::HTTP_TIMEOUT) {
            self.http_timeout_seconds = timeout;
        }

        if let Some(max_events) = parse_env::<usize>(env_vars::MAX_EVENTS) {
            self.max_events = max_events;
        }

        if let Some(delay) = parse_env::<u64>(env_vars::EVENT_DELAY_MS) {
            self.event_delay_ms = delay;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_base_url,
            &self.output_dir,
            &self.log_file_path,
            self.http_timeout_seconds,
            self.channel_timeout_seconds,
            self.max_events,
        )
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config_exists = Path::new(&config_path).exists();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !config_exists {
            println!("(Not found, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url);
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", config.output_dir);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!(
            "{} seconds ({} seconds per channel lookup)",
            config.http_timeout_seconds, config.channel_timeout_seconds
        );
        println!("────────────────────────────────────");
        println!("Event Cap / Delay:");
        println!("{} events, {} ms", config.max_events, config.event_delay_ms);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if needed. A trailing slash on the base URL is dropped.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    /// A trailing slash on the base URL is dropped.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let mut config: Config = toml::from_str(&content)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {name}={raw}: not a valid number");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::API_URL);
            std::env::remove_var(env_vars::OUTPUT_DIR);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
            std::env::remove_var(env_vars::MAX_EVENTS);
            std::env::remove_var(env_vars::EVENT_DELAY_MS);
        }
    }

    #[test]
    fn test_default_config_matches_constants() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://api.sofascore.com/api/v1");
        assert_eq!(config.output_dir, "date");
        assert_eq!(config.max_events, 50);
        assert_eq!(config.log_file_path, None);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_config_load_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
output_dir = "/srv/fixtures"
max_events = 20
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.output_dir, "/srv/fixtures");
        assert_eq!(config.max_events, 20);
        assert_eq!(config.api_base_url, constants::DEFAULT_API_BASE_URL);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert_eq!(config.event_delay_ms, constants::DEFAULT_EVENT_DELAY_MS);
    }

    #[tokio::test]
    async fn test_config_save_creates_directory_and_trims_slash() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("fixture_tv");
        let config_path = config_dir.join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_base_url: "https://api.example.com/api/v1/".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            ..Config::default()
        };

        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_dir.exists());

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.api_base_url, "https://api.example.com/api/v1");
        assert_eq!(loaded.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(loaded.max_events, config.max_events);
    }

    #[tokio::test]
    async fn test_config_file_base_url_trailing_slash_is_dropped() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            "api_base_url = \"https://api.example.com/api/v1/\"\n",
        )
        .await
        .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com/api/v1");
        assert_eq!(
            crate::data_fetcher::api::build_event_url(&config.api_base_url, 7),
            "https://api.example.com/api/v1/event/7"
        );
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "max_events = \"many")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("fixture_tv"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("fixture_tv"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let invalid_configs = vec![
            Config {
                api_base_url: String::new(),
                ..Config::default()
            },
            Config {
                api_base_url: "api.sofascore.com".to_string(),
                ..Config::default()
            },
            Config {
                output_dir: "  ".to_string(),
                ..Config::default()
            },
            Config {
                http_timeout_seconds: 0,
                ..Config::default()
            },
            Config {
                max_events: 0,
                ..Config::default()
            },
            Config {
                log_file_path: Some(String::new()),
                ..Config::default()
            },
        ];

        for config in invalid_configs {
            assert!(
                config.validate().is_err(),
                "Config should be invalid: {config:?}"
            );
        }
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::API_URL, "http://localhost:9000/api/v1/");
            std::env::set_var(env_vars::OUTPUT_DIR, "/tmp/fixtures");
            std::env::set_var(env_vars::MAX_EVENTS, "5");
            std::env::set_var(env_vars::EVENT_DELAY_MS, "0");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.api_base_url, "http://localhost:9000/api/v1");
        assert_eq!(config.output_dir, "/tmp/fixtures");
        assert_eq!(config.max_events, 5);
        assert_eq!(config.event_delay_ms, 0);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );

        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_load_with_env_leaves_validation_to_caller() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::MAX_EVENTS, "0");
        }
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("absent.toml");

        let config = Config::load_with_env(&missing.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.max_events, 0);
        assert!(config.validate().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_env_numbers_are_ignored() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
            std::env::set_var(env_vars::MAX_EVENTS, "-3");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert_eq!(config.max_events, constants::DEFAULT_MAX_EVENTS);

        clear_env();
    }
}

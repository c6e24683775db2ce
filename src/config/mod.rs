use crate::constants;
use crate::error::AppError;
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
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API domain for fetching team data. Should include https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the built-in VexDB API domain is used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `VEXINFO_API_DOMAIN` - Override API domain
    /// - `VEXINFO_LOG_FILE` - Override log file path
    /// - `VEXINFO_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or defaulted configuration
    /// * `Err(AppError)` - Error occurred during load
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Override with environment variables if present
        if let Ok(api_domain) = std::env::var(constants::env_vars::API_DOMAIN) {
            config.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var(constants::env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(constants::env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            &self.log_file_path,
            self.http_timeout_seconds,
        )
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    ///
    /// # Notes
    /// - Creates config directory if it doesn't exist
    /// - Ensures api_domain has https:// prefix
    /// - Uses TOML format for storage
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

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/vexinfo.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("Using built-in defaults (API domain: {})", constants::DEFAULT_API_DOMAIN);
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the API
    /// domain has the proper https:// prefix.
    ///
    /// # Arguments
    /// * `path` - The file path where the configuration should be saved
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_domain = if !self.api_domain.starts_with("https://") {
            format!("https://{}", self.api_domain.trim_start_matches("http://"))
        } else {
            self.api_domain.clone()
        };
        let content = toml::to_string_pretty(&Config {
            api_domain,
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_domain = "https://api.example.com"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_domain, "https://api.example.com");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
    }

    #[tokio::test]
    async fn test_config_defaults_when_fields_missing() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        // An empty file should fall back to built-in defaults for every field
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config.api_domain, constants::DEFAULT_API_DOMAIN);
        assert_eq!(config.log_file_path, None);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[tokio::test]
    async fn test_config_save_new_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: default_http_timeout(),
        };
        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded_config.api_domain, "https://api.example.com");
        assert_eq!(
            loaded_config.log_file_path,
            Some("/custom/log/path".to_string())
        );
    }

    #[tokio::test]
    async fn test_config_save_without_https_prefix() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_domain: "api.example.com".to_string(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        };
        config.save_to_path(&config_path_str).await.unwrap();
        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded_config.api_domain, "https://api.example.com");
    }

    #[tokio::test]
    async fn test_config_save_with_http_prefix() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_domain: "http://api.example.com".to_string(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        };
        config.save_to_path(&config_path_str).await.unwrap();
        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded_config.api_domain, "https://api.example.com");
    }

    #[tokio::test]
    async fn test_config_save_creates_nested_directories() {
        let temp_dir = tempdir().unwrap();
        let nested_path = temp_dir
            .path()
            .join("level1")
            .join("level2")
            .join("config.toml");
        let nested_path_str = nested_path.to_string_lossy();

        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        };

        config.save_to_path(&nested_path_str).await.unwrap();
        assert!(nested_path.exists());
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");
        let config_path_str = config_path.to_string_lossy();

        let malformed_content = r#"
api_domain = "https://api.example.com"
[invalid_section
malformed = "data
"#;
        tokio::fs::write(&config_path, malformed_content)
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path_str).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();

        assert!(config_path.contains("vexinfo"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();

        assert!(log_dir_path.contains("vexinfo"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    fn test_config_serialization_deserialization() {
        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: default_http_timeout(),
        };

        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(toml_string.contains("api_domain = \"https://api.example.com\""));
        assert!(toml_string.contains("log_file_path = \"/custom/log/path\""));

        let deserialized_config: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(config.api_domain, deserialized_config.api_domain);
        assert_eq!(config.log_file_path, deserialized_config.log_file_path);
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        };

        // log_file_path should not appear in TOML when it's None due to skip_serializing_if
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(!toml_string.contains("log_file_path"));
    }

    #[test]
    fn test_config_validation_valid_configs() {
        let valid_configs = vec![
            Config {
                api_domain: "https://api.vexdb.io".to_string(),
                log_file_path: None,
                http_timeout_seconds: default_http_timeout(),
            },
            Config {
                api_domain: "http://localhost:8080".to_string(),
                log_file_path: Some("/tmp/test.log".to_string()),
                http_timeout_seconds: default_http_timeout(),
            },
            Config {
                api_domain: "api.example.com".to_string(),
                log_file_path: None,
                http_timeout_seconds: default_http_timeout(),
            },
        ];

        for config in valid_configs {
            assert!(
                config.validate().is_ok(),
                "Config should be valid: {config:?}"
            );
        }
    }

    #[test]
    fn test_config_validation_invalid_configs() {
        let invalid_configs = vec![
            // Empty API domain
            Config {
                api_domain: "".to_string(),
                log_file_path: None,
                http_timeout_seconds: default_http_timeout(),
            },
            // Invalid domain format
            Config {
                api_domain: "invalid_domain".to_string(),
                log_file_path: None,
                http_timeout_seconds: default_http_timeout(),
            },
            // Empty log file path
            Config {
                api_domain: "https://api.vexdb.io".to_string(),
                log_file_path: Some("".to_string()),
                http_timeout_seconds: default_http_timeout(),
            },
        ];

        for config in invalid_configs {
            assert!(
                config.validate().is_err(),
                "Config should be invalid: {config:?}"
            );
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_environment_variable_override() {
        unsafe {
            std::env::set_var(constants::env_vars::API_DOMAIN, "https://env.example.com");
            std::env::set_var(constants::env_vars::HTTP_TIMEOUT, "55");
        }

        let config = Config::load().await.unwrap();
        assert_eq!(config.api_domain, "https://env.example.com");
        assert_eq!(config.http_timeout_seconds, 55);

        unsafe {
            std::env::remove_var(constants::env_vars::API_DOMAIN);
            std::env::remove_var(constants::env_vars::HTTP_TIMEOUT);
        }
    }
}

//! Configuration management for a11yscan
//!
//! Supports environment variables, config files, and runtime overrides.
//! The analysis endpoint, model, and extraction container are all
//! interchangeable via settings.
//!
//! Config file location: ~/.config/a11yscan/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{AuditError, Result};

/// Main configuration for a11yscan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote analysis endpoint configuration
    pub api: ApiConfig,
    /// Analysis tuning
    pub analysis: AnalysisConfig,
    /// Browser automation configuration
    pub browser: BrowserConfig,
    /// Application behavior
    #[serde(default)]
    pub app: AppConfig,
}

/// Remote chat-completion endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full URL of the chat-completions endpoint
    pub endpoint: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Analysis request tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sampling temperature for the remote model
    pub temperature: f32,
    /// Maximum output tokens for the report
    pub max_tokens: u32,
    /// DOM element id preferred over the whole document when extracting.
    /// Server-rendered sites often wrap meaningful content in one container;
    /// narrowing to it keeps the prompt small.
    pub container_id: String,
}

/// Browser automation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Whether the browser extractor is enabled
    pub enabled: bool,
    /// Session name for agent-browser
    pub session_name: String,
}

/// Application behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Whether to show debug output
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            analysis: AnalysisConfig::default(),
            browser: BrowserConfig::default(),
            app: AppConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: env::var("A11YSCAN_ENDPOINT")
                .unwrap_or_else(|_| "https://sourcegraph.com/.api/llm/chat/completions".to_string()),
            model: env::var("A11YSCAN_MODEL")
                .unwrap_or_else(|_| "google::v1::gemini-2.0-flash".to_string()),
            timeout_secs: 120,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 8192,
            container_id: env::var("A11YSCAN_CONTAINER_ID")
                .unwrap_or_else(|_| "ctl00_masterPageBody".to_string()),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            enabled: env::var("A11YSCAN_BROWSER_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
            session_name: env::var("A11YSCAN_BROWSER_SESSION")
                .unwrap_or_else(|_| "a11yscan".to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: env::var("A11YSCAN_DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("a11yscan")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the credential file path
    pub fn credentials_file() -> PathBuf {
        Self::config_dir().join("credentials.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(AuditError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| AuditError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AuditError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| AuditError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AuditError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| AuditError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Save configuration and return the path
    pub fn save_and_get_path(&self) -> Result<PathBuf> {
        self.save()?;
        Ok(Self::config_file())
    }

    /// Check if a config file exists
    pub fn config_exists() -> bool {
        Self::config_file().exists()
    }

    /// Client identification string sent with every remote request
    pub fn client_id() -> String {
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config)
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api.endpoint.starts_with("https://"));
        assert_eq!(config.analysis.temperature, 0.7);
        assert_eq!(config.analysis.max_tokens, 8192);
        assert_eq!(config.analysis.container_id, "ctl00_masterPageBody");
        assert!(config.browser.enabled);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("endpoint"));
        assert!(toml_str.contains("container_id"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.api.model, config.api.model);
    }

    #[test]
    fn test_config_dir() {
        let dir = Config::config_dir();
        assert!(dir.to_string_lossy().contains("a11yscan"));
    }

    #[test]
    fn test_client_id() {
        let id = Config::client_id();
        assert!(id.starts_with("a11yscan "));
    }
}

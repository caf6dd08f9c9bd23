//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//! Configuration names the region and tunes the serving surface; it never
//! changes chart semantics.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dataset::sample;
use crate::pages::RegionInfo;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub region: RegionConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Region identity shown in titles and comparisons
#[derive(Debug, Clone, Deserialize)]
pub struct RegionConfig {
    #[serde(default = "default_region_name")]
    pub name: String,

    #[serde(default = "default_region_code")]
    pub code: String,

    #[serde(default = "default_region_short_name")]
    pub short_name: String,
}

fn default_region_name() -> String {
    "Tula Oblast".to_string()
}

fn default_region_code() -> String {
    "71".to_string()
}

fn default_region_short_name() -> String {
    "Tula".to_string()
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            name: default_region_name(),
            code: default_region_code(),
            short_name: default_region_short_name(),
        }
    }
}

impl RegionConfig {
    /// Convert to the region descriptor the composers take
    pub fn to_region_info(&self) -> RegionInfo {
        RegionInfo::new(&self.name, &self.code, &self.short_name)
    }
}

/// Synthetic dataset span, inclusive months
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    #[serde(default = "default_start_month")]
    pub start_month: u32,

    #[serde(default = "default_end_year")]
    pub end_year: i32,

    #[serde(default = "default_end_month")]
    pub end_month: u32,
}

fn default_start_year() -> i32 {
    sample::DEFAULT_START.0
}

fn default_start_month() -> u32 {
    sample::DEFAULT_START.1
}

fn default_end_year() -> i32 {
    sample::DEFAULT_END.0
}

fn default_end_month() -> u32 {
    sample::DEFAULT_END.1
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            start_month: default_start_month(),
            end_year: default_end_year(),
            end_month: default_end_month(),
        }
    }
}

impl DatasetConfig {
    /// Inclusive (year, month) span for the generator
    pub fn span(&self) -> ((i32, u32), (i32, u32)) {
        (
            (self.start_year, self.start_month),
            (self.end_year, self.end_month),
        )
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8084".to_string(),
                "http://127.0.0.1:8084".to_string(),
            ],
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("regiondash").join("config.toml")),
            Some(PathBuf::from("/etc/regiondash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Region overrides
        if let Ok(name) = std::env::var("REGIONDASH_REGION_NAME") {
            self.region.name = name;
        }
        if let Ok(code) = std::env::var("REGIONDASH_REGION_CODE") {
            self.region.code = code;
        }
        if let Ok(short) = std::env::var("REGIONDASH_REGION_SHORT_NAME") {
            self.region.short_name = short;
        }

        // API overrides
        if let Ok(host) = std::env::var("REGIONDASH_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("REGIONDASH_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("REGIONDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("REGIONDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: RegionConfig::default(),
            dataset: DatasetConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Regiondash Configuration
#
# Environment variables override these settings:
# - REGIONDASH_REGION_NAME
# - REGIONDASH_REGION_CODE
# - REGIONDASH_REGION_SHORT_NAME
# - REGIONDASH_HOST
# - REGIONDASH_PORT
# - REGIONDASH_LOG_LEVEL
# - REGIONDASH_LOG_FORMAT

[region]
# Region display name, used in page subtitles
name = "Tula Oblast"

# Statistical region code
code = "71"

# Short name matched against comparison-chart categories
short_name = "Tula"

[dataset]
# Inclusive month span for the synthetic dataset
start_year = 2020
start_month = 1
end_year = 2024
end_month = 12

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8050

# Allowed CORS origins
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

# Request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/regiondash/regiondash.log"
"#
    .to_string()
}

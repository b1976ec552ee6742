//! Configuration loading
//!
//! Every setting resolves in the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is not an error: the service starts on defaults.
//! A TOML file that exists but does not parse is.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the TOML config file
pub const ENV_CONFIG_PATH: &str = "EWA_CONFIG";
pub const ENV_HOST: &str = "EWA_HOST";
pub const ENV_PORT: &str = "EWA_PORT";
pub const ENV_INFERENCE_URL: &str = "ML_INFERENCE_API_URL";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GEMINI_MODEL: &str = "EWA_GEMINI_MODEL";

/// Logging section of the TOML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// On-disk configuration (`ewa-api.toml`)
///
/// All keys are optional; absent keys fall through to compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub inference_api_url: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values used when nothing else is configured
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub host: String,
    pub port: u16,
    pub inference_api_url: String,
    pub gemini_model: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5002,
            inference_api_url: "http://127.0.0.1:8000".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
        }
    }
}

/// Settings supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub inference_api_url: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the image classification service (no trailing slash)
    pub inference_api_url: String,
    /// Key for the generative-language API; `None` leaves the relay unable to generate
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub log_level: String,
}

impl ServiceConfig {
    /// Resolve configuration from CLI overrides, environment, TOML and defaults
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let toml_path = overrides
            .config_path
            .clone()
            .or_else(|| env_value(ENV_CONFIG_PATH).map(PathBuf::from))
            .or_else(default_config_path);

        let toml_config = match toml_path {
            Some(path) => load_toml_config(&path)?.unwrap_or_default(),
            None => TomlConfig::default(),
        };

        Self::from_sources(overrides, &toml_config, &CompiledDefaults::default())
    }

    /// Resolve from already-loaded sources (environment is still consulted)
    pub fn from_sources(
        overrides: &ConfigOverrides,
        toml_config: &TomlConfig,
        defaults: &CompiledDefaults,
    ) -> Result<Self> {
        let env_port = match env_value(ENV_PORT) {
            Some(raw) => Some(raw.parse::<u16>().map_err(|e| {
                Error::Config(format!("{} must be a port number, got {:?}: {}", ENV_PORT, raw, e))
            })?),
            None => None,
        };

        let host = overrides
            .host
            .clone()
            .or_else(|| env_value(ENV_HOST))
            .or_else(|| toml_config.host.clone())
            .unwrap_or_else(|| defaults.host.clone());

        let port = overrides
            .port
            .or(env_port)
            .or(toml_config.port)
            .unwrap_or(defaults.port);

        let inference_api_url = overrides
            .inference_api_url
            .clone()
            .or_else(|| env_value(ENV_INFERENCE_URL))
            .or_else(|| toml_config.inference_api_url.clone())
            .unwrap_or_else(|| defaults.inference_api_url.clone());

        let gemini_api_key = env_value(ENV_GEMINI_API_KEY).or_else(|| {
            toml_config
                .gemini_api_key
                .clone()
                .filter(|key| is_valid_key(key))
        });

        let gemini_model = env_value(ENV_GEMINI_MODEL)
            .or_else(|| toml_config.gemini_model.clone())
            .unwrap_or_else(|| defaults.gemini_model.clone());

        Ok(Self {
            host,
            port,
            inference_api_url: inference_api_url.trim_end_matches('/').to_string(),
            gemini_api_key,
            gemini_model,
            log_level: toml_config.logging.level.clone(),
        })
    }

    /// Address to bind the HTTP listener to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid bind address {}:{}: {}", self.host, self.port, e)))
    }
}

/// Default TOML location: `<config_dir>/ewa/ewa-api.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ewa").join("ewa-api.toml"))
}

/// Load a TOML config file
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_toml_config(path: &Path) -> Result<Option<TomlConfig>> {
    if !path.exists() {
        warn!("Config file not found at {}, using defaults", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML {} failed: {}", path.display(), e)))?;

    info!("Loaded config from {}", path.display());
    Ok(Some(config))
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| is_valid_key(v))
}

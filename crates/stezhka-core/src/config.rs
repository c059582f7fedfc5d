use crate::error::{Result, StezhkaError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_MAPBOX_URL: &str = "https://api.mapbox.com";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered provider configuration.
///
/// The access token lives here and is handed to provider constructors
/// explicitly; library code never reads the process environment on its own.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub nominatim_url: ConfigValue<String>,
    pub mapbox_url: ConfigValue<String>,
    pub mapbox_token: ConfigValue<Option<String>>,
}

impl ProviderConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            nominatim_url: ConfigValue::new(
                DEFAULT_NOMINATIM_URL.to_string(),
                ConfigSource::Default,
            ),
            mapbox_url: ConfigValue::new(DEFAULT_MAPBOX_URL.to_string(), ConfigSource::Default),
            mapbox_token: ConfigValue::new(None, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| StezhkaError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| StezhkaError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(url) = file_config.nominatim_url {
            self.nominatim_url.update(url, ConfigSource::File);
        }

        if let Some(url) = file_config.mapbox_url {
            self.mapbox_url.update(url, ConfigSource::File);
        }

        if let Some(token) = file_config.mapbox_token {
            self.mapbox_token.update(Some(token), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(url) = env::var("STEZHKA_NOMINATIM_URL") {
            self.nominatim_url.update(url, ConfigSource::Environment);
        }

        if let Ok(url) = env::var("STEZHKA_MAPBOX_URL") {
            self.mapbox_url.update(url, ConfigSource::Environment);
        }

        if let Ok(token) = env::var("MAPBOX_TOKEN") {
            self.mapbox_token.update(Some(token), ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(url) = overrides.nominatim_url {
            self.nominatim_url.update(url, ConfigSource::Cli);
        }

        if let Some(url) = overrides.mapbox_url {
            self.mapbox_url.update(url, ConfigSource::Cli);
        }

        if let Some(token) = overrides.mapbox_token {
            self.mapbox_token.update(Some(token), ConfigSource::Cli);
        }
    }

    /// The Mapbox token, or a configuration error naming the missing key.
    pub fn require_mapbox_token(&self) -> Result<&str> {
        self.mapbox_token
            .value
            .as_deref()
            .ok_or_else(|| StezhkaError::ConfigMissing {
                key: "mapbox_token (MAPBOX_TOKEN)".to_string(),
            })
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    nominatim_url: Option<String>,
    mapbox_url: Option<String>,
    mapbox_token: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub nominatim_url: Option<String>,
    pub mapbox_url: Option<String>,
    pub mapbox_token: Option<String>,
}

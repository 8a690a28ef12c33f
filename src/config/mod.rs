#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

use crate::core::{ConfigProvider, Theme};
use crate::utils::error::Result;
use crate::utils::validation::{validate_api_key, validate_required_field, validate_url, Validate};
use env::EnvConfig;
use toml_config::TomlConfig;

pub const DEFAULT_DIRECTORY_ENDPOINT: &str = "http://info.sweettracker.co.kr/api/v1/companylist";
pub const DEFAULT_TRACKING_ENDPOINT: &str = "http://info.sweettracker.co.kr/api/v1/trackingInfo";

/// Values given explicitly by the caller (command-line flags); highest priority.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub directory_endpoint: Option<String>,
    pub tracking_endpoint: Option<String>,
    pub theme: Option<Theme>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub api_key: String,
    pub directory_endpoint: String,
    pub tracking_endpoint: String,
    pub theme: Theme,
}

impl TrackerConfig {
    /// Layers environment, optional TOML file and overrides, in that order,
    /// and validates the result.
    pub fn resolve(
        env: EnvConfig,
        file: Option<TomlConfig>,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let mut api_key = env.api_key;
        let mut directory_endpoint = env.directory_endpoint;
        let mut tracking_endpoint = env.tracking_endpoint;
        let mut theme = None;

        if let Some(file) = file {
            api_key = file.api.key.or(api_key);
            if let Some(endpoints) = file.endpoints {
                directory_endpoint = endpoints.directory.or(directory_endpoint);
                tracking_endpoint = endpoints.tracking.or(tracking_endpoint);
            }
            if let Some(ui) = file.ui {
                theme = ui.theme;
            }
        }

        let api_key = overrides.api_key.or(api_key);

        let config = Self {
            api_key: validate_required_field("api.key", &api_key)?.clone(),
            directory_endpoint: overrides
                .directory_endpoint
                .or(directory_endpoint)
                .unwrap_or_else(|| DEFAULT_DIRECTORY_ENDPOINT.to_string()),
            tracking_endpoint: overrides
                .tracking_endpoint
                .or(tracking_endpoint)
                .unwrap_or_else(|| DEFAULT_TRACKING_ENDPOINT.to_string()),
            theme: overrides.theme.or(theme).unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for TrackerConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn directory_endpoint(&self) -> &str {
        &self.directory_endpoint
    }

    fn tracking_endpoint(&self) -> &str {
        &self.tracking_endpoint
    }
}

impl Validate for TrackerConfig {
    fn validate(&self) -> Result<()> {
        validate_api_key("api.key", &self.api_key)?;
        validate_url("endpoints.directory", &self.directory_endpoint)?;
        validate_url("endpoints.tracking", &self.tracking_endpoint)?;
        Ok(())
    }
}

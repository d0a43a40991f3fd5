use super::{
    assets::AssetsConfig,
    catalog::CatalogConfig,
    forecast::ForecastConfig,
    traits::ConfigSection,
};
use crate::error::ForecastError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `CROPCAST__FORECAST__YEAR_MAX=2032`.
pub const ENV_PREFIX: &str = "CROPCAST";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub assets: AssetsConfig,
    pub forecast: ForecastConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ForecastError> {
        self.assets.validate()?;
        self.forecast.validate()?;
        self.catalog.validate()?;
        Ok(())
    }

    /// Defaults, then the optional file, then environment overrides.
    pub fn load_layered(path: Option<&Path>) -> Result<Self, ForecastError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        log::debug!(
            "Configuration loaded ({}, {}, {} sections)",
            AssetsConfig::section_name(),
            ForecastConfig::section_name(),
            CatalogConfig::section_name()
        );
        Ok(config)
    }
}

/// Shared, validated configuration that can be edited at runtime and
/// written back as TOML.
pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ForecastError> {
        let config = self.get()?;
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| ForecastError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| ForecastError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, ForecastError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| ForecastError::Configuration("Config lock poisoned".to_string()))
    }

    /// Apply `f` to a copy and keep it only if it still validates.
    pub fn update<F>(&self, f: F) -> Result<(), ForecastError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut guard = self
            .config
            .write()
            .map_err(|_| ForecastError::Configuration("Config lock poisoned".to_string()))?;
        let mut candidate = guard.clone();
        f(&mut candidate);
        candidate.validate()?;
        *guard = candidate;
        Ok(())
    }
}

use super::traits::ConfigSection;
use crate::error::ForecastError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub model_path: PathBuf,
    pub feature_columns_path: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("crop_price_prediction/final_crop_price_predictor.json"),
            feature_columns_path: PathBuf::from("crop_price_prediction/feature_columns.json"),
        }
    }
}

impl ConfigSection for AssetsConfig {
    fn section_name() -> &'static str {
        "assets"
    }

    fn validate(&self) -> Result<(), ForecastError> {
        if self.model_path.as_os_str().is_empty() {
            return Err(ForecastError::Configuration(
                "Model path must not be empty".to_string()
            ));
        }
        if self.feature_columns_path.as_os_str().is_empty() {
            return Err(ForecastError::Configuration(
                "Feature columns path must not be empty".to_string()
            ));
        }
        Ok(())
    }
}

use crate::config::AppConfig;
use crate::ml::features::FeatureSchema;
use crate::types::{Grade, ResultBundle};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Welcome,
    Dashboard,
    Results,
}

/// Central application state for the UI
pub struct AppState {
    pub page: Page,

    // Form options
    pub district_options: Vec<String>,
    pub commodity_options: Vec<String>,
    pub district_placeholder: String,
    pub commodity_placeholder: String,
    pub year_range: RangeInclusive<i32>,

    // Current selections; `None` means the placeholder is showing
    pub selected_district: Option<String>,
    pub selected_commodity: Option<String>,
    pub grade: Grade,
    pub year: i32,
    pub month: u32,

    // Last successful submission
    pub results: Option<ResultBundle>,

    pub status_message: String,
    pub error_message: Option<String>,
    pub model_error: Option<String>,
}

impl AppState {
    pub fn from_config(config: &AppConfig, schema: &FeatureSchema, model_error: Option<String>) -> Self {
        let forecast = &config.forecast;

        Self {
            page: Page::Welcome,

            district_options: config.catalog.resolve_districts(schema),
            commodity_options: config.catalog.resolve_commodities(schema),
            district_placeholder: config.catalog.district_placeholder.clone(),
            commodity_placeholder: config.catalog.commodity_placeholder.clone(),
            year_range: forecast.year_min..=forecast.year_max,

            selected_district: None,
            selected_commodity: None,
            grade: Grade::try_from(forecast.default_grade).unwrap_or_default(),
            year: forecast.clamp_year(forecast.default_year),
            month: forecast.default_month,

            results: None,

            status_message: "Ready".to_string(),
            error_message: None,
            model_error,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default(), &FeatureSchema::fallback(), None)
    }
}

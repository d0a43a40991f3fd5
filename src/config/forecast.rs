use super::traits::ConfigSection;
use crate::error::ForecastError;
use crate::types::{ComparisonScope, MONTHS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub year_min: i32,
    pub year_max: i32,
    pub default_year: i32,
    pub default_month: u32,
    pub default_grade: u8,
    pub comparison_scope: ComparisonScope,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            year_min: 2024,
            year_max: 2030,
            default_year: 2025,
            default_month: 1,
            default_grade: 3,
            comparison_scope: ComparisonScope::AllMonths,
        }
    }
}

impl ForecastConfig {
    /// Pull `year` into the configured range. An inverted range pins to
    /// `year_min` rather than panicking.
    pub fn clamp_year(&self, year: i32) -> i32 {
        year.min(self.year_max).max(self.year_min)
    }
}

impl ConfigSection for ForecastConfig {
    fn section_name() -> &'static str {
        "forecast"
    }

    fn validate(&self) -> Result<(), ForecastError> {
        if self.year_min > self.year_max {
            return Err(ForecastError::Configuration(format!(
                "Year range is empty: {}..={}",
                self.year_min, self.year_max
            )));
        }
        if !(self.year_min..=self.year_max).contains(&self.default_year) {
            return Err(ForecastError::Configuration(
                "Default year must lie within the year range".to_string()
            ));
        }
        if !MONTHS.contains(&self.default_month) {
            return Err(ForecastError::Configuration(
                "Default month must be between 1 and 12".to_string()
            ));
        }
        if !(1..=3).contains(&self.default_grade) {
            return Err(ForecastError::Configuration(
                "Default grade must be 1, 2 or 3".to_string()
            ));
        }
        Ok(())
    }
}

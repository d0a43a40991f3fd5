use super::traits::ConfigSection;
use crate::error::ForecastError;
use crate::ml::features::{FeatureSchema, IndicatorGroup};
use serde::{Deserialize, Serialize};

/// Known districts and commodities offered in the form.
///
/// Empty lists are filled from the schema's indicator columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub districts: Vec<String>,
    pub commodities: Vec<String>,
    pub district_placeholder: String,
    pub commodity_placeholder: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            districts: Vec::new(),
            commodities: Vec::new(),
            district_placeholder: "Select District...".to_string(),
            commodity_placeholder: "Select Commodity...".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn resolve_districts(&self, schema: &FeatureSchema) -> Vec<String> {
        resolve(&self.districts, || schema.categories(IndicatorGroup::District))
    }

    pub fn resolve_commodities(&self, schema: &FeatureSchema) -> Vec<String> {
        resolve(&self.commodities, || schema.categories(IndicatorGroup::Commodity))
    }
}

fn resolve<F>(configured: &[String], derive: F) -> Vec<String>
where
    F: FnOnce() -> Vec<String>,
{
    let mut names = if configured.is_empty() {
        derive()
    } else {
        configured.to_vec()
    };
    let mut seen = std::collections::HashSet::new();
    names.retain(|name| seen.insert(name.clone()));
    names
}

impl ConfigSection for CatalogConfig {
    fn section_name() -> &'static str {
        "catalog"
    }

    fn validate(&self) -> Result<(), ForecastError> {
        if self.districts.iter().any(|d| d == &self.district_placeholder) {
            return Err(ForecastError::Configuration(
                "District placeholder collides with a district name".to_string()
            ));
        }
        if self.commodities.iter().any(|c| c == &self.commodity_placeholder) {
            return Err(ForecastError::Configuration(
                "Commodity placeholder collides with a commodity name".to_string()
            ));
        }
        if self.districts.iter().chain(&self.commodities).any(|n| n.trim().is_empty()) {
            return Err(ForecastError::Configuration(
                "Catalog entries must not be blank".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_schema_when_empty() {
        let schema = FeatureSchema::fallback();
        let catalog = CatalogConfig::default();
        assert_eq!(catalog.resolve_districts(&schema), vec!["Pune".to_string()]);
        assert_eq!(catalog.resolve_commodities(&schema), vec!["Wheat".to_string()]);
    }

    #[test]
    fn test_configured_list_deduplicated_in_order() {
        let catalog = CatalogConfig {
            districts: vec!["Pune".into(), "Nashik".into(), "Pune".into()],
            ..Default::default()
        };
        assert_eq!(
            catalog.resolve_districts(&FeatureSchema::fallback()),
            vec!["Pune".to_string(), "Nashik".to_string()]
        );
    }

    #[test]
    fn test_placeholder_collision() {
        let catalog = CatalogConfig {
            districts: vec!["Select District...".into()],
            ..Default::default()
        };
        assert!(catalog.validate().is_err());
    }
}

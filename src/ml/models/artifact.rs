use super::predictor::Predictor;
use crate::error::{ForecastError, Result};
use crate::ml::features::FeatureVector;
use gbdt::decision_tree::{Data, ValueType};
use gbdt::gradient_boost::GBDT;
use serde::Deserialize;
use std::path::Path;

/// Gradient-boosted regression trees, as written by `GBDT::save_model`.
pub struct ModelArtifact {
    model: GBDT,
    n_features: Option<usize>,
}

/// The part of a saved model that records its training width.
#[derive(Deserialize)]
struct SavedModelHeader {
    conf: SavedModelConf,
}

#[derive(Deserialize)]
struct SavedModelConf {
    feature_size: usize,
}

impl ModelArtifact {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let n_features = serde_json::from_str::<SavedModelHeader>(&contents)
            .ok()
            .map(|header| header.conf.feature_size);
        if n_features.is_none() {
            log::warn!(
                "Model '{}' does not record its feature count; width checks are skipped",
                path.display()
            );
        }

        let path_str = path.to_str().ok_or_else(|| {
            ForecastError::Artifact(format!("Model path '{}' is not valid UTF-8", path.display()))
        })?;
        let model = GBDT::load_model(path_str).map_err(|e| {
            ForecastError::Artifact(format!("Failed to parse model '{}': {}", path.display(), e))
        })?;

        Ok(Self { model, n_features })
    }

    /// Wrap an in-memory model trained on `n_features` inputs.
    pub fn from_model(model: GBDT, n_features: usize) -> Self {
        Self {
            model,
            n_features: Some(n_features),
        }
    }
}

impl Predictor for ModelArtifact {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        if let Some(expected) = self.n_features {
            if features.len() != expected {
                return Err(ForecastError::Artifact(format!(
                    "Model expects {} features, got {}",
                    expected,
                    features.len()
                )));
            }
        }

        let sample = Data::new_test_data(
            features.as_slice().iter().map(|&x| x as ValueType).collect(),
            None,
        );
        self.model
            .predict(&vec![sample])
            .first()
            .map(|&price| f64::from(price))
            .ok_or_else(|| ForecastError::Artifact("Model returned no prediction".to_string()))
    }

    fn n_features(&self) -> Option<usize> {
        self.n_features
    }
}

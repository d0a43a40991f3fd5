use super::artifact::ModelArtifact;
use super::predictor::Predictor;
use crate::config::AssetsConfig;
use crate::error::{ForecastError, Result};
use crate::ml::features::FeatureSchema;
use std::path::Path;
use std::sync::Arc;

/// Model and schema as loaded at start-up. Read-only afterwards.
#[derive(Clone)]
pub struct ModelAssets {
    pub schema: Arc<FeatureSchema>,
    pub predictor: Option<Arc<dyn Predictor>>,
    pub load_error: Option<String>,
}

impl ModelAssets {
    pub fn new(schema: FeatureSchema, predictor: Arc<dyn Predictor>) -> Result<Self> {
        check_shape(&schema, predictor.as_ref())?;
        Ok(Self {
            schema: Arc::new(schema),
            predictor: Some(predictor),
            load_error: None,
        })
    }

    /// Assets with no model; every inference will report `ModelUnavailable`.
    pub fn unavailable(schema: FeatureSchema, reason: impl Into<String>) -> Self {
        Self {
            schema: Arc::new(schema),
            predictor: None,
            load_error: Some(reason.into()),
        }
    }

    /// Pair a loaded model with the schema. A width disagreement leaves the
    /// model unavailable instead of failing.
    pub fn with_checked_model(schema: FeatureSchema, predictor: Arc<dyn Predictor>) -> Self {
        match check_shape(&schema, predictor.as_ref()) {
            Ok(()) => Self {
                schema: Arc::new(schema),
                predictor: Some(predictor),
                load_error: None,
            },
            Err(e) => {
                log::error!("Model rejected: {}", e);
                Self::unavailable(schema, format!("Model does not match the feature columns: {}", e))
            }
        }
    }

    /// Load both artifacts, failing on the first problem.
    pub fn load_strict(config: &AssetsConfig) -> Result<Self> {
        let schema = FeatureSchema::load(&config.feature_columns_path)?;
        let model = ModelArtifact::load(&config.model_path)?;
        Self::new(schema, Arc::new(model))
    }

    /// Load both artifacts, degrading to an unavailable model on failure.
    ///
    /// The schema falls back to a minimal column list when it cannot be read.
    pub fn load(config: &AssetsConfig) -> Self {
        let schema = match FeatureSchema::load(&config.feature_columns_path) {
            Ok(schema) => schema,
            Err(e) => {
                log::error!("Feature columns unavailable: {}", e);
                return Self::unavailable(
                    FeatureSchema::fallback(),
                    describe_failure("Feature columns", &config.feature_columns_path, &e),
                );
            }
        };

        match ModelArtifact::load(&config.model_path) {
            Ok(model) => {
                let assets = Self::with_checked_model(schema, Arc::new(model));
                if assets.is_available() {
                    log::info!(
                        "Loaded model from {} ({} features)",
                        config.model_path.display(),
                        assets.schema.width()
                    );
                }
                assets
            }
            Err(e) => {
                log::error!("Model unavailable: {}", e);
                Self::unavailable(schema, describe_failure("Model", &config.model_path, &e))
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.predictor.is_some()
    }
}

fn describe_failure(what: &str, path: &Path, err: &ForecastError) -> String {
    match err {
        ForecastError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            format!("{} file not found at '{}'", what, path.display())
        }
        other => format!("{} file '{}' could not be loaded: {}", what, path.display(), other),
    }
}

fn check_shape(schema: &FeatureSchema, predictor: &dyn Predictor) -> Result<()> {
    match predictor.n_features() {
        Some(n) if n != schema.width() => Err(ForecastError::Artifact(format!(
            "Model was trained on {} features but the schema has {}",
            n,
            schema.width()
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cropcast_assets_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_columns_file_reported_as_not_found() {
        let dir = temp_dir("missing");
        let config = AssetsConfig {
            model_path: dir.join("model.json"),
            feature_columns_path: dir.join("feature_columns.json"),
        };

        let assets = ModelAssets::load(&config);
        let message = assets.load_error.unwrap();
        assert!(message.starts_with("Feature columns file not found"), "{}", message);
    }

    #[test]
    fn test_unreadable_columns_file_is_not_called_missing() {
        let dir = temp_dir("garbled");
        let feature_columns_path = dir.join("feature_columns.json");
        std::fs::write(&feature_columns_path, "{ not json").unwrap();
        let config = AssetsConfig {
            model_path: dir.join("model.json"),
            feature_columns_path,
        };

        let assets = ModelAssets::load(&config);
        let message = assets.load_error.unwrap();
        assert!(!message.contains("not found"), "{}", message);
        assert!(message.contains("could not be loaded"), "{}", message);
        assert_eq!(*assets.schema, FeatureSchema::fallback());
    }

    #[test]
    fn test_width_disagreement_leaves_model_unavailable() {
        let predictor: Arc<dyn Predictor> = Arc::new(Fixed(9));
        let assets = ModelAssets::with_checked_model(FeatureSchema::fallback(), predictor);
        assert!(!assets.is_available());
        assert!(assets.load_error.unwrap().contains("trained on 9 features"));
    }

    struct Fixed(usize);

    impl Predictor for Fixed {
        fn predict(&self, _features: &crate::ml::features::FeatureVector) -> Result<f64> {
            Ok(0.0)
        }

        fn n_features(&self) -> Option<usize> {
            Some(self.0)
        }
    }
}

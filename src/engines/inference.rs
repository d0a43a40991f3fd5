use crate::error::{ForecastError, Result};
use crate::ml::features::{FeatureSchema, FeatureVectorBuilder};
use crate::ml::models::{ModelAssets, Predictor};
use crate::types::{Grade, QueryState};
use std::sync::Arc;

/// Single-point price inference over a shared, read-only model.
///
/// The sweeps in `forecast` and `comparison` are further `impl` blocks on
/// this type; all of them check model availability before touching it.
#[derive(Clone)]
pub struct InferenceEngine {
    builder: FeatureVectorBuilder,
    predictor: Option<Arc<dyn Predictor>>,
    unavailable_reason: String,
}

impl InferenceEngine {
    pub fn new(schema: Arc<FeatureSchema>, predictor: Option<Arc<dyn Predictor>>) -> Self {
        Self {
            builder: FeatureVectorBuilder::new(schema),
            predictor,
            unavailable_reason: "No model loaded".to_string(),
        }
    }

    pub fn from_assets(assets: &ModelAssets) -> Self {
        let mut engine = Self::new(Arc::clone(&assets.schema), assets.predictor.clone());
        if let Some(reason) = &assets.load_error {
            engine.unavailable_reason = reason.clone();
        }
        engine
    }

    pub fn is_available(&self) -> bool {
        self.predictor.is_some()
    }

    pub(crate) fn builder(&self) -> &FeatureVectorBuilder {
        &self.builder
    }

    /// The loaded model, or `ModelUnavailable`.
    pub(crate) fn predictor(&self) -> Result<&dyn Predictor> {
        self.predictor
            .as_deref()
            .ok_or_else(|| ForecastError::ModelUnavailable(self.unavailable_reason.clone()))
    }

    pub fn predict_point(
        &self,
        district: &str,
        commodity: &str,
        grade: Grade,
        year: i32,
        month: u32,
    ) -> Result<f64> {
        let predictor = self.predictor()?;
        let vector = self.builder.build(district, commodity, grade, year, month);
        predictor.predict(&vector)
    }

    pub fn predict_query(&self, query: &QueryState) -> Result<f64> {
        let predictor = self.predictor()?;
        predictor.predict(&self.builder.build_query(query))
    }
}

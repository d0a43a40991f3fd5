use crate::error::Result;
use crate::ml::features::FeatureVector;

/// A trained regression model seen as an opaque capability.
///
/// Implementations must be deterministic and free of side effects; the
/// sweeps call `predict` once per point and never cache.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    /// Input width the model was trained with, when the artifact records it.
    fn n_features(&self) -> Option<usize> {
        None
    }
}

impl<F> Predictor for F
where
    F: Fn(&FeatureVector) -> f64 + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        Ok(self(features))
    }
}

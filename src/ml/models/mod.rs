pub mod artifact;
pub mod assets;
pub mod predictor;

pub use artifact::ModelArtifact;
pub use assets::ModelAssets;
pub use predictor::Predictor;

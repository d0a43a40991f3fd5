use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ForecastError {
    /// True for failures that should block every inference path.
    pub fn is_model_unavailable(&self) -> bool {
        matches!(self, Self::ModelUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, ForecastError>;

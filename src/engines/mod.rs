pub mod comparison;
pub mod forecast;
pub mod inference;
pub mod pipeline;

pub use comparison::ComparisonRequest;
pub use inference::InferenceEngine;
pub use pipeline::ForecastPipeline;

pub mod builder;
pub mod schema;

pub use builder::{FeatureVector, FeatureVectorBuilder, FIXED_DAY};
pub use schema::{FeatureSchema, IndicatorGroup};

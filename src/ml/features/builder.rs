use super::schema::{FeatureSchema, IndicatorGroup};
use crate::types::{Grade, QueryState};
use std::sync::Arc;

/// Day written into every vector; predictions are month-resolution.
pub const FIXED_DAY: f64 = 1.0;

/// One model input row laid out exactly as the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn zeros(width: usize) -> Self {
        Self {
            values: vec![0.0; width],
        }
    }

    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<f64> {
        self.values.get(position).copied()
    }

    fn set(&mut self, position: usize, value: f64) {
        self.values[position] = value;
    }
}

/// Fills feature vectors for point queries against a fixed schema.
///
/// Categories without an indicator column leave their whole group at zero,
/// which feeds the model its all-zero baseline for that group.
#[derive(Debug, Clone)]
pub struct FeatureVectorBuilder {
    schema: Arc<FeatureSchema>,
}

impl FeatureVectorBuilder {
    pub fn new(schema: Arc<FeatureSchema>) -> Self {
        Self { schema }
    }

    pub fn build(
        &self,
        district: &str,
        commodity: &str,
        grade: Grade,
        year: i32,
        month: u32,
    ) -> FeatureVector {
        let schema = &self.schema;
        let mut vector = FeatureVector::zeros(schema.width());

        vector.set(schema.year_position(), year as f64);
        vector.set(schema.month_position(), month as f64);
        vector.set(schema.day_position(), FIXED_DAY);
        vector.set(schema.grade_position(), grade.encoded() as f64);

        for (group, category) in [
            (IndicatorGroup::District, district),
            (IndicatorGroup::Commodity, commodity),
        ] {
            match schema.indicator_position(group, category) {
                Some(position) => vector.set(position, 1.0),
                None => log::debug!(
                    "No indicator column '{}'; leaving {:?} group unset",
                    group.column_name(category),
                    group
                ),
            }
        }

        vector
    }

    pub fn build_query(&self, query: &QueryState) -> FeatureVector {
        self.build(
            &query.district,
            &query.commodity,
            query.grade,
            query.year,
            query.month,
        )
    }
}

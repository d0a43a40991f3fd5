use super::comparison::ComparisonRequest;
use super::inference::InferenceEngine;
use crate::error::Result;
use crate::types::{ComparisonScope, ForecastPoint, MonthComparison, QueryState, ResultBundle};

/// Runs one submission end to end: point price, forecast, comparison.
pub struct ForecastPipeline {
    engine: InferenceEngine,
    known_districts: Vec<String>,
    scope: ComparisonScope,
}

impl ForecastPipeline {
    pub fn new(engine: InferenceEngine, known_districts: Vec<String>, scope: ComparisonScope) -> Self {
        Self {
            engine,
            known_districts,
            scope,
        }
    }

    pub fn run(&self, query: &QueryState) -> Result<ResultBundle> {
        log::info!(
            "Forecasting {} in {} (grade {}, {}-{:02})",
            query.commodity,
            query.district,
            query.grade,
            query.year,
            query.month
        );

        let price = self.engine.predict_query(query)?;
        let forecast = self.engine.forecast(
            &query.district,
            &query.commodity,
            query.grade,
            query.year,
        )?;
        let comparison = self.engine.compare(&ComparisonRequest {
            commodity: &query.commodity,
            year: query.year,
            grade: query.grade,
            selected_district: &query.district,
            selected_month: query.month,
            known_districts: &self.known_districts,
            forecast_for_selected: Some(&forecast),
            scope: self.scope,
        })?;

        Ok(ResultBundle {
            query: query.clone(),
            price,
            forecast,
            comparison,
        })
    }
}

impl ResultBundle {
    /// The forecast point matching the queried month.
    pub fn highlighted_point(&self) -> Option<ForecastPoint> {
        self.forecast
            .points
            .iter()
            .find(|p| p.month == self.query.month)
            .copied()
    }

    pub fn month_comparison(&self) -> MonthComparison {
        self.comparison.for_month(self.query.month)
    }
}

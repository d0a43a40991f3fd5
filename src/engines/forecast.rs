use super::inference::InferenceEngine;
use crate::error::Result;
use crate::types::{ForecastPoint, ForecastSeries, Grade, MONTHS};

impl InferenceEngine {
    /// Twelve independent point predictions, January through December.
    ///
    /// Nothing carries over between months; each point is exactly what
    /// `predict_point` returns for that month.
    pub fn forecast(
        &self,
        district: &str,
        commodity: &str,
        grade: Grade,
        year: i32,
    ) -> Result<ForecastSeries> {
        let predictor = self.predictor()?;

        let points = MONTHS
            .map(|month| {
                let vector = self.builder().build(district, commodity, grade, year, month);
                predictor
                    .predict(&vector)
                    .map(|price| ForecastPoint { month, price })
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Forecast sweep for {} / {} (grade {}, {}): {} points",
            district,
            commodity,
            grade,
            year,
            points.len()
        );

        Ok(ForecastSeries {
            district: district.to_string(),
            commodity: commodity.to_string(),
            grade,
            year,
            points,
        })
    }
}

use super::inference::InferenceEngine;
use crate::error::Result;
use crate::types::{
    ComparisonRow, ComparisonScope, ComparisonTable, ForecastSeries, Grade, MonthComparison,
    MonthComparisonEntry, MONTHS,
};
use std::collections::HashSet;

/// Inputs for one district sweep.
#[derive(Debug, Clone)]
pub struct ComparisonRequest<'a> {
    pub commodity: &'a str,
    pub year: i32,
    pub grade: Grade,
    pub selected_district: &'a str,
    pub selected_month: u32,
    pub known_districts: &'a [String],
    /// Series already computed for `selected_district`; its prices are
    /// copied instead of re-predicted when it matches the request.
    pub forecast_for_selected: Option<&'a ForecastSeries>,
    pub scope: ComparisonScope,
}

impl<'a> ComparisonRequest<'a> {
    fn months(&self) -> Vec<u32> {
        match self.scope {
            ComparisonScope::AllMonths => MONTHS.collect(),
            ComparisonScope::SelectedMonth => vec![self.selected_month],
        }
    }

    /// Known districts in order without repeats, with the selected district
    /// prepended when the catalog does not list it.
    fn districts(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        let mut districts = Vec::with_capacity(self.known_districts.len() + 1);
        if !self.known_districts.iter().any(|d| d == self.selected_district) {
            seen.insert(self.selected_district);
            districts.push(self.selected_district);
        }
        for district in self.known_districts {
            if seen.insert(district.as_str()) {
                districts.push(district.as_str());
            }
        }
        districts
    }

    fn reusable_forecast(&self) -> Option<&'a ForecastSeries> {
        self.forecast_for_selected.filter(|series| {
            series.district == self.selected_district
                && series.commodity == self.commodity
                && series.grade == self.grade
                && series.year == self.year
        })
    }
}

impl InferenceEngine {
    pub fn compare(&self, request: &ComparisonRequest<'_>) -> Result<ComparisonTable> {
        let predictor = self.predictor()?;
        let months = request.months();
        let reuse = request.reusable_forecast();
        let mut rows = Vec::new();
        let mut predicted = 0usize;

        for district in request.districts() {
            for &month in &months {
                let cached = if district == request.selected_district {
                    reuse.and_then(|series| series.price_at(month))
                } else {
                    None
                };

                let price = match cached {
                    Some(price) => price,
                    None => {
                        predicted += 1;
                        let vector = self.builder().build(
                            district,
                            request.commodity,
                            request.grade,
                            request.year,
                            month,
                        );
                        predictor.predict(&vector)?
                    }
                };

                rows.push(ComparisonRow {
                    district: district.to_string(),
                    month,
                    price,
                });
            }
        }

        log::debug!(
            "Comparison sweep for {} ({:?}): {} rows, {} predicted",
            request.commodity,
            request.scope,
            rows.len(),
            predicted
        );

        Ok(ComparisonTable {
            commodity: request.commodity.to_string(),
            grade: request.grade,
            year: request.year,
            scope: request.scope,
            rows,
        })
    }
}

impl ComparisonTable {
    /// Rows for one month, highest price first, with every district sharing
    /// the maximum flagged.
    pub fn for_month(&self, month: u32) -> MonthComparison {
        let rows: Vec<&ComparisonRow> = self.rows.iter().filter(|r| r.month == month).collect();

        let max_price = rows
            .iter()
            .map(|r| r.price)
            .filter(|p| !p.is_nan())
            .fold(None, |max: Option<f64>, p| Some(max.map_or(p, |m| m.max(p))));

        let mut entries: Vec<MonthComparisonEntry> = rows
            .into_iter()
            .map(|r| MonthComparisonEntry {
                district: r.district.clone(),
                price: r.price,
                is_highest: max_price == Some(r.price),
            })
            .collect();

        // Stable, so tied districts keep catalog order.
        entries.sort_by(|a, b| b.price.total_cmp(&a.price));

        MonthComparison {
            month,
            max_price,
            entries,
        }
    }
}

use crate::error::{ForecastError, Result};
use crate::types::{ComparisonTable, ForecastSeries, MonthComparison};
use polars::df;
use polars::prelude::*;
use std::path::Path;

pub struct ResultExporter;

impl ResultExporter {
    /// Month/Price frame, one row per forecast point.
    pub fn forecast_frame(series: &ForecastSeries) -> Result<DataFrame> {
        let months: Vec<u32> = series.points.iter().map(|p| p.month).collect();
        let prices: Vec<f64> = series.points.iter().map(|p| p.price).collect();

        let df = df! {
            "Month" => months,
            "Price" => prices,
        }?;
        Ok(df)
    }

    /// District/Month/Price frame in sweep order.
    pub fn comparison_frame(table: &ComparisonTable) -> Result<DataFrame> {
        let districts: Vec<String> = table.rows.iter().map(|r| r.district.clone()).collect();
        let months: Vec<u32> = table.rows.iter().map(|r| r.month).collect();
        let prices: Vec<f64> = table.rows.iter().map(|r| r.price).collect();

        let df = df! {
            "District" => districts,
            "Month" => months,
            "Price" => prices,
        }?;
        Ok(df)
    }

    /// One-month view, highest first, with a `Highest` flag column.
    pub fn month_comparison_frame(view: &MonthComparison) -> Result<DataFrame> {
        let districts: Vec<String> = view.entries.iter().map(|e| e.district.clone()).collect();
        let prices: Vec<f64> = view.entries.iter().map(|e| e.price).collect();
        let highest: Vec<bool> = view.entries.iter().map(|e| e.is_highest).collect();

        let df = df! {
            "District" => districts,
            "Month" => vec![view.month; view.entries.len()],
            "Price" => prices,
            "Highest" => highest,
        }?;
        Ok(df)
    }

    pub fn write_csv<P: AsRef<Path>>(df: &mut DataFrame, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = std::fs::File::create(path).map_err(|e| {
            ForecastError::Export(format!("Failed to create '{}': {}", path.display(), e))
        })?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)?;

        log::info!("Wrote {} rows to {}", df.height(), path.display());
        Ok(())
    }
}

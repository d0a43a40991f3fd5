use crate::data::ResultExporter;
use crate::error::Result;
use crate::types::ResultBundle;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Forecast,
    Comparison,
    SelectedMonth,
}

impl ExportKind {
    fn default_file_name(&self, results: &ResultBundle) -> String {
        let q = &results.query;
        match self {
            Self::Forecast => format!("forecast_{}_{}_{}.csv", q.district, q.commodity, q.year),
            Self::Comparison => format!("comparison_{}_{}.csv", q.commodity, q.year),
            Self::SelectedMonth => format!("comparison_{}_{}_{:02}.csv", q.commodity, q.year, q.month),
        }
    }
}

pub struct ExportService;

impl ExportService {
    /// Ask for a destination and write the chosen table. `Ok(None)` when cancelled.
    pub fn export(results: &ResultBundle, kind: ExportKind) -> Result<Option<PathBuf>> {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(kind.default_file_name(results))
            .save_file()
        else {
            return Ok(None);
        };

        Self::write(results, kind, &path)?;
        Ok(Some(path))
    }

    pub fn write(results: &ResultBundle, kind: ExportKind, path: &std::path::Path) -> Result<()> {
        let mut df = match kind {
            ExportKind::Forecast => ResultExporter::forecast_frame(&results.forecast)?,
            ExportKind::Comparison => ResultExporter::comparison_frame(&results.comparison)?,
            ExportKind::SelectedMonth => {
                ResultExporter::month_comparison_frame(&results.month_comparison())?
            }
        };
        ResultExporter::write_csv(&mut df, path)
    }
}

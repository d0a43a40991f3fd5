use crate::ui::services::{ExportKind, ExportService};
use crate::ui::state::{AppState, Page};
use crate::ui::widgets::palette::{ACCENT_BLUE, ACCENT_ORANGE};
use crate::ui::widgets::{month_name, ComparisonChart, PriceCard, TrendChart};
use egui::RichText;

pub struct ResultsPanel;

impl ResultsPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let Some(results) = state.results.clone() else {
            state.status_message = "No valid forecast data found. Returning to Dashboard.".to_string();
            state.page = Page::Dashboard;
            return;
        };
        let query = &results.query;

        ui.heading(format!("Best Price Forecast ({} Price Projection)", query.commodity));
        ui.label(
            RichText::new(format!(
                "For the {} market, the expected price for {} is as follows.",
                query.district,
                month_name(query.month)
            ))
            .color(ACCENT_BLUE),
        );
        ui.separator();

        ui.columns(2, |columns| {
            PriceCard::show(&mut columns[0], &results);

            let ui = &mut columns[1];
            ui.label(
                RichText::new(format!("12-Month Price Trend ({} Market)", query.district)).strong(),
            );
            ui.label(RichText::new("Expected prices through the year").small().weak());
            TrendChart::show(ui, &results.forecast, query.month);
        });

        ui.separator();

        let month_view = results.month_comparison();
        ui.label(
            RichText::new(format!(
                "District Price Comparison for {}",
                month_name(query.month)
            ))
            .strong(),
        );
        ui.label(
            RichText::new("Expected price across markets for the selected month. The highest price is shown in green.")
                .small()
                .weak(),
        );
        ComparisonChart::show(ui, &month_view);

        ui.separator();

        ui.horizontal(|ui| {
            for (kind, label) in [
                (ExportKind::Forecast, "Export Trend CSV"),
                (ExportKind::SelectedMonth, "Export Month Comparison CSV"),
                (ExportKind::Comparison, "Export Full Comparison CSV"),
            ] {
                if ui.button(label).clicked() {
                    state.status_message = match ExportService::export(&results, kind) {
                        Ok(Some(path)) => format!("Saved {}", path.display()),
                        Ok(None) => "Export cancelled".to_string(),
                        Err(e) => {
                            log::warn!("Export failed: {}", e);
                            format!("Export failed: {}", e)
                        }
                    };
                }
            }
        });
        ui.label(RichText::new(&state.status_message).weak());

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Use this to choose the best district and time to sell.")
                    .strong()
                    .color(ACCENT_ORANGE),
            );
        });
    }
}

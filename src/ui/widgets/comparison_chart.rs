use super::palette::{ACCENT_BLUE, ACCENT_GREEN};
use super::price_card::format_price;
use crate::types::MonthComparison;
use egui::RichText;
use egui_plot::{Bar, BarChart, GridMark, Plot, PlotPoint, Text};
use std::ops::RangeInclusive;

const HEIGHT: f32 = 260.0;
const BAR_WIDTH: f64 = 0.6;

/// District bars for one month, highest first; every top-priced district
/// is drawn in green.
pub struct ComparisonChart;

impl ComparisonChart {
    pub fn show(ui: &mut egui::Ui, view: &MonthComparison) {
        if view.entries.is_empty() {
            ui.label("No districts to compare for this month");
            return;
        }

        let bars: Vec<Bar> = view
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Bar::new(i as f64, entry.price)
                    .width(BAR_WIDTH)
                    .name(&entry.district)
                    .fill(if entry.is_highest { ACCENT_GREEN } else { ACCENT_BLUE })
            })
            .collect();
        let labels: Vec<(PlotPoint, String)> = view
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.price.is_finite())
            .map(|(i, entry)| (PlotPoint::new(i as f64, entry.price), format_price(entry.price)))
            .collect();
        let districts: Vec<String> = view.entries.iter().map(|e| e.district.clone()).collect();
        let top = view.max_price.unwrap_or(0.0);

        Plot::new(("comparison_chart", view.month))
            .height(HEIGHT)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_y(0.0)
            .include_y(top * 1.12)
            .show_grid([false, true])
            .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                district_label(&districts, mark.value).to_string()
            })
            .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| format_price(mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("Expected price", bars));
                for (position, label) in labels {
                    plot_ui.text(
                        Text::new(label.as_str(), position, RichText::new(label.as_str()).small())
                            .anchor(egui::Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}

/// District name for a whole-number bar position.
fn district_label(districts: &[String], value: f64) -> &str {
    if value.fract() != 0.0 || value < 0.0 {
        return "";
    }
    districts.get(value as usize).map(String::as_str).unwrap_or("")
}

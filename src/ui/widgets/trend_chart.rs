use super::chart_scale::ChartScale;
use super::palette::{ACCENT_GREEN, ACCENT_ORANGE};
use super::price_card::format_price;
use super::{month_abbrev, month_name};
use crate::types::ForecastSeries;
use egui_plot::{GridMark, Line, Plot, PlotPoints, Points};
use std::ops::RangeInclusive;

const HEIGHT: f32 = 240.0;

/// Twelve-month line chart with the queried month marked.
pub struct TrendChart;

impl TrendChart {
    pub fn show(ui: &mut egui::Ui, series: &ForecastSeries, highlight_month: u32) {
        let Some(scale) = ChartScale::from_values(series.points.iter().map(|p| p.price), 0.08) else {
            ui.label("No forecast points to plot");
            return;
        };

        let line: PlotPoints = series
            .points
            .iter()
            .map(|p| [p.month as f64, p.price])
            .collect();
        let selected: Vec<[f64; 2]> = series
            .points
            .iter()
            .filter(|p| p.month == highlight_month)
            .map(|p| [p.month as f64, p.price])
            .collect();

        Plot::new(("trend_chart", series.district.as_str(), series.year))
            .height(HEIGHT)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_x(1.0)
            .include_x(12.0)
            .include_y(scale.lo)
            .include_y(scale.hi)
            .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
                month_label(mark.value).to_string()
            })
            .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| format_price(mark.value))
            .label_formatter(|_name, point| {
                format!("{}: ₹{}", month_name(point.x.round() as u32), format_price(point.y))
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Expected price", line)
                        .color(ACCENT_GREEN)
                        .width(3.0),
                );
                plot_ui.points(
                    Points::new("Selected month", selected)
                        .color(ACCENT_ORANGE)
                        .radius(7.0),
                );
            });
    }
}

/// Abbreviated month for whole-number ticks between 1 and 12.
fn month_label(value: f64) -> &'static str {
    if value.fract() != 0.0 || !(1.0..=12.0).contains(&value) {
        return "";
    }
    month_abbrev(value as u32)
}

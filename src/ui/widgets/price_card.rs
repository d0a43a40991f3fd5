use super::palette::{ACCENT_BLUE, ACCENT_GREEN, HIGHLIGHT_BG};
use crate::types::ResultBundle;
use egui::{Color32, RichText};

pub struct PriceCard;

impl PriceCard {
    pub fn show(ui: &mut egui::Ui, results: &ResultBundle) {
        egui::Frame::new()
            .fill(HIGHLIGHT_BG)
            .stroke(egui::Stroke::new(2.0, ACCENT_GREEN))
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "Expected Selling Price for {}",
                            super::month_name(results.query.month)
                        ))
                        .color(Color32::from_gray(85)),
                    );
                    ui.label(
                        RichText::new(format!("₹{}", format_price(results.price)))
                            .size(40.0)
                            .strong()
                            .color(ACCENT_GREEN),
                    );
                    ui.label(RichText::new("per Quintal (100 kg)").strong());
                });
            });

        ui.add_space(12.0);

        ui.group(|ui| {
            ui.label(RichText::new("Key Details").strong().color(ACCENT_BLUE));
            ui.label(format!("Market: {}", results.query.district));
            ui.label(format!("Prediction Year: {}", results.query.year));
            ui.label(format!("Quality Grade: Grade {}", results.query.grade));
            ui.label(
                RichText::new("A better grade always fetches a higher price.")
                    .italics()
                    .small(),
            );
        });
    }
}

/// Whole rupees with comma thousands separators, e.g. `12,345`.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "—".to_string();
    }
    let rounded = price.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

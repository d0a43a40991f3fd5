use crate::ui::state::{AppState, Page};
use crate::ui::widgets::palette::ACCENT_GREEN;
use egui::RichText;

pub struct WelcomePanel;

impl WelcomePanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading(RichText::new("Know your price before you sell").size(28.0).color(ACCENT_GREEN));
            ui.add_space(8.0);
            ui.label("Pick a market district, a crop and a month to get the expected price per quintal,");
            ui.label("a 12-month seasonal trend, and how other districts compare.");
            ui.add_space(16.0);

            ui.label(format!(
                "{} districts and {} commodities available",
                state.district_options.len(),
                state.commodity_options.len()
            ));

            ui.add_space(16.0);
            if ui
                .add_sized([240.0, 36.0], egui::Button::new(RichText::new("Start Forecasting").strong()))
                .clicked()
            {
                state.page = Page::Dashboard;
            }
        });
    }
}

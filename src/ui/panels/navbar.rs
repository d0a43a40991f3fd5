use crate::ui::state::{AppState, Page};

pub struct NavBar;

impl NavBar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.heading("Crop Price Forecaster");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let has_results = state.results.is_some();
                ui.add_enabled_ui(has_results, |ui| {
                    if ui.selectable_label(state.page == Page::Results, "Results").clicked() {
                        state.page = Page::Results;
                    }
                });
                if ui.selectable_label(state.page == Page::Dashboard, "Dashboard").clicked() {
                    state.page = Page::Dashboard;
                }
                if ui.selectable_label(state.page == Page::Welcome, "Home").clicked() {
                    state.page = Page::Welcome;
                }
            });
        });
    }
}

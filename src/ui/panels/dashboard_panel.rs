use crate::ui::state::AppState;
use crate::ui::widgets::SelectionInputs;
use egui::{Color32, RichText};

/// What the user asked for on this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Forecast,
    SaveDefaults,
}

pub struct DashboardPanel;

impl DashboardPanel {
    pub fn new() -> Self {
        Self
    }

    /// Draw the form. Acting on the returned request is left to the app.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> DashboardAction {
        ui.heading("Market Intelligence Dashboard");
        ui.separator();

        if let Some(error) = &state.model_error {
            ui.colored_label(Color32::RED, format!("Model not loaded: {}", error));
            ui.separator();
        }

        ui.label(RichText::new("Set Prediction Parameters").size(18.0));
        ui.group(|ui| {
            SelectionInputs::show(ui, state);
        });

        ui.add_space(8.0);
        let mut action = DashboardAction::None;
        if ui
            .add_sized(
                [ui.available_width(), 36.0],
                egui::Button::new(RichText::new("Generate Trends and Price Forecast").strong()),
            )
            .clicked()
        {
            action = DashboardAction::Forecast;
        }
        if ui
            .button("Save grade, year and month as defaults")
            .clicked()
        {
            action = DashboardAction::SaveDefaults;
        }

        if let Some(error) = &state.error_message {
            ui.colored_label(Color32::RED, format!("⚠ {}", error));
        }
        ui.label(RichText::new(&state.status_message).weak());

        action
    }
}

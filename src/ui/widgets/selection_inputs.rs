use crate::types::Grade;
use crate::ui::state::AppState;
use egui::RichText;

pub struct SelectionInputs;

impl SelectionInputs {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.label(RichText::new("Crop and Location Details").strong());

        egui::Grid::new("selection_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Market District:");
                Self::category_combo(
                    ui,
                    "district_select",
                    &mut state.selected_district,
                    &state.district_options,
                    &state.district_placeholder,
                );
                ui.end_row();

                ui.label("Crop Commodity:");
                Self::category_combo(
                    ui,
                    "commodity_select",
                    &mut state.selected_commodity,
                    &state.commodity_options,
                    &state.commodity_placeholder,
                );
                ui.end_row();

                ui.label("Quality Grade:");
                ui.horizontal(|ui| {
                    for grade in Grade::all() {
                        ui.radio_value(&mut state.grade, grade, grade.to_string());
                    }
                    ui.label(RichText::new("1 = Lowest, 3 = Best").small().weak());
                });
                ui.end_row();
            });

        ui.separator();

        ui.label(RichText::new("Selling Time").strong());
        ui.label(RichText::new("Select the year and specific month for the forecast.").small());

        ui.add(
            egui::Slider::new(&mut state.year, state.year_range.clone())
                .text("Prediction Year"),
        );
        ui.add(
            egui::Slider::new(&mut state.month, crate::types::MONTHS)
                .text("Forecast Month")
                .custom_formatter(|value, _| super::month_abbrev(value as u32).to_string()),
        );
    }

    fn category_combo(
        ui: &mut egui::Ui,
        id: &str,
        selected: &mut Option<String>,
        options: &[String],
        placeholder: &str,
    ) {
        let text = selected.as_deref().unwrap_or(placeholder).to_string();
        egui::ComboBox::from_id_salt(id)
            .selected_text(text)
            .width(200.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(selected, None, placeholder);
                for option in options {
                    ui.selectable_value(selected, Some(option.clone()), option.as_str());
                }
            });
    }
}

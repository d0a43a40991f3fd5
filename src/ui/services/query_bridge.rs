use crate::error::{ForecastError, Result};
use crate::types::QueryState;
use crate::ui::state::AppState;

pub struct QueryBridge;

impl QueryBridge {
    /// Convert the form selections into a query, refusing placeholders.
    pub fn to_query(state: &AppState) -> Result<QueryState> {
        let district = Self::chosen(&state.selected_district, &state.district_placeholder);
        let commodity = Self::chosen(&state.selected_commodity, &state.commodity_placeholder);

        match (district, commodity) {
            (Some(district), Some(commodity)) => Ok(QueryState {
                district: district.to_string(),
                commodity: commodity.to_string(),
                grade: state.grade,
                year: state.year,
                month: state.month,
            }),
            _ => Err(ForecastError::InvalidSelection(
                "Please select the Market District and Crop Commodity to proceed.".to_string(),
            )),
        }
    }

    fn chosen<'a>(selection: &'a Option<String>, placeholder: &str) -> Option<&'a str> {
        selection
            .as_deref()
            .filter(|value| !value.is_empty() && *value != placeholder)
    }
}

pub mod chart_scale;
pub mod comparison_chart;
pub mod palette;
pub mod price_card;
pub mod selection_inputs;
pub mod trend_chart;

pub use chart_scale::ChartScale;
pub use comparison_chart::ComparisonChart;
pub use price_card::{format_price, PriceCard};
pub use selection_inputs::SelectionInputs;
pub use trend_chart::TrendChart;

/// Full English month name for 1..=12, empty otherwise.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

pub fn month_abbrev(month: u32) -> &'static str {
    let name = month_name(month);
    name.get(..3).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_abbrev(9), "Sep");
        assert_eq!(month_name(0), "");
        assert_eq!(month_abbrev(13), "");
    }
}

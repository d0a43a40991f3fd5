use super::query_bridge::QueryBridge;
use crate::engines::ForecastPipeline;
use crate::error::Result;
use crate::ui::state::{AppState, Page};

pub struct ForecastRunner;

impl ForecastRunner {
    /// Validate the form, run the pipeline and switch to the results page.
    ///
    /// The previous result bundle is dropped as soon as a submission is made.
    pub fn submit(state: &mut AppState, pipeline: &ForecastPipeline) -> Result<()> {
        state.results = None;

        let query = QueryBridge::to_query(state)?;
        let bundle = pipeline.run(&query)?;

        state.status_message = format!(
            "Forecast ready for {} in {}",
            bundle.query.commodity, bundle.query.district
        );
        state.results = Some(bundle);
        state.error_message = None;
        state.page = Page::Results;
        Ok(())
    }

    /// `submit`, with any failure kept on the state for display.
    pub fn handle_submit(state: &mut AppState, pipeline: &ForecastPipeline) {
        if let Err(e) = Self::submit(state, pipeline) {
            if e.is_model_unavailable() {
                log::error!("{}", e);
            } else {
                log::warn!("{}", e);
            }
            state.status_message = "Forecast not generated".to_string();
            state.error_message = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::InferenceEngine;
    use crate::error::ForecastError;
    use crate::ml::features::{FeatureSchema, FeatureVector};
    use crate::ml::models::Predictor;
    use crate::types::ComparisonScope;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn pipeline(predictor: Option<Arc<dyn Predictor>>) -> ForecastPipeline {
        let engine = InferenceEngine::new(Arc::new(FeatureSchema::fallback()), predictor);
        ForecastPipeline::new(engine, vec!["Pune".to_string()], ComparisonScope::AllMonths)
    }

    fn filled_state() -> AppState {
        let mut state = AppState::default();
        state.page = Page::Dashboard;
        state.selected_district = Some("Pune".to_string());
        state.selected_commodity = Some("Wheat".to_string());
        state
    }

    #[test]
    fn test_submit_switches_to_results() {
        let predictor: Arc<dyn Predictor> = Arc::new(|v: &FeatureVector| 1000.0 + v.as_slice()[1]);
        let mut state = filled_state();

        ForecastRunner::submit(&mut state, &pipeline(Some(predictor))).unwrap();

        assert_eq!(state.page, Page::Results);
        let results = state.results.as_ref().unwrap();
        assert_eq!(results.price, 1001.0);
        assert_eq!(results.forecast.len(), 12);
    }

    #[test]
    fn test_invalid_selection_reported_before_model() {
        let mut state = AppState::default();
        state.page = Page::Dashboard;

        let err = ForecastRunner::submit(&mut state, &pipeline(None)).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidSelection(_)));
        assert_eq!(state.page, Page::Dashboard);
    }

    #[test]
    fn test_placeholder_selection_never_reaches_model() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let predictor: Arc<dyn Predictor> = Arc::new(move |_: &FeatureVector| {
            counter.fetch_add(1, Ordering::SeqCst);
            2000.0
        });
        let pipeline = pipeline(Some(predictor));

        let mut state = filled_state();
        state.selected_commodity = Some(state.commodity_placeholder.clone());
        let err = ForecastRunner::submit(&mut state, &pipeline).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidSelection(_)));

        state.selected_commodity = Some("Wheat".to_string());
        state.selected_district = None;
        ForecastRunner::handle_submit(&mut state, &pipeline);
        assert!(state.error_message.as_deref().unwrap_or("").contains("Invalid selection"));
        assert!(state.results.is_none());

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_model_blocks_forecast() {
        let mut state = filled_state();

        ForecastRunner::handle_submit(&mut state, &pipeline(None));

        assert!(state.error_message.as_deref().unwrap_or("").contains("Model unavailable"));
        assert!(state.results.is_none());
        assert_eq!(state.page, Page::Dashboard);
    }
}

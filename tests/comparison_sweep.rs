use cropcast::engines::{ComparisonRequest, ForecastPipeline, InferenceEngine};
use cropcast::ml::features::{FeatureSchema, FeatureVector};
use cropcast::ml::models::Predictor;
use cropcast::types::{ComparisonScope, Grade, QueryState};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn schema() -> Arc<FeatureSchema> {
    let columns = [
        "Year",
        "Month",
        "Day",
        "Grade_Encoded",
        "District_Kolhapur",
        "District_Nashik",
        "District_Pune",
        "Commodity_Wheat",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    Arc::new(FeatureSchema::new(columns).unwrap())
}

fn districts() -> Vec<String> {
    vec!["Pune".to_string(), "Nashik".to_string(), "Kolhapur".to_string()]
}

fn counting_model(calls: Arc<AtomicUsize>) -> Arc<dyn Predictor> {
    Arc::new(move |v: &FeatureVector| {
        calls.fetch_add(1, Ordering::SeqCst);
        let x = v.as_slice();
        2000.0 + 15.0 * x[1] + 50.0 * x[3] + 40.0 * x[4] + 120.0 * x[5] + 90.0 * x[6] + 5.0 * x[7]
    })
}

/// Pune and Nashik tie at 2500 in April; Kolhapur stays below.
fn tied_model() -> Arc<dyn Predictor> {
    Arc::new(|v: &FeatureVector| {
        let x = v.as_slice();
        if x[1] == 4.0 && (x[5] == 1.0 || x[6] == 1.0) {
            2500.0
        } else {
            2000.0 + x[1] + 10.0 * x[4]
        }
    })
}

#[test]
fn test_all_months_table_covers_every_district_and_month() {
    let engine = InferenceEngine::new(schema(), Some(counting_model(Arc::new(AtomicUsize::new(0)))));
    let known = districts();

    let table = engine
        .compare(&ComparisonRequest {
            commodity: "Wheat",
            year: 2025,
            grade: Grade::Best,
            selected_district: "Pune",
            selected_month: 6,
            known_districts: &known,
            forecast_for_selected: None,
            scope: ComparisonScope::AllMonths,
        })
        .unwrap();

    assert_eq!(table.rows.len(), 36);
    for district in &known {
        let months: Vec<u32> = table.rows_for_district(district).map(|r| r.month).collect();
        assert_eq!(months, (1..=12).collect::<Vec<u32>>());
    }
}

#[test]
fn test_selected_district_row_reuses_forecast() {
    let calls = Arc::new(AtomicUsize::new(0));
    let engine = InferenceEngine::new(schema(), Some(counting_model(Arc::clone(&calls))));
    let known = districts();

    let forecast = engine.forecast("Pune", "Wheat", Grade::Best, 2025).unwrap();
    calls.store(0, Ordering::SeqCst);

    let request = ComparisonRequest {
        commodity: "Wheat",
        year: 2025,
        grade: Grade::Best,
        selected_district: "Pune",
        selected_month: 6,
        known_districts: &known,
        forecast_for_selected: Some(&forecast),
        scope: ComparisonScope::AllMonths,
    };
    let reused = engine.compare(&request).unwrap();

    // Only the two other districts were predicted.
    assert_eq!(calls.load(Ordering::SeqCst), 24);
    for point in &forecast.points {
        assert_eq!(reused.price_for("Pune", point.month), Some(point.price));
    }

    let scratch = engine
        .compare(&ComparisonRequest {
            forecast_for_selected: None,
            ..request.clone()
        })
        .unwrap();
    assert_eq!(reused, scratch);
}

#[test]
fn test_mismatched_forecast_is_not_reused() {
    let engine = InferenceEngine::new(schema(), Some(counting_model(Arc::new(AtomicUsize::new(0)))));
    let known = districts();
    let other_year = engine.forecast("Pune", "Wheat", Grade::Best, 2030).unwrap();

    let table = engine
        .compare(&ComparisonRequest {
            commodity: "Wheat",
            year: 2025,
            grade: Grade::Best,
            selected_district: "Pune",
            selected_month: 1,
            known_districts: &known,
            forecast_for_selected: Some(&other_year),
            scope: ComparisonScope::SelectedMonth,
        })
        .unwrap();

    let direct = engine
        .predict_point("Pune", "Wheat", Grade::Best, 2025, 1)
        .unwrap();
    assert_eq!(table.price_for("Pune", 1), Some(direct));
}

#[test]
fn test_selected_month_scope_has_one_row_per_district() {
    let calls = Arc::new(AtomicUsize::new(0));
    let engine = InferenceEngine::new(schema(), Some(counting_model(Arc::clone(&calls))));
    let mut known = districts();
    known.push("Pune".to_string());

    let table = engine
        .compare(&ComparisonRequest {
            commodity: "Wheat",
            year: 2025,
            grade: Grade::Standard,
            selected_district: "Satara",
            selected_month: 9,
            known_districts: &known,
            forecast_for_selected: None,
            scope: ComparisonScope::SelectedMonth,
        })
        .unwrap();

    let order: Vec<&str> = table.rows.iter().map(|r| r.district.as_str()).collect();
    assert_eq!(order, vec!["Satara", "Pune", "Nashik", "Kolhapur"]);
    assert!(table.rows.iter().all(|r| r.month == 9));
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_tied_districts_are_both_highest() {
    let engine = InferenceEngine::new(schema(), Some(tied_model()));
    let pipeline = ForecastPipeline::new(engine, districts(), ComparisonScope::AllMonths);

    let bundle = pipeline
        .run(&QueryState {
            district: "Pune".to_string(),
            commodity: "Wheat".to_string(),
            grade: Grade::Best,
            year: 2025,
            month: 4,
        })
        .unwrap();

    let view = bundle.month_comparison();
    assert_eq!(view.max_price, Some(2500.0));
    let mut highest = view.highest_districts();
    highest.sort();
    assert_eq!(highest, vec!["Nashik", "Pune"]);
    assert_eq!(view.entries.last().map(|e| e.district.as_str()), Some("Kolhapur"));
}

#[test]
fn test_pipeline_bundle_is_consistent() {
    let engine = InferenceEngine::new(schema(), Some(counting_model(Arc::new(AtomicUsize::new(0)))));
    let pipeline = ForecastPipeline::new(engine, districts(), ComparisonScope::AllMonths);
    let query = QueryState {
        district: "Nashik".to_string(),
        commodity: "Wheat".to_string(),
        grade: Grade::Low,
        year: 2026,
        month: 11,
    };

    let bundle = pipeline.run(&query).unwrap();

    assert_eq!(bundle.query, query);
    assert_eq!(bundle.highlighted_point().map(|p| p.price), Some(bundle.price));
    assert_eq!(bundle.comparison.price_for("Nashik", 11), Some(bundle.price));
    for point in &bundle.forecast.points {
        assert_eq!(bundle.comparison.price_for("Nashik", point.month), Some(point.price));
    }
}

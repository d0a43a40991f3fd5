use cropcast::config::AssetsConfig;
use cropcast::engines::{ForecastPipeline, InferenceEngine};
use cropcast::error::ForecastError;
use cropcast::ml::features::FeatureSchema;
use cropcast::ml::models::ModelAssets;
use cropcast::types::{ComparisonScope, Grade, QueryState};
use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec, ValueType};
use gbdt::gradient_boost::GBDT;
use std::path::PathBuf;

const COLUMNS: &str = r#"["Year","Month","Day","Grade_Encoded","District_Nashik","District_Pune","Commodity_Wheat"]"#;

/// Training rows over the seven columns above: prices rise after June and
/// Pune trades above Nashik.
fn training_rows() -> DataVec {
    let mut rows = DataVec::new();
    for month in 1..=12 {
        for (nashik, pune) in [(1.0, 0.0), (0.0, 1.0)] {
            let season: ValueType = if month > 6 { 400.0 } else { 0.0 };
            let price = 2000.0 + season + 200.0 * pune;
            let features: Vec<ValueType> = vec![2025.0, month as ValueType, 1.0, 3.0, nashik, pune, 1.0];
            rows.push(Data::new_training_data(features, 1.0, price, None));
        }
    }
    rows
}

fn train(feature_size: usize) -> GBDT {
    let mut cfg = Config::new();
    cfg.set_feature_size(feature_size);
    cfg.set_max_depth(3);
    cfg.set_iterations(60);
    cfg.set_shrinkage(0.3);
    cfg.set_loss("SquaredError");

    let mut rows = training_rows();
    let mut model = GBDT::new(&cfg);
    model.fit(&mut rows);
    model
}

fn write_assets(name: &str, columns: &str, model: &GBDT) -> AssetsConfig {
    let dir = std::env::temp_dir().join(format!("cropcast_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let feature_columns_path = dir.join("feature_columns.json");
    let model_path = dir.join("model.json");
    std::fs::write(&feature_columns_path, columns).unwrap();
    model.save_model(model_path.to_str().unwrap()).unwrap();
    AssetsConfig {
        model_path,
        feature_columns_path,
    }
}

#[test]
fn test_trained_model_drives_pipeline() {
    let config = write_assets("trained", COLUMNS, &train(7));
    let assets = ModelAssets::load(&config);
    assert!(assets.is_available(), "{:?}", assets.load_error);
    assert!(assets.load_error.is_none());

    let pipeline = ForecastPipeline::new(
        InferenceEngine::from_assets(&assets),
        vec!["Pune".to_string(), "Nashik".to_string()],
        ComparisonScope::SelectedMonth,
    );
    let bundle = pipeline
        .run(&QueryState {
            district: "Pune".to_string(),
            commodity: "Wheat".to_string(),
            grade: Grade::Best,
            year: 2025,
            month: 8,
        })
        .unwrap();

    assert_eq!(bundle.forecast.price_at(8), Some(bundle.price));
    let january = bundle.forecast.price_at(1).unwrap();
    assert!(bundle.price > january + 200.0, "Jan {} Aug {}", january, bundle.price);

    let nashik = bundle.comparison.price_for("Nashik", 8).unwrap();
    assert!(bundle.price > nashik);
    assert_eq!(bundle.month_comparison().highest_districts(), vec!["Pune"]);
}

#[test]
fn test_width_mismatch_marks_model_unavailable() {
    let narrow = r#"["Year","Month","Day","Grade_Encoded","District_Pune"]"#;
    let config = write_assets("mismatch", narrow, &train(7));

    let assets = ModelAssets::load(&config);
    assert!(!assets.is_available());
    assert_eq!(assets.schema.width(), 5);

    let engine = InferenceEngine::from_assets(&assets);
    let err = engine
        .predict_point("Pune", "Wheat", Grade::Best, 2025, 1)
        .unwrap_err();
    assert!(err.is_model_unavailable());

    assert!(matches!(
        ModelAssets::load_strict(&config),
        Err(ForecastError::Artifact(_))
    ));
}

#[test]
fn test_missing_files_fall_back_to_minimal_schema() {
    let config = AssetsConfig {
        model_path: PathBuf::from("/nonexistent/cropcast/model.json"),
        feature_columns_path: PathBuf::from("/nonexistent/cropcast/feature_columns.json"),
    };

    let assets = ModelAssets::load(&config);
    assert!(!assets.is_available());
    assert_eq!(*assets.schema, FeatureSchema::fallback());
    assert!(assets.load_error.as_deref().unwrap_or("").contains("not found"));

    let engine = InferenceEngine::from_assets(&assets);
    let err = engine.forecast("Pune", "Wheat", Grade::Best, 2025).unwrap_err();
    assert!(matches!(err, ForecastError::ModelUnavailable(_)));
}

#[test]
fn test_missing_model_keeps_loaded_schema() {
    let dir = std::env::temp_dir().join(format!("cropcast_schema_only_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let feature_columns_path = dir.join("feature_columns.json");
    std::fs::write(&feature_columns_path, COLUMNS).unwrap();
    let config = AssetsConfig {
        model_path: dir.join("absent_model.json"),
        feature_columns_path,
    };

    let assets = ModelAssets::load(&config);
    assert!(!assets.is_available());
    assert_eq!(assets.schema.width(), 7);
    let message = assets.load_error.unwrap();
    assert!(message.starts_with("Model file not found"), "{}", message);
}

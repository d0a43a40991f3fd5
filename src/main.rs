use anyhow::Context;
use cropcast::config::AppConfig;
use cropcast::ml::models::ModelAssets;
use cropcast::ui::CropcastApp;
use eframe::NativeOptions;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = "cropcast.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // An explicit path must exist; the default file is optional.
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG)).filter(|p| p.exists()));

    let config = AppConfig::load_layered(config_path.as_deref())
        .with_context(|| format!("failed to load configuration from {:?}", config_path))?;

    let assets = ModelAssets::load(&config.assets);
    let settings_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Crop Price Forecaster"),
        ..Default::default()
    };

    eframe::run_native(
        "Crop Price Forecaster",
        native_options,
        Box::new(move |cc| Ok(Box::new(CropcastApp::new(cc, config, assets, settings_path)))),
    )
    .map_err(|e| anyhow::anyhow!("UI terminated with an error: {}", e))
}

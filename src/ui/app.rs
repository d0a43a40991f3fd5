use super::panels::{DashboardAction, DashboardPanel, NavBar, ResultsPanel, WelcomePanel};
use super::services::{ForecastRunner, SettingsStore};
use super::state::{AppState, Page};
use crate::config::AppConfig;
use crate::engines::{ForecastPipeline, InferenceEngine};
use crate::ml::models::ModelAssets;
use std::path::PathBuf;

pub struct CropcastApp {
    state: AppState,
    pipeline: ForecastPipeline,
    settings: SettingsStore,
    navbar: NavBar,
    welcome_panel: WelcomePanel,
    dashboard_panel: DashboardPanel,
    results_panel: ResultsPanel,
}

impl CropcastApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        assets: ModelAssets,
        settings_path: PathBuf,
    ) -> Self {
        Self::from_parts(config, assets, settings_path)
    }

    /// An invalid configuration is replaced by the defaults, keeping only
    /// its asset paths.
    pub fn from_parts(config: AppConfig, assets: ModelAssets, settings_path: PathBuf) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Ignoring invalid configuration: {}", e);
                AppConfig {
                    assets: config.assets,
                    ..AppConfig::default()
                }
            }
        };

        let state = AppState::from_config(&config, &assets.schema, assets.load_error.clone());
        let engine = InferenceEngine::from_assets(&assets);

        log::info!(
            "UI ready: {} districts, {} commodities, model {}",
            state.district_options.len(),
            state.commodity_options.len(),
            if engine.is_available() { "loaded" } else { "unavailable" }
        );

        let pipeline = ForecastPipeline::new(
            engine,
            state.district_options.clone(),
            config.forecast.comparison_scope,
        );

        Self {
            state,
            pipeline,
            settings: SettingsStore::new(config, settings_path),
            navbar: NavBar::new(),
            welcome_panel: WelcomePanel::new(),
            dashboard_panel: DashboardPanel::new(),
            results_panel: ResultsPanel::new(),
        }
    }
}

impl eframe::App for CropcastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.navbar.show(ui, &mut self.state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.state.page {
                Page::Welcome => self.welcome_panel.show(ui, &mut self.state),
                Page::Dashboard => match self.dashboard_panel.show(ui, &mut self.state) {
                    DashboardAction::Forecast => {
                        ForecastRunner::handle_submit(&mut self.state, &self.pipeline)
                    }
                    DashboardAction::SaveDefaults => self.settings.handle_save(&mut self.state),
                    DashboardAction::None => {}
                },
                Page::Results => self.results_panel.show(ui, &mut self.state),
            });
        });
    }
}

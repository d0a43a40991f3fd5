pub mod export_service;
pub mod forecast_runner;
pub mod query_bridge;
pub mod settings_store;

pub use export_service::{ExportKind, ExportService};
pub use forecast_runner::ForecastRunner;
pub use query_bridge::QueryBridge;
pub use settings_store::SettingsStore;

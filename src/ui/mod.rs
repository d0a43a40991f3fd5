mod app;
mod panels;
mod services;
mod state;
mod widgets;

pub use app::CropcastApp;
pub use services::{ExportKind, ExportService, ForecastRunner, QueryBridge, SettingsStore};
pub use state::{AppState, Page};
pub use widgets::{format_price, month_abbrev, month_name, ChartScale};

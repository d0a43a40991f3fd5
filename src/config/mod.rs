pub mod traits;
pub mod assets;
pub mod forecast;
pub mod catalog;
pub mod manager;

pub use manager::{AppConfig, ConfigManager, ENV_PREFIX};
pub use assets::AssetsConfig;
pub use forecast::ForecastConfig;
pub use catalog::CatalogConfig;
pub use traits::ConfigSection;

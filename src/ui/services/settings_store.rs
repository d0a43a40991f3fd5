use crate::config::{AppConfig, ConfigManager};
use crate::error::Result;
use crate::ui::state::AppState;
use std::path::PathBuf;

/// Persists form choices as the start-up defaults in the config file.
pub struct SettingsStore {
    manager: ConfigManager,
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(config: AppConfig, path: PathBuf) -> Self {
        Self {
            manager: ConfigManager::with_config(config),
            path,
        }
    }

    /// Make the current grade, year and month the defaults and write the file.
    ///
    /// Nothing is written when the edited configuration fails validation.
    pub fn save_defaults(&self, state: &AppState) -> Result<()> {
        self.manager.update(|config| {
            config.forecast.default_grade = state.grade.encoded();
            config.forecast.default_year = state.year;
            config.forecast.default_month = state.month;
        })?;
        self.manager.save_to_file(&self.path)?;
        log::info!("Saved default selections to {}", self.path.display());
        Ok(())
    }

    /// `save_defaults`, with the outcome kept on the state for display.
    pub fn handle_save(&self, state: &mut AppState) {
        state.status_message = match self.save_defaults(state) {
            Ok(()) => format!("Defaults saved to {}", self.path.display()),
            Err(e) => {
                log::warn!("Saving defaults failed: {}", e);
                format!("Defaults not saved: {}", e)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Grade;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cropcast_settings_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_saved_defaults_reload_through_layers() {
        let path = temp_path("saved.toml");
        let store = SettingsStore::new(AppConfig::default(), path.clone());
        let mut state = AppState::default();
        state.grade = Grade::Standard;
        state.year = 2027;
        state.month = 10;

        store.save_defaults(&state).unwrap();

        let reloaded = AppConfig::load_layered(Some(path.as_path())).unwrap();
        assert_eq!(reloaded.forecast.default_grade, 2);
        assert_eq!(reloaded.forecast.default_year, 2027);
        assert_eq!(reloaded.forecast.default_month, 10);

        let fresh = AppState::from_config(&reloaded, &crate::ml::features::FeatureSchema::fallback(), None);
        assert_eq!(fresh.grade, Grade::Standard);
        assert_eq!(fresh.year, 2027);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_out_of_range_year_is_not_written() {
        let path = temp_path("rejected.toml");
        let store = SettingsStore::new(AppConfig::default(), path.clone());
        let mut state = AppState::default();
        state.year = 2099;

        store.handle_save(&mut state);

        assert!(state.status_message.starts_with("Defaults not saved"));
        assert!(!path.exists());
    }
}

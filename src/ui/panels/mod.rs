pub mod dashboard_panel;
pub mod navbar;
pub mod results_panel;
pub mod welcome_panel;

pub use dashboard_panel::{DashboardAction, DashboardPanel};
pub use navbar::NavBar;
pub use results_panel::ResultsPanel;
pub use welcome_panel::WelcomePanel;

//! Planner configuration
//!
//! Re-exports the shared config type from waypoint-types and provides the
//! platform default data path and confy persistence.

pub use waypoint_types::PlannerConfig;

use crate::error::ConfigError;

const APP_NAME: &str = "waypoint";
const CONFIG_NAME: &str = "config";

fn default_data_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("waypoint").join("trips.json"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "trips.json".to_string())
}

/// Extension trait for PlannerConfig persistence
pub trait PlannerConfigExt: Sized {
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn load_with_defaults() -> Self;
    fn save(&self) -> Result<(), ConfigError>;
}

impl PlannerConfigExt for PlannerConfig {
    /// Stored configuration, or platform defaults if it cannot be read
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default configuration");
            Self::load_with_defaults()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        let mut config: PlannerConfig = confy::load(APP_NAME, CONFIG_NAME)?;
        if config.data_path.is_empty() {
            config.data_path = default_data_path();
        }
        Ok(config)
    }

    fn load_with_defaults() -> Self {
        PlannerConfig::with_data_path(default_data_path())
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }
}

use chrono::NaiveDateTime;
use waypoint_core::{PlannerConfig, PlannerConfigExt, TripIndex};

use crate::CliError;

/// Holds all state for the CLI session.
/// This is a lightweight container - derivation logic lives in waypoint-core.
pub struct CliContext {
    pub config: PlannerConfig,
    /// The loaded trip export. None until `load` succeeds.
    index: Option<TripIndex>,
    /// Instant pinned with `now --set`; the clock is used otherwise.
    pinned_now: Option<NaiveDateTime>,
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CliContext {
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::load())
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            config,
            index: None,
            pinned_now: None,
        }
    }

    /// The instant every derivation in this session is computed against.
    pub fn now(&self) -> NaiveDateTime {
        self.pinned_now
            .unwrap_or_else(|| clock_now(self.config.use_utc))
    }

    pub fn pinned_now(&self) -> Option<NaiveDateTime> {
        self.pinned_now
    }

    pub fn pin_now(&mut self, now: NaiveDateTime) {
        self.pinned_now = Some(now);
    }

    pub fn clear_now(&mut self) {
        self.pinned_now = None;
    }

    pub fn index(&self) -> Result<&TripIndex, CliError> {
        self.index.as_ref().ok_or(CliError::NoExportLoaded)
    }

    pub fn set_index(&mut self, index: TripIndex) {
        self.index = Some(index);
    }
}

fn clock_now(use_utc: bool) -> NaiveDateTime {
    if use_utc {
        chrono::Utc::now().naive_utc()
    } else {
        chrono::Local::now().naive_local()
    }
}

//! Storage layer for the cash calculator
//!
//! Two JSON records live in the base directory: `settings.json`
//! ([`AppSettings`]) and `calculation.json` ([`CalculationData`]). [`Storage`]
//! combines both into a single [`SessionState`] store.

pub mod calculation;
pub mod file_io;
pub mod repository;
pub mod state;

pub use calculation::{CalculationData, DenominationState};
pub use file_io::{read_json_or_default, write_json_atomic};
pub use repository::{JsonRepository, StateStore};
pub use state::SessionState;

use crate::config::{AppSettings, CashPaths};
use crate::error::CashResult;

/// Storage coordinator for both persisted records
pub struct Storage {
    paths: CashPaths,
    pub settings: JsonRepository<AppSettings>,
    pub calculation: JsonRepository<CalculationData>,
}

impl Storage {
    /// Create a new Storage instance, creating the base directory if needed
    pub fn new(paths: CashPaths) -> CashResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            settings: JsonRepository::new(paths.settings_file()),
            calculation: JsonRepository::new(paths.calculation_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CashPaths {
        &self.paths
    }
}

impl StateStore<SessionState> for Storage {
    fn load(&self) -> SessionState {
        let settings = self.settings.load();
        let data = self.calculation.load();
        SessionState::from_records(settings, data)
    }

    fn save(&self, state: &SessionState) -> CashResult<()> {
        let (settings, data) = state.to_records();
        self.settings.save(&settings)?;
        self.calculation.save(&data)
    }
}

//! Path management for the cash calculator
//!
//! ## Path Resolution Order
//!
//! 1. `CASH_CALCULATOR_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for the
//!    `KremenchugskayaTeam/CashCalculator` application
//!    (`~/.config/cashcalculator` on Linux, `%APPDATA%\KremenchugskayaTeam\CashCalculator\config`
//!    on Windows, `~/Library/Application Support/...` on macOS)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CashError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CASH_CALCULATOR_DATA_DIR";

const VENDOR: &str = "KremenchugskayaTeam";
const APPLICATION: &str = "CashCalculator";

/// Manages all paths used by the cash calculator
#[derive(Debug, Clone)]
pub struct CashPaths {
    /// Base directory for all persisted files
    base_dir: PathBuf,
}

impl CashPaths {
    /// Create a new CashPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform configuration directory can be determined
    /// and no override is set.
    pub fn new() -> Result<Self, CashError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file (filters, expected amount, preferences)
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the calculation data file (counts and last totals)
    pub fn calculation_file(&self) -> PathBuf {
        self.base_dir.join("calculation.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, CashError> {
    ProjectDirs::from("", VENDOR, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CashError::Config("Could not determine configuration directory".into()))
}

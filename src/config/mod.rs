//! Configuration module for the cash calculator
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings and preferences

pub mod paths;
pub mod settings;

pub use paths::CashPaths;
pub use settings::{AppSettings, FaceValueSet, Preferences};

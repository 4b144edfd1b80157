//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session.

pub mod count;
pub mod expected;
pub mod filter;
pub mod preferences;

pub use count::{handle_count_command, CountCommands};
pub use expected::{handle_expected_command, ExpectedCommands};
pub use filter::{handle_filter_command, FilterCommands};
pub use preferences::{handle_preference_command, PreferenceCommands};

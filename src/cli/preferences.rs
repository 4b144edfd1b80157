//! Preference CLI commands

use clap::Subcommand;

use crate::config::{CashPaths, FaceValueSet};
use crate::display::format_summary;
use crate::error::{CashError, CashResult};
use crate::services::{EmptyExpectedPolicy, Session};

/// Preference subcommands
#[derive(Subcommand)]
pub enum PreferenceCommands {
    /// Show file locations and current preferences
    Show,
    /// Choose the face value set: "full" or "reduced"
    FaceValues {
        set: String,
    },
    /// Choose how an empty expected amount is treated: "zero" or "no-comparison"
    EmptyExpected {
        policy: String,
    },
    /// Set the currency symbol shown after amounts (empty for none)
    Currency {
        symbol: String,
    },
}

/// Handle a preference command
pub fn handle_preference_command(
    session: &mut Session,
    paths: &CashPaths,
    cmd: PreferenceCommands,
) -> CashResult<()> {
    match cmd {
        PreferenceCommands::Show => {
            let preferences = session.preferences();
            println!("Cash Calculator Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Calculation file: {}", paths.calculation_file().display());
            println!();
            println!("Preferences:");
            println!("  Face values:    {:?}", preferences.face_value_set);
            println!("  Empty expected: {:?}", preferences.empty_expected_policy);
            println!("  Currency:       {}", preferences.currency_symbol);
        }
        PreferenceCommands::FaceValues { set } => {
            let set = FaceValueSet::parse(&set).ok_or_else(|| {
                CashError::Config(format!(
                    "Invalid face value set: '{}'. Valid sets: full, reduced",
                    set
                ))
            })?;

            let summary = session.set_face_value_set(set);
            println!("Face values: {:?}", session.register().face_values());
            println!();
            print!(
                "{}",
                format_summary(&summary, &session.preferences().currency_symbol)
            );
        }
        PreferenceCommands::EmptyExpected { policy } => {
            let policy = EmptyExpectedPolicy::parse(&policy).ok_or_else(|| {
                CashError::Config(format!(
                    "Invalid policy: '{}'. Valid policies: zero, no-comparison",
                    policy
                ))
            })?;

            let summary = session.set_empty_expected_policy(policy);
            println!("Empty expected amount: {:?}", policy);
            println!();
            print!(
                "{}",
                format_summary(&summary, &session.preferences().currency_symbol)
            );
        }
        PreferenceCommands::Currency { symbol } => {
            session.set_currency_symbol(&symbol);
            println!("Currency symbol: '{}'", session.preferences().currency_symbol);
        }
    }

    Ok(())
}

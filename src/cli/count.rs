//! Denomination count CLI commands

use clap::Subcommand;

use crate::display::format_summary;
use crate::error::CashResult;
use crate::services::Session;

/// Count subcommands
#[derive(Subcommand)]
pub enum CountCommands {
    /// Set the number of notes or coins of one face value
    Set {
        /// Face value (e.g. 500)
        face_value: i64,
        /// Count; anything that is not a whole number counts as zero
        #[arg(allow_hyphen_values = true)]
        count: String,
    },
    /// Reset every count to zero (expected amount and filters are kept)
    Clear,
}

/// Handle a count command
pub fn handle_count_command(session: &mut Session, cmd: CountCommands) -> CashResult<()> {
    let symbol = session.preferences().currency_symbol.clone();

    match cmd {
        CountCommands::Set { face_value, count } => {
            let summary = session.set_count_text(face_value, &count)?;
            let stored = session.register().count_of(face_value).unwrap_or(0);

            println!("{} - {}", face_value, stored);
            println!();
            print!("{}", format_summary(&summary, &symbol));
        }
        CountCommands::Clear => {
            let summary = session.clear_counts();

            println!("All counts reset to zero.");
            println!();
            print!("{}", format_summary(&summary, &symbol));
        }
    }

    Ok(())
}

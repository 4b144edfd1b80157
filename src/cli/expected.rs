//! Expected amount CLI commands

use clap::Subcommand;

use crate::display::format_summary;
use crate::error::CashResult;
use crate::services::Session;

/// Expected amount subcommands
#[derive(Subcommand)]
pub enum ExpectedCommands {
    /// Set the amount the drawer should contain
    Set {
        /// Amount as a whole number; empty or invalid text is handled by the
        /// configured empty-expected policy
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Leave the expected amount empty
    Clear,
}

/// Handle an expected amount command
pub fn handle_expected_command(session: &mut Session, cmd: ExpectedCommands) -> CashResult<()> {
    let summary = match cmd {
        ExpectedCommands::Set { amount } => session.set_expected_text(&amount),
        ExpectedCommands::Clear => session.set_expected_text(""),
    };

    print!(
        "{}",
        format_summary(&summary, &session.preferences().currency_symbol)
    );
    Ok(())
}

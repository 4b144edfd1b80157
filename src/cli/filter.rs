//! Denomination visibility CLI commands

use clap::Subcommand;

use crate::display::format_filter_table;
use crate::error::CashResult;
use crate::services::Session;

/// Filter subcommands
#[derive(Subcommand)]
pub enum FilterCommands {
    /// Show a denomination row in listings
    Show {
        /// Face value
        face_value: i64,
    },
    /// Hide a denomination row from listings (it still counts toward the total)
    Hide {
        /// Face value
        face_value: i64,
    },
    /// List every face value and whether it is shown
    List,
    /// Show every denomination row again
    Reset,
}

/// Handle a filter command
pub fn handle_filter_command(session: &mut Session, cmd: FilterCommands) -> CashResult<()> {
    match cmd {
        FilterCommands::Show { face_value } => {
            session.set_filter_visible(face_value, true)?;
            println!("Showing {}", face_value);
        }
        FilterCommands::Hide { face_value } => {
            session.set_filter_visible(face_value, false)?;
            println!("Hiding {}", face_value);
        }
        FilterCommands::List => {
            println!("{}", format_filter_table(session.filters().filters()));
            let hidden = session.filters().hidden_count();
            if hidden > 0 {
                println!();
                println!("{} hidden", hidden);
            }
        }
        FilterCommands::Reset => {
            session.reset_filters();
            println!("All denominations shown.");
        }
    }

    Ok(())
}

//! Terminal output formatting

pub mod denomination;
pub mod summary;

pub use denomination::{format_denomination_table, format_filter_table};
pub use summary::{format_amount, format_summary};

//! Core data models for the cash calculator
//!
//! Denominations and the register holding them, visibility filters, and the
//! summary produced by reconciliation.

pub mod denomination;
pub mod filter;
pub mod register;
pub mod summary;

pub use denomination::Denomination;
pub use filter::{DenominationFilter, FilterSet};
pub use register::{CashRegister, DEFAULT_FACE_VALUES, REDUCED_FACE_VALUES};
pub use summary::{SummaryResult, SummaryStatus};

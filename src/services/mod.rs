//! Business logic layer
//!
//! The reconciliation engine and the session coordinator that applies user
//! actions to a register and recomputes after each one.

pub mod calculation;
pub mod session;

pub use calculation::{parse_amount, parse_amount_lenient, CalculationService, EmptyExpectedPolicy};
pub use session::Session;

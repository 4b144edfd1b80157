//! Cash Calculator - cash drawer counting and reconciliation
//!
//! Count the notes and coins in a drawer, compare the total with the amount
//! the drawer should contain, and see whether it balances, is short, or is
//! over. Counts, the expected amount and display filters are kept between runs
//! in two JSON files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Denominations, the cash register, filters and summaries
//! - `services`: Reconciliation engine and the session coordinator
//! - `storage`: JSON file storage for settings and calculation data
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cash_calculator::config::CashPaths;
//! use cash_calculator::services::Session;
//! use cash_calculator::storage::Storage;
//!
//! let storage = Storage::new(CashPaths::new()?)?;
//! let mut session = Session::startup(&storage);
//! session.set_count(100, 3)?;
//! let summary = session.set_expected_text("350");
//! session.shutdown(&storage)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CashError, CashResult};

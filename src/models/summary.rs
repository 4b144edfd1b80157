//! Reconciliation summary types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing the counted total with the expected amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    /// No comparison was made (expected amount unset)
    #[default]
    None,
    /// Total matches the expected amount exactly
    Ok,
    /// Total is below the expected amount
    Under,
    /// Total is above the expected amount
    Over,
}

impl SummaryStatus {
    /// Short glyph for compact display
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::Under => "✘",
            Self::Over => "+",
            Self::None => "",
        }
    }
}

impl fmt::Display for SummaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "—",
            Self::Ok => "OK",
            Self::Under => "Under",
            Self::Over => "Over",
        };
        write!(f, "{}", label)
    }
}

/// Result of a full summary calculation
///
/// `expected` and `difference` are `None` only when no comparison was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub total: i64,
    pub expected: Option<i64>,
    pub difference: Option<i64>,
    pub status: SummaryStatus,
}

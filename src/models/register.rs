//! Cash register (denomination registry)
//!
//! Holds the canonical, descending list of supported denominations and their
//! current counts. The set of face values is fixed when the register is built;
//! afterwards only counts change.

use std::collections::BTreeSet;

use tracing::debug;

use super::denomination::Denomination;
use crate::error::{CashError, CashResult};

/// The full set of supported face values
pub const DEFAULT_FACE_VALUES: [i64; 11] = [5000, 2000, 1000, 500, 200, 100, 50, 10, 5, 2, 1];

/// The reduced set of face values (no 2-unit coin)
pub const REDUCED_FACE_VALUES: [i64; 10] = [5000, 2000, 1000, 500, 200, 100, 50, 10, 5, 1];

/// Registry of denominations held in a cash drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashRegister {
    denominations: Vec<Denomination>,
}

impl CashRegister {
    /// Create a register with the default face values, all counts zero
    pub fn new() -> Self {
        Self {
            denominations: DEFAULT_FACE_VALUES
                .iter()
                .map(|&value| Denomination::zeroed(value))
                .collect(),
        }
    }

    /// Create a register from a custom list of face values
    ///
    /// Values are deduplicated and ordered descending.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the list is empty or contains a non-positive value.
    pub fn with_face_values(values: &[i64]) -> CashResult<Self> {
        if values.is_empty() {
            return Err(CashError::InvalidArgument(
                "at least one face value is required".into(),
            ));
        }

        let unique: BTreeSet<i64> = values.iter().copied().collect();
        let denominations = unique
            .into_iter()
            .rev()
            .map(Denomination::empty)
            .collect::<CashResult<Vec<_>>>()?;

        Ok(Self { denominations })
    }

    /// All denominations in registry order (descending face value)
    pub fn denominations(&self) -> &[Denomination] {
        &self.denominations
    }

    /// Supported face values in registry order
    pub fn face_values(&self) -> Vec<i64> {
        self.denominations.iter().map(|d| d.face_value()).collect()
    }

    /// Check whether a face value is supported
    pub fn contains(&self, face_value: i64) -> bool {
        self.denominations.iter().any(|d| d.face_value() == face_value)
    }

    /// Current count for a face value, if supported
    pub fn count_of(&self, face_value: i64) -> Option<i64> {
        self.denominations
            .iter()
            .find(|d| d.face_value() == face_value)
            .map(|d| d.count())
    }

    /// Overwrite the count of one denomination
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDenomination` for an unknown face value and
    /// `InvalidArgument` for a negative count or one that would push the
    /// register total past `i64::MAX`. The register is left unchanged on error.
    pub fn set_count(&mut self, face_value: i64, count: i64) -> CashResult<()> {
        let index = self
            .denominations
            .iter()
            .position(|d| d.face_value() == face_value)
            .ok_or(CashError::UnsupportedDenomination(face_value))?;

        let updated = Denomination::new(face_value, count)?;

        self.denominations
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .try_fold(updated.line_total(), |total, (_, d)| {
                total.checked_add(d.line_total())
            })
            .ok_or_else(|| {
                CashError::InvalidArgument(format!(
                    "count {} of {} makes the total too large",
                    count, face_value
                ))
            })?;

        self.denominations[index] = updated;
        debug!(face_value, count, "denomination count updated");
        Ok(())
    }

    /// Reset every count to zero
    pub fn clear(&mut self) {
        for denomination in &mut self.denominations {
            denomination.reset();
        }
    }

    /// Sum of face value times count over all denominations
    ///
    /// Always fits in an `i64`; `set_count` refuses counts that would not.
    pub fn total_value(&self) -> i64 {
        self.denominations.iter().map(Denomination::line_total).sum()
    }

    /// Human-readable listing of the non-empty denominations and the total
    pub fn format_report(&self) -> String {
        let mut lines: Vec<String> = self
            .denominations
            .iter()
            .filter(|d| d.count() > 0)
            .map(ToString::to_string)
            .collect();

        lines.push(format!("Total: {}", self.total_value()));
        lines.join("\n")
    }
}

impl Default for CashRegister {
    fn default() -> Self {
        Self::new()
    }
}

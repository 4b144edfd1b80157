//! Denomination visibility filters
//!
//! Filters control which denomination rows are shown. They never affect
//! calculation and are matched to register entries by face value only.

use serde::{Deserialize, Serialize};

use super::register::CashRegister;
use crate::error::{CashError, CashResult};

/// Visibility flag for one denomination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationFilter {
    /// Face value of the denomination this filter refers to
    pub face_value: i64,
    /// Whether the denomination row is shown
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl DenominationFilter {
    /// Create a visible filter for a face value
    pub fn new(face_value: i64) -> Self {
        Self {
            face_value,
            visible: true,
        }
    }
}

/// One filter per face value held by a register, in register order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<DenominationFilter>,
}

impl FilterSet {
    /// Build an all-visible filter set for a register
    pub fn for_register(register: &CashRegister) -> Self {
        Self {
            filters: register
                .face_values()
                .into_iter()
                .map(DenominationFilter::new)
                .collect(),
        }
    }

    /// Apply saved filters, matching by face value
    ///
    /// Saved entries for face values not in this set are ignored; face values
    /// without a saved entry keep their current visibility.
    pub fn apply_saved(&mut self, saved: &[DenominationFilter]) {
        for filter in &mut self.filters {
            if let Some(s) = saved.iter().find(|s| s.face_value == filter.face_value) {
                filter.visible = s.visible;
            }
        }
    }

    /// All filters in register order
    pub fn filters(&self) -> &[DenominationFilter] {
        &self.filters
    }

    /// Visibility of a face value; unknown values are treated as visible
    pub fn is_visible(&self, face_value: i64) -> bool {
        self.filters
            .iter()
            .find(|f| f.face_value == face_value)
            .map_or(true, |f| f.visible)
    }

    /// Change the visibility of a face value
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDenomination` if no filter exists for the face value.
    pub fn set_visible(&mut self, face_value: i64, visible: bool) -> CashResult<()> {
        let filter = self
            .filters
            .iter_mut()
            .find(|f| f.face_value == face_value)
            .ok_or(CashError::UnsupportedDenomination(face_value))?;

        filter.visible = visible;
        Ok(())
    }

    /// Make every denomination visible again
    pub fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.visible = true;
        }
    }

    /// Number of hidden denominations
    pub fn hidden_count(&self) -> usize {
        self.filters.iter().filter(|f| !f.visible).count()
    }
}

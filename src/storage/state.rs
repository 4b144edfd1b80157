//! Combined session state
//!
//! The in-memory view of everything persisted between runs. It is split into
//! an [`AppSettings`] record and a [`CalculationData`] record on save and
//! reassembled from both on load, matching entries by face value.

use std::collections::BTreeMap;

use tracing::debug;

use super::calculation::{CalculationData, DenominationState};
use crate::config::{AppSettings, Preferences};
use crate::models::DenominationFilter;

/// State carried from one run to the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Expected amount; `None` means the user left it empty
    pub expected_amount: Option<i64>,
    /// Total at the time the state was captured
    pub last_total: i64,
    /// `last_total - expected_amount`, present exactly when the expected amount is
    pub last_difference: Option<i64>,
    /// Count per supported face value
    pub denomination_counts: BTreeMap<i64, i64>,
    /// Visibility per supported face value
    pub filter_visibility: BTreeMap<i64, bool>,
    pub preferences: Preferences,
}

impl SessionState {
    /// First-run state: zero counts, everything visible, expected unset
    pub fn fresh(preferences: Preferences) -> Self {
        let face_values = preferences.face_value_set.face_values();

        Self {
            expected_amount: None,
            last_total: 0,
            last_difference: None,
            denomination_counts: face_values.iter().map(|&v| (v, 0)).collect(),
            filter_visibility: face_values.iter().map(|&v| (v, true)).collect(),
            preferences,
        }
    }

    /// Reassemble state from the two persisted records
    ///
    /// Saved entries for face values outside the configured set, negative
    /// counts, and counts that would overflow the total are discarded.
    /// Supported face values with no saved entry keep their defaults.
    pub fn from_records(settings: AppSettings, data: CalculationData) -> Self {
        let mut state = Self::fresh(settings.preferences);
        let mut total: i64 = 0;

        for saved in &data.denominations {
            let line_total = saved
                .face_value
                .checked_mul(saved.count)
                .filter(|_| saved.count >= 0);

            match (state.denomination_counts.get_mut(&saved.face_value), line_total) {
                (Some(count), Some(line_total)) => match total.checked_add(line_total) {
                    Some(sum) => {
                        total = sum;
                        *count = saved.count;
                    }
                    None => debug!(
                        face_value = saved.face_value,
                        count = saved.count,
                        "discarding saved denomination, total out of range"
                    ),
                },
                _ => debug!(
                    face_value = saved.face_value,
                    count = saved.count,
                    "discarding saved denomination"
                ),
            }
        }

        for saved in &settings.filters {
            if let Some(visible) = state.filter_visibility.get_mut(&saved.face_value) {
                *visible = saved.visible;
            }
        }

        let non_negative = |v: &i64| *v >= 0;
        state.expected_amount = settings
            .expected_amount
            .filter(non_negative)
            .or(data.expected_amount.filter(non_negative));
        state.last_total = data.last_total;
        state.last_difference = state
            .expected_amount
            .and_then(|e| data.last_total.checked_sub(e));

        state
    }

    /// Split the state into the two persisted records
    pub fn to_records(&self) -> (AppSettings, CalculationData) {
        let face_values = self.preferences.face_value_set.face_values();

        let filters = face_values
            .iter()
            .map(|&face_value| DenominationFilter {
                face_value,
                visible: self.filter_visibility.get(&face_value).copied().unwrap_or(true),
            })
            .collect();

        let denominations = face_values
            .iter()
            .map(|&face_value| DenominationState {
                face_value,
                count: self.denomination_counts.get(&face_value).copied().unwrap_or(0),
            })
            .collect();

        let settings = AppSettings {
            filters,
            expected_amount: self.expected_amount,
            preferences: self.preferences.clone(),
            ..AppSettings::default()
        };

        let data = CalculationData {
            expected_amount: self.expected_amount,
            last_total: self.last_total,
            last_difference: self.last_difference,
            denominations,
        };

        (settings, data)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::fresh(Preferences::default())
    }
}

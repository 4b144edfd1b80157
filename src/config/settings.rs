//! User settings for the cash calculator
//!
//! Holds denomination visibility filters, the last entered expected amount and
//! user preferences. Persisted as `settings.json` through the storage layer.

use serde::{Deserialize, Serialize};

use crate::error::CashResult;
use crate::models::{CashRegister, DenominationFilter, DEFAULT_FACE_VALUES, REDUCED_FACE_VALUES};
use crate::services::calculation::EmptyExpectedPolicy;

/// Which list of face values the register is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FaceValueSet {
    /// 5000 down to 1, including the 2-unit coin
    #[default]
    Full,
    /// Same as `Full` without the 2-unit coin
    Reduced,
}

impl FaceValueSet {
    /// The face values in this set, descending
    pub fn face_values(&self) -> &'static [i64] {
        match self {
            Self::Full => &DEFAULT_FACE_VALUES,
            Self::Reduced => &REDUCED_FACE_VALUES,
        }
    }

    /// Build an empty register for this set
    pub fn build_register(&self) -> CashResult<CashRegister> {
        CashRegister::with_face_values(self.face_values())
    }

    /// Parse a set name as used on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "full" => Some(Self::Full),
            "reduced" => Some(Self::Reduced),
            _ => None,
        }
    }
}

/// User preferences that shape how a session is built and displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Face values the register is built from
    #[serde(default)]
    pub face_value_set: FaceValueSet,

    /// Handling of an empty or invalid expected amount
    #[serde(default)]
    pub empty_expected_policy: EmptyExpectedPolicy,

    /// Currency symbol appended to amounts in summaries
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_currency() -> String {
    "₽".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            face_value_set: FaceValueSet::default(),
            empty_expected_policy: EmptyExpectedPolicy::default(),
            currency_symbol: default_currency(),
        }
    }
}

/// User settings as stored in `settings.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Visibility of each denomination row
    #[serde(default)]
    pub filters: Vec<DenominationFilter>,

    /// Last entered expected amount (`None` when left empty)
    #[serde(default)]
    pub expected_amount: Option<i64>,

    #[serde(flatten)]
    pub preferences: Preferences,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            filters: Vec::new(),
            expected_amount: None,
            preferences: Preferences::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert!(settings.filters.is_empty());
        assert_eq!(settings.expected_amount, None);
        assert_eq!(settings.preferences.face_value_set, FaceValueSet::Full);
        assert_eq!(
            settings.preferences.empty_expected_policy,
            EmptyExpectedPolicy::Zero
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"expected_amount": 1500, "face_value_set": "reduced"}"#)
                .unwrap();
        assert_eq!(settings.expected_amount, Some(1500));
        assert_eq!(settings.preferences.face_value_set, FaceValueSet::Reduced);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.preferences.currency_symbol, "₽");
    }

    #[test]
    fn test_face_value_set() {
        assert_eq!(FaceValueSet::parse("Reduced"), Some(FaceValueSet::Reduced));
        assert_eq!(FaceValueSet::parse("other"), None);

        let register = FaceValueSet::Reduced.build_register().unwrap();
        assert_eq!(register.face_values(), REDUCED_FACE_VALUES.to_vec());
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = AppSettings {
            filters: vec![DenominationFilter {
                face_value: 10,
                visible: false,
            }],
            expected_amount: Some(0),
            preferences: Preferences {
                empty_expected_policy: EmptyExpectedPolicy::NoComparison,
                ..Preferences::default()
            },
            ..AppSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}

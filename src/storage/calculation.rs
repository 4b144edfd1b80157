//! Calculation data record, stored as `calculation.json`

use serde::{Deserialize, Serialize};

/// Saved count for one face value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationState {
    pub face_value: i64,
    #[serde(default)]
    pub count: i64,
}

/// Last calculation: expected amount, totals and denomination counts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculationData {
    #[serde(default)]
    pub expected_amount: Option<i64>,

    #[serde(default)]
    pub last_total: i64,

    /// `last_total - expected_amount`; absent when no expected amount was set
    #[serde(default)]
    pub last_difference: Option<i64>,

    #[serde(default)]
    pub denominations: Vec<DenominationState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let data: CalculationData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, CalculationData::default());
    }

    #[test]
    fn test_field_names() {
        let data = CalculationData {
            expected_amount: Some(350),
            last_total: 400,
            last_difference: Some(50),
            denominations: vec![DenominationState {
                face_value: 100,
                count: 3,
            }],
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["last_difference"], 50);
        assert_eq!(value["denominations"][0]["face_value"], 100);
        assert_eq!(value["denominations"][0]["count"], 3);
    }
}

//! Reconciliation engine
//!
//! Pure, stateless computations over denomination counts and a user-entered
//! expected amount: total, signed difference, status and a combined summary.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CashError, CashResult};
use crate::models::{Denomination, SummaryResult, SummaryStatus};

/// How `summarize` treats an empty, non-numeric or negative expected amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyExpectedPolicy {
    /// Compare against zero and classify normally
    #[default]
    Zero,
    /// Skip the comparison: no expected amount, no difference, status `None`
    NoComparison,
}

impl EmptyExpectedPolicy {
    /// Parse a policy name as used on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "zero" => Some(Self::Zero),
            "no_comparison" | "none" => Some(Self::NoComparison),
            _ => None,
        }
    }
}

/// Parse user-entered amount text as a non-negative integer
///
/// Returns `None` for empty, non-numeric or negative input.
pub fn parse_amount(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok().filter(|v| *v >= 0)
}

/// Parse user-entered amount text, substituting zero for invalid input
pub fn parse_amount_lenient(text: &str) -> i64 {
    parse_amount(text).unwrap_or(0)
}

/// Service for cash register calculations
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculationService {
    policy: EmptyExpectedPolicy,
}

impl CalculationService {
    /// Create a calculation service with the given empty-expected policy
    pub fn new(policy: EmptyExpectedPolicy) -> Self {
        Self { policy }
    }

    /// Sum of face value times count, saturating at `i64::MAX`
    ///
    /// A [`CashRegister`](crate::models::CashRegister) never holds counts whose
    /// total overflows; the clamp only matters for hand-built slices.
    pub fn calculate_total(&self, denominations: &[Denomination]) -> i64 {
        denominations
            .iter()
            .fold(0i64, |total, d| total.saturating_add(d.line_total()))
    }

    /// `total - expected`; positive is a surplus, negative a shortfall
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `expected` is negative or the difference
    /// does not fit in an `i64`.
    pub fn calculate_difference(&self, total: i64, expected: i64) -> CashResult<i64> {
        if expected < 0 {
            return Err(CashError::InvalidArgument(format!(
                "expected sum cannot be negative, got {}",
                expected
            )));
        }
        total.checked_sub(expected).ok_or_else(|| {
            CashError::InvalidArgument(format!(
                "difference between {} and {} is out of range",
                total, expected
            ))
        })
    }

    /// Exact three-way classification on the sign of the difference
    pub fn classify(&self, difference: i64) -> SummaryStatus {
        match difference {
            0 => SummaryStatus::Ok,
            d if d < 0 => SummaryStatus::Under,
            _ => SummaryStatus::Over,
        }
    }

    /// Full summary: total, expected, difference and status
    ///
    /// Invalid expected text never fails; it is handled by the configured
    /// [`EmptyExpectedPolicy`].
    pub fn summarize(&self, denominations: &[Denomination], expected_text: &str) -> SummaryResult {
        let total = self.calculate_total(denominations);

        let expected = match (parse_amount(expected_text), self.policy) {
            (Some(value), _) => Some(value),
            (None, EmptyExpectedPolicy::Zero) => Some(0),
            (None, EmptyExpectedPolicy::NoComparison) => None,
        };

        let result = match expected {
            Some(expected) => {
                let difference = total - expected;
                SummaryResult {
                    total,
                    expected: Some(expected),
                    difference: Some(difference),
                    status: self.classify(difference),
                }
            }
            None => SummaryResult {
                total,
                expected: None,
                difference: None,
                status: SummaryStatus::None,
            },
        };

        debug!(?result, expected_text, "summary recalculated");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CashRegister;

    fn scenario_register() -> CashRegister {
        let mut register = CashRegister::new();
        register.set_count(100, 3).unwrap();
        register.set_count(50, 2).unwrap();
        register
    }

    #[test]
    fn test_calculate_total_matches_register() {
        let register = scenario_register();
        let service = CalculationService::default();
        assert_eq!(service.calculate_total(register.denominations()), 400);
        assert_eq!(
            service.calculate_total(register.denominations()),
            register.total_value()
        );
    }

    #[test]
    fn test_calculate_difference() {
        let service = CalculationService::default();
        for (total, expected) in [(0, 0), (400, 350), (400, 400), (10, 9000)] {
            assert_eq!(
                service.calculate_difference(total, expected).unwrap(),
                total - expected
            );
        }
    }

    #[test]
    fn test_calculate_difference_rejects_negative_expected() {
        let service = CalculationService::default();
        let err = service.calculate_difference(100, -1).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_calculate_difference_out_of_range() {
        let service = CalculationService::default();
        let err = service.calculate_difference(i64::MIN, 1).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_calculate_total_saturates() {
        let service = CalculationService::default();
        let denominations = [
            Denomination::new(1, i64::MAX).unwrap(),
            Denomination::new(5000, 3).unwrap(),
        ];
        assert_eq!(service.calculate_total(&denominations), i64::MAX);
    }

    #[test]
    fn test_classify() {
        let service = CalculationService::default();
        assert_eq!(service.classify(0), SummaryStatus::Ok);
        assert_eq!(service.classify(-1), SummaryStatus::Under);
        assert_eq!(service.classify(1), SummaryStatus::Over);
        assert_eq!(service.classify(i64::MIN), SummaryStatus::Under);
    }

    #[test]
    fn test_summarize_over() {
        let register = scenario_register();
        let result = CalculationService::default().summarize(register.denominations(), "350");
        assert_eq!(result.total, 400);
        assert_eq!(result.expected, Some(350));
        assert_eq!(result.difference, Some(50));
        assert_eq!(result.status, SummaryStatus::Over);
    }

    #[test]
    fn test_summarize_balanced() {
        let register = scenario_register();
        let result = CalculationService::default().summarize(register.denominations(), "400");
        assert_eq!(result.difference, Some(0));
        assert_eq!(result.status, SummaryStatus::Ok);
    }

    #[test]
    fn test_summarize_under() {
        let register = scenario_register();
        let result = CalculationService::default().summarize(register.denominations(), " 450 ");
        assert_eq!(result.difference, Some(-50));
        assert_eq!(result.status, SummaryStatus::Under);
    }

    #[test]
    fn test_summarize_empty_falls_back_to_zero() {
        let register = scenario_register();
        let service = CalculationService::new(EmptyExpectedPolicy::Zero);

        for text in ["", "abc", "-20"] {
            let result = service.summarize(register.denominations(), text);
            assert_eq!(result.expected, Some(0));
            assert_eq!(result.difference, Some(400));
            assert_eq!(result.status, SummaryStatus::Over);
        }
    }

    #[test]
    fn test_summarize_no_comparison_policy() {
        let register = scenario_register();
        let service = CalculationService::new(EmptyExpectedPolicy::NoComparison);

        let result = service.summarize(register.denominations(), "");
        assert_eq!(result.total, 400);
        assert_eq!(result.expected, None);
        assert_eq!(result.difference, None);
        assert_eq!(result.status, SummaryStatus::None);

        // valid input is unaffected by the policy
        let result = service.summarize(register.denominations(), "0");
        assert_eq!(result.difference, Some(400));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("42"), Some(42));
        assert_eq!(parse_amount(" 7 "), Some(7));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("1.5"), None);
        assert_eq!(parse_amount_lenient("x"), 0);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(EmptyExpectedPolicy::parse("zero"), Some(EmptyExpectedPolicy::Zero));
        assert_eq!(
            EmptyExpectedPolicy::parse("no-comparison"),
            Some(EmptyExpectedPolicy::NoComparison)
        );
        assert_eq!(EmptyExpectedPolicy::parse("maybe"), None);
    }
}

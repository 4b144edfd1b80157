//! Summary display formatting
//!
//! Renders the total / expected / difference block shown after every action.

use crate::models::SummaryResult;

/// Placeholder for a value that was not computed
pub const NO_VALUE: &str = "—";

/// Format an amount with the currency symbol
pub fn format_amount(amount: i64, symbol: &str) -> String {
    if symbol.is_empty() {
        amount.to_string()
    } else {
        format!("{} {}", amount, symbol)
    }
}

/// Format a summary as an aligned block
pub fn format_summary(summary: &SummaryResult, symbol: &str) -> String {
    let expected = summary
        .expected
        .map(|v| format_amount(v, symbol))
        .unwrap_or_default();

    let difference = match summary.difference {
        Some(diff) => {
            let glyph = summary.status.glyph();
            format!("{}  {} {}", format_amount(diff, symbol), glyph, summary.status)
        }
        None => NO_VALUE.to_string(),
    };

    let mut output = String::new();
    output.push_str(&format!("Total:       {}\n", format_amount(summary.total, symbol)));
    output.push_str(&format!("Expected:    {}\n", expected));
    output.push_str(&format!("Difference:  {}\n", difference));
    output
}

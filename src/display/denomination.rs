//! Denomination table formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Denomination, DenominationFilter};

#[derive(Tabled)]
struct DenominationRow {
    #[tabled(rename = "Value")]
    value: i64,
    #[tabled(rename = "Count")]
    count: i64,
    #[tabled(rename = "Total")]
    total: i64,
}

#[derive(Tabled)]
struct FilterRow {
    #[tabled(rename = "Value")]
    value: i64,
    #[tabled(rename = "Visible")]
    visible: &'static str,
}

/// Format denominations as a table with one row per face value
pub fn format_denomination_table(denominations: &[Denomination]) -> String {
    if denominations.is_empty() {
        return "No denominations shown. Run 'cashcalc filter reset' to show all.".to_string();
    }

    let rows = denominations.iter().map(|d| DenominationRow {
        value: d.face_value(),
        count: d.count(),
        total: d.line_total(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format visibility filters as a table
pub fn format_filter_table(filters: &[DenominationFilter]) -> String {
    let rows = filters.iter().map(|f| FilterRow {
        value: f.face_value,
        visible: if f.visible { "yes" } else { "no" },
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CashRegister;

    #[test]
    fn test_denomination_table() {
        let mut register = CashRegister::new();
        register.set_count(100, 3).unwrap();

        let output = format_denomination_table(register.denominations());
        assert!(output.contains("Value"));
        assert!(output.contains("Total"));
        assert!(output.contains("300"));
        assert!(output.contains("5000"));
    }

    #[test]
    fn test_empty_table() {
        let output = format_denomination_table(&[]);
        assert!(output.contains("filter reset"));
    }

    #[test]
    fn test_filter_table() {
        let filters = vec![
            DenominationFilter {
                face_value: 50,
                visible: false,
            },
            DenominationFilter::new(10),
        ];
        let output = format_filter_table(&filters);
        assert!(output.contains("Visible"));
        assert!(output.contains("no"));
        assert!(output.contains("yes"));
    }
}

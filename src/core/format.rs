//! Display formatting for list cells and summary cards

use crate::core::field::parse_date_like;

/// Format an amount with a currency symbol, thousands separators and two decimals
///
/// Example: `format_currency(1234.5, "$")` -> `"$1,234.50"`
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}{}", symbol, amount);
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}{}.{:02}", sign, symbol, grouped, fraction)
}

/// Format an ISO date or datetime as `Mar 15, 2024`
///
/// Input that does not parse as a date is returned unchanged.
pub fn format_date(iso: &str) -> String {
    match parse_date_like(iso) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => iso.to_string(),
    }
}

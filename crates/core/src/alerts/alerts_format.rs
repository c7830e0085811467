//! English display strings for alert DTOs.

use rust_decimal::{Decimal, RoundingStrategy};

/// Relative description of a due date, e.g. "Due in 5 days".
pub fn time_description(days_until_due: i64) -> String {
    match days_until_due {
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        -1 => "Overdue by 1 day".to_string(),
        days if days < 0 => format!("Overdue by {} days", -days),
        days => format!("Due in {} days", days),
    }
}

/// Formats `amount` with a currency symbol and thousands separators.
///
/// Currencies without a known symbol are prefixed with their code.
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let code = currency.trim().to_uppercase();
    let (prefix, fraction_digits) = match code.as_str() {
        "USD" => ("$".to_string(), 2),
        "EUR" => ("€".to_string(), 2),
        "GBP" => ("£".to_string(), 2),
        "INR" => ("₹".to_string(), 2),
        "JPY" => ("¥".to_string(), 0),
        _ => (format!("{} ", code), 2),
    };

    let rounded = amount
        .abs()
        .round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.*}", fraction_digits as usize, rounded);
    let (integer_part, fraction_part) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (index, ch) in integer_part.chars().enumerate() {
        if index > 0 && (integer_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < Decimal::ZERO && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match fraction_part {
        Some(fraction) => format!("{}{}{}.{}", sign, prefix, grouped, fraction),
        None => format!("{}{}{}", sign, prefix, grouped),
    }
}

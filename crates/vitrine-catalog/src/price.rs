//! Currency-aware price display.
//!
//! The quirks here are contractual, inherited from the storefront API's
//! consumers: an absent price always renders with two decimals even for
//! zero-decimal currencies, and a price without a currency descriptor is
//! formatted as plain dollars without grouping.

use crate::records::Currency;

/// ISO codes conventionally displayed without decimal places.
const ZERO_DECIMAL_CODES: [&str; 6] = ["JPY", "KRW", "LBP", "VND", "CLP", "ISK"];

fn decimals_for(currency: &Currency) -> usize {
    let zero_decimal = ZERO_DECIMAL_CODES
        .iter()
        .any(|code| code.eq_ignore_ascii_case(&currency.code));
    if zero_decimal {
        0
    } else {
        2
    }
}

/// Insert grouping separators every three digits left of the decimal point.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format a base price for display in the given currency.
pub fn format_price(price: Option<f64>, currency: Option<&Currency>) -> String {
    let Some(price) = price else {
        return match currency {
            Some(currency) => format!("{}0.00", currency.symbol),
            None => "$0.00".to_string(),
        };
    };

    match currency {
        None => format!("${price:.2}"),
        Some(currency) => {
            let converted = price * currency.exchange_rate;
            let decimals = decimals_for(currency);
            let plain = format!("{converted:.decimals$}");
            format!("{}{}", currency.symbol, group_thousands(&plain))
        }
    }
}

/// Format a price span, collapsing degenerate ranges to a single price.
pub fn format_price_range(
    min: Option<f64>,
    max: Option<f64>,
    currency: Option<&Currency>,
) -> String {
    let max_absent = max.map(|value| value == 0.0).unwrap_or(true);
    if min.is_none() || max_absent || min == max {
        return format_price(min.or(max), currency);
    }
    format!(
        "{} - {}",
        format_price(min, currency),
        format_price(max, currency)
    )
}

/// Percentage saved, rounded to the nearest integer.
///
/// Zero for missing or non-positive inputs and for "discounts" that do not
/// lower the price.
pub fn discount_percentage(original: f64, discounted: f64) -> u32 {
    if !(original > 0.0) || !(discounted > 0.0) || original <= discounted {
        return 0;
    }
    (100.0 * (original - discounted) / original).round() as u32
}

/// Best-effort numeric parse of a formatted price string.
pub fn parse_price(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

#[cfg(test)]
#[path = "tests/price_tests.rs"]
mod tests;

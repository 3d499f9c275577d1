use super::*;

fn euro() -> Currency {
    Currency::new("€", 1.0, "EUR")
}

fn lebanese_pound() -> Currency {
    Currency::new("L.L.", 1.0, "LBP")
}

#[test]
fn missing_price_renders_zero() {
    assert_eq!(format_price(None, None), "$0.00");
    assert_eq!(format_price(None, Some(&euro())), "€0.00");
    // Two decimals even for zero-decimal currencies: inherited contract.
    assert_eq!(format_price(None, Some(&lebanese_pound())), "L.L.0.00");
}

#[test]
fn no_currency_formats_plain_dollars() {
    assert_eq!(format_price(Some(19.5), None), "$19.50");
    assert_eq!(format_price(Some(1234.567), None), "$1234.57");
}

#[test]
fn zero_price_with_currency() {
    assert_eq!(format_price(Some(0.0), Some(&euro())), "€0.00");
}

#[test]
fn conversion_applies_the_exchange_rate() {
    let pounds = Currency::new("£", 0.5, "GBP");
    assert_eq!(format_price(Some(100.0), Some(&pounds)), "£50.00");
}

#[test]
fn zero_decimal_codes_group_without_decimals() {
    assert_eq!(
        format_price(Some(1_500_000.0), Some(&lebanese_pound())),
        "L.L.1,500,000"
    );
    let yen = Currency::new("¥", 1.0, "jpy");
    assert_eq!(format_price(Some(1234.0), Some(&yen)), "¥1,234");
}

#[test]
fn thousands_grouping_keeps_the_fraction() {
    assert_eq!(
        format_price(Some(1_234_567.891), Some(&euro())),
        "€1,234,567.89"
    );
    assert_eq!(format_price(Some(999.99), Some(&euro())), "€999.99");
}

#[test]
fn price_range_collapses_degenerate_spans() {
    let euro = euro();
    assert_eq!(
        format_price_range(Some(10.0), Some(10.0), Some(&euro)),
        "€10.00"
    );
    assert_eq!(format_price_range(Some(10.0), None, Some(&euro)), "€10.00");
    assert_eq!(
        format_price_range(Some(10.0), Some(0.0), Some(&euro)),
        "€10.00"
    );
    assert_eq!(format_price_range(None, Some(25.0), Some(&euro)), "€25.00");
    assert_eq!(format_price_range(None, None, Some(&euro)), "€0.00");
}

#[test]
fn price_range_formats_both_ends() {
    assert_eq!(
        format_price_range(Some(10.0), Some(25.0), Some(&euro())),
        "€10.00 - €25.00"
    );
}

#[test]
fn discount_percentage_rounds() {
    assert_eq!(discount_percentage(100.0, 75.0), 25);
    assert_eq!(discount_percentage(3.0, 2.0), 33);
    assert_eq!(discount_percentage(3.0, 1.0), 67);
}

#[test]
fn discount_percentage_degenerate_inputs_are_zero() {
    assert_eq!(discount_percentage(100.0, 120.0), 0);
    assert_eq!(discount_percentage(100.0, 100.0), 0);
    assert_eq!(discount_percentage(0.0, 50.0), 0);
    assert_eq!(discount_percentage(100.0, 0.0), 0);
    assert_eq!(discount_percentage(f64::NAN, 10.0), 0);
}

#[test]
fn parse_price_strips_formatting() {
    assert_eq!(parse_price("$1,234.56"), 1234.56);
    assert_eq!(parse_price("€999.99"), 999.99);
    assert_eq!(parse_price("-12"), -12.0);
    assert_eq!(parse_price("invalid"), 0.0);
    assert_eq!(parse_price(""), 0.0);
}

use super::{format_aed, format_limit, parse_amount};

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

#[test]
fn test_parse_amount_accepts_numeric_strings() -> Result<()> {
    let test_cases = vec![
        ("12.5", "12.5"),
        ("100", "100"),
        ("-3.25", "-3.25"),
        ("  42  ", "42"),
        ("0", "0"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(parse_amount(input)?, Decimal::from_str(expected)?);
    }

    Ok(())
}

#[test]
fn test_parse_amount_rejects_empty_and_malformed_strings() {
    assert!(parse_amount("").is_err());
    assert!(parse_amount("   ").is_err());
    assert!(parse_amount("abc").is_err());
    assert!(parse_amount("1.2.3").is_err());
    assert!(parse_amount("12,5").is_err());
}

#[test]
fn test_format_aed_groups_thousands_and_keeps_two_decimals() -> Result<()> {
    assert_eq!(format_aed(Decimal::from_str("0")?), "0.00");
    assert_eq!(format_aed(Decimal::from_str("12.5")?), "12.50");
    assert_eq!(format_aed(Decimal::from_str("-7600")?), "-7,600.00");
    assert_eq!(format_aed(Decimal::from_str("1234567.891")?), "1,234,567.89");

    Ok(())
}

#[test]
fn test_format_limit_matches_alert_wording() {
    assert_eq!(format_limit(Decimal::from(7_500_i64)), "7,500");
    assert_eq!(format_limit(Decimal::from(114_900_i64)), "114,900");
}

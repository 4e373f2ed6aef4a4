use std::str::FromStr;

use rust_decimal::Decimal;

use crate::types::errors::AmountError;

/// Parses a user-entered amount field into a decimal.
///
/// Drafts carry amounts as raw text until submission; this is the single
/// place where text becomes money. Whitespace-only input counts as empty
/// rather than as a malformed number.
pub fn parse_amount(value: &str) -> Result<Decimal, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::Empty);
    }

    Decimal::from_str(value).map_err(|_| AmountError::NotNumeric {
        value: value.to_string()
    })
}

/// Formats an amount for display: sign, grouped thousands, two decimals.
/// e.g. `-7600` → `"-7,600.00"`
pub fn format_aed(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let grouped = group_thousands(integer);

    if rounded < Decimal::ZERO {
        format!("-{grouped}.{fraction}")
    } else {
        format!("{grouped}.{fraction}")
    }
}

/// Formats a whole-number credit limit with grouped thousands, no decimals.
/// e.g. `7500` → `"7,500"` as it appears in alert strings.
pub fn format_limit(value: Decimal) -> String {
    group_thousands(&value.trunc().to_string())
}

fn group_thousands(digits: &str) -> String {
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

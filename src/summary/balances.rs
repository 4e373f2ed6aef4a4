use rust_decimal::Decimal;

use crate::models::{Category, Expense, PaymentMethod};
use crate::types::format_limit;

/// Running balance of one tracked credit card. Negative means net owed.
#[derive(Debug, Clone, PartialEq)]
pub struct CardBalance {
    pub card: PaymentMethod,
    pub balance: Decimal
}

/// Derives the running balance of every tracked card from the full record
/// set. Charges made with the card count against it; repayment records
/// naming the card in `item` pay it down. Record order is irrelevant.
///
/// The repayment match is exact text against the card's display name, so a
/// typo in the item silently leaves the balance unchanged.
pub fn card_balances(expenses: &[Expense]) -> Vec<CardBalance> {
    PaymentMethod::CREDIT_CARDS
        .into_iter()
        .map(|card| {
            let charges: Decimal = expenses
                .iter()
                .filter(|expense| expense.payment_method == Some(card))
                .map(|expense| expense.amount)
                .sum();

            let repayments: Decimal = expenses
                .iter()
                .filter(|expense| {
                    expense.category == Category::CreditCardRepayment
                        && expense.item == card.as_str()
                })
                .map(|expense| expense.amount)
                .sum();

            CardBalance {
                card,
                balance: repayments - charges
            }
        })
        .collect()
}

/// One alert per card whose owed amount strictly exceeds its configured
/// limit. Every card is evaluated; qualifying cards alert independently.
pub fn limit_alerts(balances: &[CardBalance]) -> Vec<String> {
    balances
        .iter()
        .filter_map(|entry| {
            let limit = entry.card.credit_limit()?;

            if -entry.balance > limit {
                Some(format!(
                    "{} has exceeded the limit of {} AED.",
                    entry.card,
                    format_limit(limit)
                ))
            } else {
                None
            }
        })
        .collect()
}

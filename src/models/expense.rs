use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{Category, PaymentMethod};
use crate::types::ExpenseId;

/// A single ledger record as held by the document store.
///
/// Records are append-only: created once with a store-assigned id and
/// write-time date, never mutated, never deleted. A repayment names the
/// card being repaid in `item`; the balance computation matches that text
/// against the card's display name, so the link is a convention rather
/// than an enforced reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub item: String,
    /// Signed amount in AED, stored exactly as entered.
    pub amount: Decimal,
    pub category: Category,
    /// Absent only for Credit Card Repayment records.
    pub payment_method: Option<PaymentMethod>,
    /// Assigned by the store at write time; snapshots order on it.
    pub date: DateTime<Utc>
}

/// A record that passed the submission gate and is ready for appending.
/// The store assigns the id and the date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub item: String,
    pub amount: Decimal,
    pub category: Category,
    pub payment_method: Option<PaymentMethod>
}

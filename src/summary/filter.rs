use rust_decimal::Decimal;

use crate::models::{Category, Expense, PaymentMethod};

/// Active list filters; `None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExpenseFilter {
    pub category: Option<Category>,
    pub payment_method: Option<PaymentMethod>
}

impl ExpenseFilter {
    /// Every set filter must equal the record's field exactly. A payment
    /// filter never matches a record without a payment method.
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category.is_none_or(|category| expense.category == category)
            && self
                .payment_method
                .is_none_or(|payment| expense.payment_method == Some(payment))
    }

    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|expense| self.matches(expense))
            .cloned()
            .collect()
    }
}

/// Display total of a filtered list, rounded to two decimal places.
pub fn filtered_total(expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .map(|expense| expense.amount)
        .sum::<Decimal>()
        .round_dp(2)
}

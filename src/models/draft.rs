use std::str::FromStr;

use crate::models::errors::DraftError;
use crate::models::{Category, NewExpense, PaymentMethod};
use crate::types::parse_amount;

/// The four free-text fields of the entry form. Empty means unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub item: String,
    pub amount: String,
    pub category: String,
    pub payment_method: String
}

impl ExpenseDraft {
    /// Runs the submission gate over the raw fields.
    ///
    /// # Errors
    /// Returns `DraftError` if:
    /// - `item` is empty.
    /// - `amount` is empty, whitespace-only, or not numeric.
    /// - `category` is empty or not in the vocabulary.
    /// - `payment_method` is empty while the category is not
    ///   Credit Card Repayment, or non-empty but not in the vocabulary.
    pub fn validate(&self) -> Result<NewExpense, DraftError> {
        if self.item.is_empty() {
            return Err(DraftError::MissingItem);
        }

        let amount = parse_amount(&self.amount)?;

        if self.category.is_empty() {
            return Err(DraftError::MissingCategory);
        }

        let category = Category::from_str(&self.category)?;

        // A previously selected payment method is kept even on repayments;
        // the gate only stops requiring one.
        let payment_method = if self.payment_method.is_empty() {
            if category != Category::CreditCardRepayment {
                return Err(DraftError::MissingPaymentMethod);
            }

            None
        } else {
            Some(PaymentMethod::from_str(&self.payment_method)?)
        };

        Ok(NewExpense {
            item: self.item.clone(),
            amount,
            category,
            payment_method
        })
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_empty()
            && self.amount.is_empty()
            && self.category.is_empty()
            && self.payment_method.is_empty()
    }
}

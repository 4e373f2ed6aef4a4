use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::errors::VocabularyError;

/// Fixed payment-method vocabulary, exactly as it appears in the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    EnbdDirectDebit,
    EnbdCreditCard,
    AdcbCreditCard,
    AdcbDebitCard,
    FabCreditCard
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::EnbdDirectDebit,
        PaymentMethod::EnbdCreditCard,
        PaymentMethod::AdcbCreditCard,
        PaymentMethod::AdcbDebitCard,
        PaymentMethod::FabCreditCard
    ];

    /// The cards whose running balances are tracked against a limit.
    pub const CREDIT_CARDS: [PaymentMethod; 3] = [
        PaymentMethod::EnbdCreditCard,
        PaymentMethod::AdcbCreditCard,
        PaymentMethod::FabCreditCard
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::EnbdDirectDebit => "ENBD Direct Debit",
            PaymentMethod::EnbdCreditCard => "ENBD Credit Card",
            PaymentMethod::AdcbCreditCard => "ADCB Credit Card",
            PaymentMethod::AdcbDebitCard => "ADCB Debit Card",
            PaymentMethod::FabCreditCard => "FAB Credit Card"
        }
    }

    /// Configured credit limit in AED. Only the tracked cards have one.
    pub fn credit_limit(self) -> Option<Decimal> {
        match self {
            PaymentMethod::EnbdCreditCard => Some(Decimal::from(114_900_i64)),
            PaymentMethod::AdcbCreditCard => Some(Decimal::from(38_333_i64)),
            PaymentMethod::FabCreditCard => Some(Decimal::from(7_500_i64)),
            PaymentMethod::EnbdDirectDebit | PaymentMethod::AdcbDebitCard => None
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| VocabularyError::PaymentMethod(value.to_string()))
    }
}

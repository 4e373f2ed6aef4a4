use thiserror::Error;

use crate::types::AmountError;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Draft is missing an item")]
    MissingItem,
    #[error("Draft is missing a category")]
    MissingCategory,
    #[error("Draft is missing a payment method")]
    MissingPaymentMethod,
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError)
}

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Unknown category {0:?}")]
    Category(String),
    #[error("Unknown payment method {0:?}")]
    PaymentMethod(String)
}

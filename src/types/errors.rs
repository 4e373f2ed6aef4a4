use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: value is empty")]
    Empty,
    #[error("Amount error: {value:?} is not numeric")]
    NotNumeric {
        value: String
    }
}

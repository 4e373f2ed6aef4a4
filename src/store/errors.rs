use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store write failed: {0}")]
    WriteFailed(String),
    #[error("Store is unavailable: {0}")]
    Unavailable(String)
}

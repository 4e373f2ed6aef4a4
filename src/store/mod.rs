mod errors;
mod memory_store;
#[cfg(test)]
mod tests;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::models::{Expense, NewExpense};
use crate::types::ExpenseId;

pub use errors::StoreError;
pub use memory_store::MemoryStore;

/// The document-store seam: append-only writes plus a live subscription
/// that redelivers the full record set, newest first, after every change.
#[async_trait]
pub trait ExpenseStore: Send + Sync + 'static {
    /// Appends a record. The store assigns the id and the write-time date.
    async fn append(&self, expense: NewExpense) -> Result<ExpenseId, StoreError>;

    /// Subscribes to snapshot deliveries. The receiver always holds the
    /// latest full snapshot, ordered by date descending.
    fn subscribe(&self) -> watch::Receiver<Vec<Expense>>;
}

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::watch;
use tracing::debug;

use crate::models::{Expense, NewExpense};
use crate::store::{ExpenseStore, StoreError};
use crate::types::ExpenseId;

/// In-process reference implementation of the document store.
///
/// Documents live in a concurrent map; every append republishes the full
/// snapshot over a watch channel, mirroring how a hosted document store
/// delivers ordered live-query results.
pub struct MemoryStore {
    documents: DashMap<ExpenseId, Expense>,
    sequence: AtomicU64,
    snapshots: watch::Sender<Vec<Expense>>
}

impl MemoryStore {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Vec::new());

        Self {
            documents: DashMap::new(),
            sequence: AtomicU64::new(1),
            snapshots
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn publish(&self) {
        let mut snapshot: Vec<Expense> = self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        // Date descending; the id breaks ties so the latest write stays first.
        snapshot.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));

        self.snapshots.send_replace(snapshot);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpenseStore for MemoryStore {
    async fn append(&self, expense: NewExpense) -> Result<ExpenseId, StoreError> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let id = format!("exp-{sequence:06}");

        let record = Expense {
            id: id.clone(),
            item: expense.item,
            amount: expense.amount,
            category: expense.category,
            payment_method: expense.payment_method,
            date: Utc::now()
        };

        self.documents.insert(id.clone(), record);
        self.publish();

        debug!("Expense [{id}] appended");

        Ok(id)
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Expense>> {
        self.snapshots.subscribe()
    }
}

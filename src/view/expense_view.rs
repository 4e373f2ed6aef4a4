use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Category, Expense, ExpenseDraft, NewExpense, PaymentMethod};
use crate::summary::{card_balances, filtered_total, limit_alerts, CardBalance, ExpenseFilter};

/// A single edit to one draft field, raw text exactly as a form would
/// deliver it. The empty string clears the field.
#[derive(Debug, Clone)]
pub enum DraftInput {
    Item(String),
    Amount(String),
    Category(String),
    Payment(String)
}

/// A change to one of the list filters. `None` means match-all.
#[derive(Debug, Clone, Copy)]
pub enum FilterInput {
    Category(Option<Category>),
    Payment(Option<PaymentMethod>)
}

/// The view-model state: the latest store snapshot plus everything derived
/// from it.
///
/// Derived values are recomputed from scratch whenever the snapshot or a
/// filter changes, so the struct is always internally consistent and
/// recomputation over the same snapshot is idempotent.
#[derive(Debug, Clone)]
pub struct ExpenseView {
    expenses: Vec<Expense>,
    draft: ExpenseDraft,
    filter: ExpenseFilter,
    filtered: Vec<Expense>,
    total: Decimal,
    balances: Vec<CardBalance>,
    alerts: Vec<String>
}

impl ExpenseView {
    pub fn new() -> Self {
        let mut view = Self {
            expenses: Vec::new(),
            draft: ExpenseDraft::default(),
            filter: ExpenseFilter::default(),
            filtered: Vec::new(),
            total: Decimal::ZERO,
            balances: Vec::new(),
            alerts: Vec::new()
        };

        view.recompute();

        view
    }

    /// Replaces the list with a freshly delivered snapshot.
    pub fn apply_snapshot(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
        self.recompute();
    }

    pub fn edit(&mut self, input: DraftInput) {
        match input {
            DraftInput::Item(value) => self.draft.item = value,
            DraftInput::Amount(value) => self.draft.amount = value,
            DraftInput::Category(value) => self.draft.category = value,
            DraftInput::Payment(value) => self.draft.payment_method = value
        }
    }

    pub fn set_filter(&mut self, input: FilterInput) {
        match input {
            FilterInput::Category(category) => self.filter.category = category,
            FilterInput::Payment(payment) => self.filter.payment_method = payment
        }

        self.recompute();
    }

    /// Runs the submission gate. A passing draft is cleared immediately and
    /// returned for appending; the eventual write outcome does not restore
    /// it. A rejected draft is kept for the user to correct.
    pub fn take_submission(&mut self) -> Option<NewExpense> {
        match self.draft.validate() {
            Ok(expense) => {
                self.draft = ExpenseDraft::default();
                Some(expense)
            }
            Err(error) => {
                debug!("Draft rejected: {error}");
                None
            }
        }
    }

    fn recompute(&mut self) {
        self.filtered = self.filter.apply(&self.expenses);
        self.total = filtered_total(&self.filtered);
        self.balances = card_balances(&self.expenses);
        self.alerts = limit_alerts(&self.balances);
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn filtered(&self) -> &[Expense] {
        &self.filtered
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn balances(&self) -> &[CardBalance] {
        &self.balances
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    pub fn filter(&self) -> ExpenseFilter {
        self.filter
    }
}

impl Default for ExpenseView {
    fn default() -> Self {
        Self::new()
    }
}

mod balances;
mod filter;

pub use balances::{card_balances, limit_alerts, CardBalance};
pub use filter::{filtered_total, ExpenseFilter};

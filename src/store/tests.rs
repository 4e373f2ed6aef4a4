use super::{ExpenseStore, MemoryStore};

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::{Category, NewExpense, PaymentMethod};

fn new_expense(item: &str, amount: i64, category: Category, payment: Option<PaymentMethod>) -> NewExpense {
    NewExpense {
        item: item.to_string(),
        amount: Decimal::from(amount),
        category,
        payment_method: payment
    }
}

#[tokio::test]
async fn test_append_assigns_distinct_ids_and_write_time_dates() -> Result<()> {
    let store = MemoryStore::new();

    assert!(store.is_empty());

    let first = store
        .append(new_expense("Coffee", 12, Category::Food, Some(PaymentMethod::AdcbDebitCard)))
        .await?;
    let second = store
        .append(new_expense("Petrol", 90, Category::Fuel, Some(PaymentMethod::EnbdDirectDebit)))
        .await?;

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_snapshots_arrive_newest_first() -> Result<()> {
    let store = MemoryStore::new();
    let subscription = store.subscribe();

    store
        .append(new_expense("Coffee", 12, Category::Food, Some(PaymentMethod::AdcbDebitCard)))
        .await?;
    store
        .append(new_expense("Taxi", 38, Category::TaxiTransport, Some(PaymentMethod::AdcbDebitCard)))
        .await?;

    let snapshot = subscription.borrow().clone();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].item, "Taxi");
    assert!(snapshot[0].date >= snapshot[1].date);

    Ok(())
}

#[tokio::test]
async fn test_subscription_flags_appends_made_after_subscribing() -> Result<()> {
    let store = MemoryStore::new();
    let mut subscription = store.subscribe();

    assert!(subscription.borrow_and_update().is_empty());

    store
        .append(new_expense("Groceries", 214, Category::Grocery, Some(PaymentMethod::EnbdCreditCard)))
        .await?;

    assert!(subscription.has_changed()?);
    assert_eq!(subscription.borrow_and_update().len(), 1);

    Ok(())
}

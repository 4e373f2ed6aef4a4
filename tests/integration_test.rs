use std::path::Path;
use std::process::Command;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use expense_tracker::models::{Category, PaymentMethod};
use expense_tracker::store::MemoryStore;
use expense_tracker::view::{DraftInput, FilterInput, ViewActor};

async fn add_expense(view: &ViewActor, item: &str, amount: &str, category: &str, payment: &str) -> Result<bool> {
    view.edit(DraftInput::Item(item.to_string()));
    view.edit(DraftInput::Amount(amount.to_string()));
    view.edit(DraftInput::Category(category.to_string()));
    view.edit(DraftInput::Payment(payment.to_string()));

    view.submit().await.ok_or_else(|| anyhow!("View task ended"))
}

#[tokio::test]
async fn test_live_view_tracks_balances_filters_and_alerts() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let view = ViewActor::new(store.clone());

    assert!(add_expense(&view, "Lulu weekly shop", "214.75", "Grocery", "ENBD Credit Card").await?);
    assert!(add_expense(&view, "ENBD Credit Card", "150", "Credit Card Repayment", "").await?);
    assert!(add_expense(&view, "Flight to Karachi", "7600", "Travel & Entertainment", "FAB Credit Card").await?);
    assert!(add_expense(&view, "Shawarma", "18.5", "Food", "ADCB Debit Card").await?);

    // An incomplete draft never reaches the store.
    assert!(!add_expense(&view, "", "10", "Food", "ADCB Debit Card").await?);

    let state = view.read().await.ok_or_else(|| anyhow!("View task ended"))?;

    assert_eq!(state.expenses().len(), 4);
    assert_eq!(state.expenses()[0].item, "Shawarma");
    assert_eq!(state.total(), Decimal::from_str("7983.25")?);

    let enbd = state
        .balances()
        .iter()
        .find(|entry| entry.card == PaymentMethod::EnbdCreditCard)
        .ok_or_else(|| anyhow!("ENBD Credit Card missing from balances"))?;
    assert_eq!(enbd.balance, Decimal::from_str("-64.75")?);

    let adcb = state
        .balances()
        .iter()
        .find(|entry| entry.card == PaymentMethod::AdcbCreditCard)
        .ok_or_else(|| anyhow!("ADCB Credit Card missing from balances"))?;
    assert_eq!(adcb.balance, Decimal::ZERO);

    assert_eq!(
        state.alerts(),
        vec!["FAB Credit Card has exceeded the limit of 7,500 AED.".to_string()]
    );

    assert!(view.set_filter(FilterInput::Category(Some(Category::Food))));

    let filtered_state = view.read().await.ok_or_else(|| anyhow!("View task ended"))?;

    assert_eq!(filtered_state.filtered().len(), 1);
    assert_eq!(filtered_state.filtered()[0].item, "Shawarma");
    assert_eq!(filtered_state.total(), Decimal::from_str("18.5")?);

    // The alert set is derived from the full list, not the filtered one.
    assert_eq!(filtered_state.alerts().len(), 1);

    view.despawn().await?;

    Ok(())
}

#[test]
fn test_cli_prints_report_for_the_sample_seed() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_expense-tracker");
    let sample_path = Path::new("samples").join("expenses.csv");

    let output = Command::new(binary_path)
        .arg(sample_path)
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("-- total --"));
    assert!(stdout.contains("8,058.25 AED"));
    assert!(stdout.contains("ENBD Credit Card: -64.75 AED"));
    assert!(stdout.contains("ADCB Credit Card: 0.00 AED"));
    assert!(stdout.contains("FAB Credit Card: -7,600.00 AED"));
    assert!(stdout.contains("FAB Credit Card has exceeded the limit of 7,500 AED."));

    Ok(())
}

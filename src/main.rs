use std::io::{stderr, stdout, BufWriter, Write};
use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use expense_tracker::seed::replay_csv;
use expense_tracker::store::MemoryStore;
use expense_tracker::types::format_aed;
use expense_tracker::view::{ExpenseView, ViewActor};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: expense-tracker [seed].csv [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = Path::new(&args[1]);
    let log_level = args.get(2)
        .map(|level| parse_log_level(level)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let store = Arc::new(MemoryStore::new());
    let view = ViewActor::new(store.clone());

    let timer = Instant::now();
    let outcome = replay_csv(path, &view).await?;
    let duration = timer.elapsed();

    info!(
        "Replayed {} rows ({} accepted, {} rejected) in {duration:?}",
        outcome.accepted + outcome.rejected,
        outcome.accepted,
        outcome.rejected
    );

    let state = view.read().await.ok_or_else(|| anyhow!("View task ended before the report"))?;

    write_report_to_stdout(&state)?;

    view.despawn().await?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // Stdout carries the report, so logging goes to stderr.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(state: &ExpenseView) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "-- expenses --")?;

    for expense in state.filtered() {
        let payment = expense
            .payment_method
            .map(|method| method.to_string())
            .unwrap_or_else(|| "-".to_string());

        writeln!(
            output,
            "{}  {} AED  {} / {}  {}",
            expense.date.format("%Y-%m-%d"),
            format_aed(expense.amount),
            expense.category,
            payment,
            expense.item
        )?;
    }

    writeln!(output, "-- total --")?;
    writeln!(output, "{} AED", format_aed(state.total()))?;

    writeln!(output, "-- credit cards --")?;

    for entry in state.balances() {
        writeln!(output, "{}: {} AED", entry.card, format_aed(entry.balance))?;
    }

    if !state.alerts().is_empty() {
        writeln!(output, "-- alerts --")?;

        for alert in state.alerts() {
            writeln!(output, "{alert}")?;
        }
    }

    output.flush()?;

    Ok(())
}
